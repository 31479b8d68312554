//! Local validation rules. These run on explicit submission only and gate
//! every network call.

use crate::{CoreError, Result};

/// Validate the three required contact fields.
///
/// Fails with [`CoreError::EmptyField`] when any field is empty after
/// trimming, then with [`CoreError::InvalidEmail`] when the email does not
/// look like `local@domain.tld`.
pub fn validate_inquiry(name: &str, email: &str, message: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CoreError::empty_field("name"));
    }
    if email.trim().is_empty() {
        return Err(CoreError::empty_field("email"));
    }
    if message.trim().is_empty() {
        return Err(CoreError::empty_field("message"));
    }
    if !is_email_shaped(email) {
        return Err(CoreError::invalid_email(email));
    }

    Ok(())
}

/// Loose email shape check: an unanchored search for
/// `something@something.something`, where "something" is any run of
/// non-`@`, non-whitespace characters. Intentionally permissive and kept
/// exactly as loose as the original form behaved; this is not RFC 5322
/// validation.
pub fn is_email_shaped(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        // Candidate '@' must have at least one run character before it.
        if c != '@' || i == 0 || is_run_break(chars[i - 1]) {
            continue;
        }

        // The run after the '@' extends to the next '@', whitespace, or the
        // end. It must contain a '.' with run characters on both sides.
        let run: Vec<char> = chars[i + 1..]
            .iter()
            .copied()
            .take_while(|&c| !is_run_break(c))
            .collect();

        if run
            .iter()
            .enumerate()
            .any(|(j, &c)| c == '.' && j > 0 && j + 1 < run.len())
        {
            return true;
        }
    }

    false
}

fn is_run_break(c: char) -> bool {
    c == '@' || c.is_whitespace()
}

/// Split a free-text tag field on commas into trimmed, non-empty tag
/// strings, preserving input order.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
