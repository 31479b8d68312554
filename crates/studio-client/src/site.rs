//! The page shell: static section content composed with the two stateful
//! flows. Layout, styling, and markup are out of scope; this is the
//! behavioral skeleton the rendering layer reads from.

use crate::client::Client;
use crate::flows::{ContactForm, PortfolioBoard};

use studio_config::{Config, SiteConfig};

/// Static copy for the hero, about, and navigation sections.
#[derive(Debug, Clone)]
pub struct SectionContent {
    pub hero_heading: &'static str,
    pub hero_tagline: &'static str,
    pub about_heading: &'static str,
    pub work_heading: &'static str,
    pub contact_heading: &'static str,
    pub nav_sections: [&'static str; 3],
}

impl Default for SectionContent {
    fn default() -> Self {
        Self {
            hero_heading: "Architecture with clarity and calm",
            hero_tagline: "A boutique studio for residential and commercial work",
            about_heading: "Designing spaces with restraint and intention",
            work_heading: "Built with precision and calm",
            contact_heading: "Let's discuss your project",
            nav_sections: ["About", "Work", "Contact"],
        }
    }
}

/// The whole page. Each section owns its state exclusively and fails
/// independently; no failure here is fatal to the rest of the page.
pub struct Site {
    pub identity: SiteConfig,
    pub content: SectionContent,
    pub contact: ContactForm,
    pub portfolio: PortfolioBoard,
    backend: Option<Client>,
}

impl Site {
    /// Build the page from configuration. A missing backend URL is not
    /// fatal here: the static sections still render, and both network
    /// flows fail closed with a configuration message when triggered.
    pub fn from_config(config: &Config) -> Self {
        let backend = config.backend_url().ok().map(Client::new);

        Self {
            identity: config.site.clone(),
            content: SectionContent::default(),
            contact: ContactForm::new(),
            portfolio: PortfolioBoard::new(),
            backend,
        }
    }

    pub fn backend(&self) -> Option<&Client> {
        self.backend.as_ref()
    }

    /// Activate the page: the portfolio issues its one listing fetch.
    pub async fn activate(&mut self) {
        self.portfolio.load(self.backend.as_ref()).await;
    }

    /// Tear down the page; responses still in flight become no-ops.
    pub fn deactivate(&self) {
        self.portfolio.view_token().deactivate();
    }

    /// User intent: submit the contact form.
    pub async fn submit_contact(&mut self) {
        self.contact.submit(self.backend.as_ref()).await;
    }

    /// User intent: save the portfolio draft, then reload the listing.
    pub async fn create_project(&mut self) {
        self.portfolio.create(self.backend.as_ref()).await;
    }

    pub fn footer_line(&self) -> String {
        format!("© {}. All rights reserved.", self.identity.studio_name)
    }
}
