use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared deactivation flag for a mounted view.
///
/// Flows check the token before every state update that follows an awaited
/// call, so a response arriving after the view is torn down becomes a
/// no-op instead of mutating unmounted state.
#[derive(Debug, Clone)]
pub struct ViewToken {
    active: Arc<AtomicBool>,
}

impl ViewToken {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the view as torn down. In-flight flows finish silently.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Default for ViewToken {
    fn default() -> Self {
        Self::new()
    }
}
