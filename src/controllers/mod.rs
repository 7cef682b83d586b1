pub mod cart;
pub mod search;

pub use cart::{CartController, ClearOutcome};
pub use search::SearchController;

/// Loading-state sink for the search flow. The CLI prints a status
/// line; tests record the transitions.
pub trait LoadingIndicator: Send + Sync {
    fn set_busy(&self, busy: bool);
}

/// Scoped acquisition of the loading indicator: busy on construction,
/// cleared on drop, so the release happens on success, failure and
/// panic alike.
pub struct BusyGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.set_busy(true);
        Self { indicator }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.indicator.set_busy(false);
    }
}

/// Blocking yes/no prompt, asked before destructive cart operations
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}
