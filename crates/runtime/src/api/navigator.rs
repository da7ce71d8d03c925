//! Navigation capability injected into the session controller.
//!
//! The controller only ever needs one transition: leave the game screen for
//! the result screen once the result has been stored.
use std::sync::Arc;

/// Screen-transition collaborator.
///
/// Different implementations can handle:
/// - Terminal or GUI routers
/// - Recording stubs in tests
pub trait Navigator: Send + Sync {
    /// Request the transition to the result screen. Fire-and-forget.
    fn go_to_result_screen(&self);
}

impl<T> Navigator for Arc<T>
where
    T: Navigator + ?Sized,
{
    fn go_to_result_screen(&self) {
        (**self).go_to_result_screen();
    }
}

/// Navigator that only logs the request.
/// Useful for headless runs or as a fallback.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn go_to_result_screen(&self) {
        tracing::debug!("Result screen requested (no navigator attached)");
    }
}
