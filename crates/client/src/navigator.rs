//! Screen routing between the session runtime and the terminal loop.
use runtime::Navigator;
use tokio::sync::mpsc;

/// Screens the session can route to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Result,
}

/// Forwards navigation requests to the app loop over a channel.
#[derive(Clone, Debug)]
pub struct ScreenNavigator {
    tx: mpsc::UnboundedSender<Screen>,
}

impl ScreenNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Screen>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ScreenNavigator {
    fn go_to_result_screen(&self) {
        if self.tx.send(Screen::Result).is_err() {
            tracing::debug!("Navigation requested after the app loop exited");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_result_screen() {
        let (navigator, mut screens) = ScreenNavigator::new();
        navigator.go_to_result_screen();
        assert_eq!(screens.try_recv().ok(), Some(Screen::Result));
    }

    #[test]
    fn closed_loop_is_not_an_error() {
        let (navigator, screens) = ScreenNavigator::new();
        drop(screens);
        navigator.go_to_result_screen();
    }
}
