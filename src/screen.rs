// 🖥️ Screen - best-effort "clear display" capability
// Clearing is cosmetic. It never fails the session, and with piped I/O
// (tests, scripts) it does nothing.

use std::io::Write;

pub trait Screen {
    /// Clear the visible terminal and home the cursor, if possible
    fn clear(&mut self, out: &mut dyn Write);
}

/// Never clears. Used with `--no-clear`, in tests, and without the
/// `terminal` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScreen;

impl Screen for NoopScreen {
    fn clear(&mut self, _out: &mut dyn Write) {}
}

#[cfg(feature = "terminal")]
pub use terminal::TerminalScreen;

#[cfg(feature = "terminal")]
mod terminal {
    use super::Screen;
    use crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{Clear, ClearType},
        tty::IsTty,
    };
    use std::io::Write;
    use tracing::warn;

    /// Clears through crossterm, but only when stdout is a real terminal
    #[derive(Debug, Clone, Copy)]
    pub struct TerminalScreen {
        pub(super) attached: bool,
    }

    impl TerminalScreen {
        pub fn new() -> Self {
            TerminalScreen {
                attached: std::io::stdout().is_tty(),
            }
        }

        pub fn is_attached(&self) -> bool {
            self.attached
        }
    }

    impl Default for TerminalScreen {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Screen for TerminalScreen {
        fn clear(&mut self, mut out: &mut dyn Write) {
            if !self.attached {
                return;
            }
            if let Err(err) = execute!(&mut out, Clear(ClearType::All), MoveTo(0, 0)) {
                warn!(error = %err, "could not clear terminal");
                // Stop trying once the terminal refuses
                self.attached = false;
            }
        }
    }
}

/// Screen matching the build and the user's choice
pub fn for_terminal(clear_screen: bool) -> Box<dyn Screen> {
    #[cfg(feature = "terminal")]
    {
        if clear_screen {
            let screen = TerminalScreen::new();
            tracing::debug!(attached = screen.is_attached(), "terminal screen");
            return Box::new(screen);
        }
    }
    #[cfg(not(feature = "terminal"))]
    let _ = clear_screen;

    Box::new(NoopScreen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_screen_writes_nothing() {
        let mut out = Vec::new();
        NoopScreen.clear(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_disabled_clearing_writes_nothing() {
        let mut screen = for_terminal(false);
        let mut out = Vec::new();
        screen.clear(&mut out);
        assert!(out.is_empty());
    }

    #[cfg(feature = "terminal")]
    #[test]
    fn test_terminal_screen_detached_writes_nothing() {
        let mut screen = TerminalScreen { attached: false };
        let mut out = Vec::new();
        screen.clear(&mut out);
        assert!(out.is_empty());
    }
}
