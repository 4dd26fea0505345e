//! Terminal setup that undoes itself on drop
//!
//! Every exit from the TUI, including `?` on a failed backend, leaves the
//! terminal the way it was found.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw mode, disabled again when dropped
#[derive(Debug)]
pub struct RawMode(());

impl RawMode {
    /// Switches the terminal to raw mode
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // Best effort teardown, errors are ignored during drop
        let _ = disable_raw_mode();
    }
}

/// Alternate screen with mouse capture, left again when dropped
#[derive(Debug)]
pub struct AlternateScreen<W: Write> {
    out: W,
}

impl<W: Write> AlternateScreen<W> {
    /// Enters the alternate screen and enables mouse capture on `out`
    pub fn enter(mut out: W) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for AlternateScreen<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, DisableMouseCapture, LeaveAlternateScreen, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTER: &str = "\x1b[?1049h";
    const LEAVE: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    fn backend_fails(out: &mut Vec<u8>) -> io::Result<()> {
        let _screen = AlternateScreen::enter(out)?;
        Err(io::Error::other("backend unavailable"))
    }

    // ===== AlternateScreen tests =====

    #[test]
    fn test_enter_writes_alternate_screen() {
        let mut out = Vec::new();
        let screen = AlternateScreen::enter(&mut out).unwrap();
        drop(screen);
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with(ENTER));
    }

    #[test]
    fn test_drop_restores_screen() {
        let mut out = Vec::new();
        {
            let _screen = AlternateScreen::enter(&mut out).unwrap();
        }
        let written = String::from_utf8(out).unwrap();
        let enter = written.find(ENTER).unwrap();
        let leave = written.find(LEAVE).unwrap();
        assert!(enter < leave);
        assert!(written.ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_restored_when_setup_fails_later() {
        let mut out = Vec::new();
        assert!(backend_fails(&mut out).is_err());
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE));
        assert!(written.contains(SHOW_CURSOR));
    }
}
