//! Terminal size queries

use crate::error::Result;

/// Source of the console dimensions
pub trait TerminalSize {
    /// Current `(width, height)` in character cells
    fn dimensions(&self) -> Result<(usize, usize)>;
}

/// The controlling terminal of this process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTerminal;

impl SystemTerminal {
    /// Size used where the platform offers no query
    pub const FALLBACK: (usize, usize) = (80, 24);
}

impl TerminalSize for SystemTerminal {
    #[cfg(unix)]
    fn dimensions(&self) -> Result<(usize, usize)> {
        use std::os::unix::io::AsRawFd;

        use crate::error::FlyDbError;

        let stdin_fd = std::io::stdin().as_raw_fd();

        // SAFETY: TIOCGWINSZ fills a caller-owned, zero-initialised winsize.
        let winsize = unsafe {
            let mut winsize: libc::winsize = std::mem::zeroed();
            if libc::ioctl(stdin_fd, libc::TIOCGWINSZ, &mut winsize) < 0 {
                return Err(FlyDbError::Terminal(format!(
                    "ioctl TIOCGWINSZ failed: {}",
                    std::io::Error::last_os_error()
                )));
            }
            winsize
        };

        Ok((winsize.ws_col as usize, winsize.ws_row as usize))
    }

    #[cfg(not(unix))]
    fn dimensions(&self) -> Result<(usize, usize)> {
        Ok(Self::FALLBACK)
    }
}

/// A terminal of known size (headless runs, tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize for FixedSize {
    fn dimensions(&self) -> Result<(usize, usize)> {
        Ok((self.width, self.height))
    }
}
