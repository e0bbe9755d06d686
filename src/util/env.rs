//! Terminal detection.

use std::io::IsTerminal;

/// Output stream a piece of text is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Whether this stream is attached to a terminal.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

fn term_is_dumb() -> bool {
    std::env::var("TERM").is_ok_and(|t| t == "dumb")
}

/// Whether output written to `stream` should carry ANSI colors.
///
/// `no_color` is the already-resolved setting (flag, `NO_COLOR`, config).
#[must_use]
pub fn should_use_color(no_color: bool, stream: Stream) -> bool {
    !no_color && !term_is_dumb() && stream.is_terminal()
}
