//! Terminal snapshot renderer.

use std::io;

use console::Term;
use liveview_client::Render;

/// Renderer clearing the terminal and printing each snapshot to stdout.
///
/// The snapshot replaces the whole screen, mirroring the wholesale
/// document overwrite the file renderer does.
pub(crate) struct TerminalRenderer {
    term: Term,
}

impl TerminalRenderer {
    /// Create a renderer targeting stdout.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Render for TerminalRenderer {
    fn render(&mut self, snapshot: &str) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(snapshot)
    }
}
