//! Snapshot sinks.
//!
//! The original client overwrote the document body on every update; the
//! [`Render`] trait is that seam. The snapshot string is written as-is,
//! without any HTML validation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sink replacing the whole rendered document with a new snapshot.
pub trait Render: Send {
    /// Replace the rendered content with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written. The client logs and
    /// ignores render failures; they never tear down the connection.
    fn render(&mut self, snapshot: &str) -> io::Result<()>;
}

/// Renderer overwriting a target file with each snapshot.
///
/// Writes go through a sibling temp file and a rename, so a reader never
/// observes a partially written snapshot.
pub struct FileRenderer {
    path: PathBuf,
}

impl FileRenderer {
    /// Create a renderer targeting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Render for FileRenderer {
    fn render(&mut self, snapshot: &str) -> io::Result<()> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, snapshot)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_renderer_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut renderer = FileRenderer::new(&path);

        renderer.render("<h1>v1</h1>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>v1</h1>");
    }

    #[test]
    fn test_file_renderer_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut renderer = FileRenderer::new(&path);

        renderer.render("<h1>a much longer first snapshot</h1>").unwrap();
        renderer.render("<p>b</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>b</p>");
    }

    #[test]
    fn test_file_renderer_missing_directory() {
        let mut renderer = FileRenderer::new("/nonexistent/dir/preview.html");
        assert!(renderer.render("<p>x</p>").is_err());
    }
}
