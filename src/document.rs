//! The document behind the editor buffer: backing path and modified flag.
//!
//! Buffer text itself lives in the editor widget; this type only tracks
//! where it belongs on disk and whether it has unsaved edits.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Extension appended to save-as names that lack one.
pub const FILE_EXTENSION: &str = "py";

#[derive(Debug, Default)]
pub struct Document {
    path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and return the document handle with the file's text.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, String)> {
        let path = path.into();
        let text = fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Ok((
            Self {
                path: Some(path),
                modified: false,
            },
            text,
        ))
    }

    /// Write `text` to the backing path and clear the modified flag.
    pub fn save(&mut self, text: &str) -> Result<PathBuf> {
        let Some(path) = self.path.clone() else {
            bail!("no file name set");
        };
        self.save_to(path, text)
    }

    /// Write `text` to `path`, adopting it as the backing path.
    pub fn save_to(&mut self, path: impl Into<PathBuf>, text: &str) -> Result<PathBuf> {
        let path = path.into();
        fs::write(&path, text).with_context(|| format!("could not write {}", path.display()))?;
        self.path = Some(path.clone());
        self.modified = false;
        Ok(path)
    }

    /// Forget the backing path and unsaved edits, as for a fresh buffer.
    pub fn reset(&mut self) {
        self.path = None;
        self.modified = false;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for the status bar, `Untitled` when nothing backs it.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }
}

/// Append the default extension when the entered name has none.
pub fn with_default_extension(input: &str) -> PathBuf {
    let path = PathBuf::from(input);
    if path.extension().is_none() {
        path.with_extension(FILE_EXTENSION)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.py");
        fs::write(&path, "x = 1\n").unwrap();

        let (mut doc, text) = Document::open(&path).unwrap();
        assert_eq!(text, "x = 1\n");
        assert!(!doc.is_modified());
        assert_eq!(doc.display_name(), "lesson.py");

        doc.set_modified(true);
        doc.save("x = 2\n").unwrap();
        assert!(!doc.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x = 2\n");
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::new();
        assert!(doc.save("pass").is_err());
    }

    #[test]
    fn test_save_to_adopts_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.py");

        let mut doc = Document::new();
        doc.set_modified(true);
        doc.save_to(&path, "print('hi')").unwrap();
        assert_eq!(doc.path(), Some(path.as_path()));
        assert!(!doc.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "print('hi')");
    }

    #[test]
    fn test_open_missing_file_mentions_path() {
        let err = Document::open("/no/such/dir/missing.py").unwrap_err();
        assert!(format!("{err:#}").contains("missing.py"));
    }

    #[test]
    fn test_untitled_display_name() {
        assert_eq!(Document::new().display_name(), "Untitled");
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(with_default_extension("notes"), PathBuf::from("notes.py"));
        assert_eq!(with_default_extension("notes.txt"), PathBuf::from("notes.txt"));
        assert_eq!(
            with_default_extension("dir/sketch"),
            PathBuf::from("dir/sketch.py")
        );
    }
}
