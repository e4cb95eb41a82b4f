//! Defines the [`Sink`] trait, the destination for generated files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persists named output files (e.g., `index.html`).
pub trait Sink {
    /// Stores `contents` under `name`, replacing anything already there.
    fn persist(&mut self, name: &str, contents: &str) -> io::Result<()>;
}

/// Writes files into a directory on disk. The directory (and its parents)
/// is created on first write.
pub struct DirectorySink {
    root: PathBuf,
    created: bool,
}

impl DirectorySink {
    pub fn new(root: &Path) -> DirectorySink {
        DirectorySink {
            root: root.to_owned(),
            created: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Sink for DirectorySink {
    fn persist(&mut self, name: &str, contents: &str) -> io::Result<()> {
        if !self.created {
            fs::create_dir_all(&self.root)?;
            self.created = true;
        }
        fs::write(self.root.join(name), contents)
    }
}

/// Keeps files in memory, keyed by name.
impl Sink for BTreeMap<String, String> {
    fn persist(&mut self, name: &str, contents: &str) -> io::Result<()> {
        self.insert(name.to_owned(), contents.to_owned());
        Ok(())
    }
}
