//! JSON data file holding the library.
//!
//! One file per data directory. Writes go to a sibling temp file which is
//! then renamed over the original, so a crash never leaves a half-written
//! library behind. A file that no longer parses is moved aside rather than
//! overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinkError, LinkResult};
use crate::library::Library;

/// File name of the library inside the data directory
pub const LIBRARY_FILE: &str = "library.json";

/// Result of [`LibraryStore::load_or_recover`]
#[derive(Debug)]
pub struct Recovered {
    pub library: Library,
    /// Where an unparseable data file was moved to
    pub moved_to: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
    read_only: bool,
}

impl LibraryStore {
    /// Store rooted at `data_dir`; the directory is created on first save
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(LIBRARY_FILE),
            read_only: false,
        }
    }

    /// Same file, but every [`save`](Self::save) is refused
    pub fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the library; a file that exists but does not parse is renamed
    /// to `library.json.corrupt-<timestamp>` and an empty library returned.
    ///
    /// I/O failures are returned as is and leave the file in place.
    pub fn load_or_recover(&self) -> LinkResult<Recovered> {
        match self.load() {
            Ok(library) => Ok(Recovered {
                library,
                moved_to: None,
            }),
            Err(LinkError::Serialization(e)) => {
                let moved_to = self.corrupt_path();
                fs::rename(&self.path, &moved_to)?;
                tracing::warn!(
                    from = ?self.path,
                    to = ?moved_to,
                    "library file unreadable ({}), moved aside",
                    e
                );
                Ok(Recovered {
                    library: Library::new(),
                    moved_to: Some(moved_to),
                })
            }
            Err(e) => Err(e),
        }
    }

    fn corrupt_path(&self) -> PathBuf {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%3f");
        self.path.with_extension(format!("json.corrupt-{stamp}"))
    }

    /// Load the library, or an empty one if no file exists yet
    pub fn load(&self) -> LinkResult<Library> {
        if !self.path.exists() {
            tracing::debug!(path = ?self.path, "no library file yet");
            return Ok(Library::new());
        }
        let bytes = fs::read(&self.path)?;
        let library: Library = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = ?self.path,
            links = library.links.len(),
            groups = library.groups.len(),
            "library loaded"
        );
        Ok(library)
    }

    pub fn save(&self, library: &Library) -> LinkResult<()> {
        if self.read_only {
            return Err(LinkError::SavingDisabled(self.path.display().to_string()));
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(library)?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
