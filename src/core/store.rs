// Store file creation and whole-dataset load/save with exclusive locking.
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use libc::{EACCES, EPERM};
use tracing::{debug, warn};

use crate::core::error::{Error, ErrorKind};
use crate::core::model::Dataset;

/// Durable whole-dataset storage against a single JSON file.
///
/// The dataset is always read and written as a unit; there are no
/// partial updates. Saves serialize into a sibling scratch file and
/// rename it over the target, so the backing file only ever holds a
/// complete dataset and a failed save leaves the prior content
/// untouched. Mutating callers take [`Store::lock`] around the entire
/// load-mutate-save cycle so concurrent writers cannot interleave and
/// silently drop each other's updates; the lock lives on a stable
/// `.lock` sibling because the data file itself is replaced on save.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty dataset iff it does not
    /// already exist. Never overwrites. The existence check and the
    /// initial write happen under the store lock, so a racing second
    /// first-run blocks until the winner's complete file is in place.
    pub fn initialize(&self) -> Result<(), Error> {
        let _guard = self.lock()?;
        if self.path.exists() {
            return Ok(());
        }
        self.replace_with(&Dataset::empty())?;
        debug!(path = %self.path.display(), "initialized empty library store");
        Ok(())
    }

    /// Read and deserialize the entire backing file.
    pub fn load(&self) -> Result<Dataset, Error> {
        let bytes = std::fs::read(&self.path).map_err(|err| {
            Error::new(map_io_error_kind(&err))
                .with_message("failed to read library store")
                .with_path(&self.path)
                .with_source(err)
        })?;
        let dataset: Dataset = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(path = %self.path.display(), "library store did not deserialize");
            Error::new(ErrorKind::Corrupt)
                .with_message("library store is not a valid dataset")
                .with_path(&self.path)
                .with_source(err)
        })?;
        Ok(dataset)
    }

    /// Serialize the full dataset and replace the file's prior
    /// content. The replacement is atomic; on failure the prior
    /// content is still in place.
    pub fn save(&self, dataset: &Dataset) -> Result<(), Error> {
        self.replace_with(dataset)?;
        debug!(
            path = %self.path.display(),
            books = dataset.books.len(),
            members = dataset.members.len(),
            transactions = dataset.transactions.len(),
            "saved library store"
        );
        Ok(())
    }

    /// Exclusive advisory lock over the store. Held by mutating
    /// callers across load, mutate, and save; released on drop.
    pub fn lock(&self) -> Result<StoreLock, Error> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|err| {
                Error::new(map_io_error_kind(&err))
                    .with_message("failed to open library store lock file")
                    .with_path(&lock_path)
                    .with_source(err)
            })?;
        file.lock_exclusive().map_err(|err| {
            Error::new(lock_error_kind(&err))
                .with_path(&lock_path)
                .with_source(err)
        })?;
        Ok(StoreLock { file })
    }

    fn replace_with(&self, dataset: &Dataset) -> Result<(), Error> {
        let scratch = self.scratch_path();
        let result = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&scratch)
            .map_err(|err| {
                Error::new(map_io_error_kind(&err))
                    .with_message("failed to open library store scratch file")
                    .with_path(&scratch)
                    .with_source(err)
            })
            .and_then(|mut file| write_dataset(&mut file, dataset, &scratch))
            .and_then(|_| {
                std::fs::rename(&scratch, &self.path).map_err(|err| {
                    Error::new(map_io_error_kind(&err))
                        .with_message("failed to replace library store")
                        .with_path(&self.path)
                        .with_source(err)
                })
            });
        if result.is_err() {
            let _ = std::fs::remove_file(&scratch);
        }
        result
    }

    fn lock_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".lock")
    }

    fn scratch_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".tmp")
    }
}

pub struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_dataset(file: &mut File, dataset: &Dataset, path: &Path) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(dataset).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("dataset serialization failed")
            .with_source(err)
    })?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .map_err(|err| {
            Error::new(map_io_error_kind(&err))
                .with_message("failed to write library store")
                .with_path(path)
                .with_source(err)
        })
}

fn map_io_error_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}

fn lock_error_kind(err: &io::Error) -> ErrorKind {
    let errno = err.raw_os_error().unwrap_or_default();
    if errno == EACCES || errno == EPERM {
        return ErrorKind::Permission;
    }
    match err.kind() {
        io::ErrorKind::WouldBlock => ErrorKind::Busy,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}
