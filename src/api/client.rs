//! Purpose: Define the public client surface a presentation layer consumes.
//! Exports: `Library` and its catalog, circulation, and listing operations.
//! Role: Stable boundary for adapters; hides store locking and load/save cycles.
//! Invariants: Every mutating operation is one lock-load-mutate-save cycle.
//! Invariants: No in-memory session state survives between operations.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use super::validation::require_non_empty;
use crate::core::catalog;
use crate::core::circulation;
use crate::core::error::{Error, ErrorKind};
use crate::core::model::{Book, Member, Transaction};
use crate::core::store::Store;
use crate::store_paths::{StoreNameResolveError, default_data_dir, resolve_named_store_path};

pub type ApiResult<T> = Result<T, Error>;

/// Handle on one library store. Cheap to construct; every operation
/// opens the backing file afresh, so two handles on the same path see
/// each other's committed writes.
#[derive(Debug)]
pub struct Library {
    store: Store,
}

impl Library {
    /// Open a library at an explicit path, creating the backing file
    /// with an empty dataset on first use. Existing content is never
    /// overwritten.
    pub fn create(path: impl AsRef<Path>) -> ApiResult<Self> {
        let store = Store::new(path);
        store.initialize()?;
        Ok(Self { store })
    }

    /// Open an existing library at an explicit path. Fails with
    /// `NotFound` if the file is absent and `Corrupt` if its content
    /// does not deserialize.
    pub fn open(path: impl AsRef<Path>) -> ApiResult<Self> {
        let store = Store::new(path);
        store.load()?;
        Ok(Self { store })
    }

    /// Open a named library under the default data directory,
    /// creating both as needed.
    pub fn named(name: &str) -> ApiResult<Self> {
        let data_dir = default_data_dir();
        let path = resolve_name(name, &data_dir)?;
        std::fs::create_dir_all(&data_dir).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to create data directory")
                .with_path(&data_dir)
                .with_source(err)
        })?;
        Self::create(path)
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Catalog a new book. All three fields are required non-empty; a
    /// duplicate isbn is rejected with `AlreadyExists`.
    pub fn add_book(&self, title: &str, author: &str, isbn: &str) -> ApiResult<()> {
        require_non_empty("title", title)?;
        require_non_empty("author", author)?;
        require_non_empty("isbn", isbn)?;

        let _guard = self.store.lock()?;
        let mut data = self.store.load()?;
        catalog::add_book(&mut data, title, author, isbn)?;
        self.store.save(&data)
    }

    /// Register a new member. Both fields required non-empty; a
    /// duplicate member id is rejected with `AlreadyExists`.
    pub fn add_member(&self, name: &str, member_id: &str) -> ApiResult<()> {
        require_non_empty("name", name)?;
        require_non_empty("member_id", member_id)?;

        let _guard = self.store.lock()?;
        let mut data = self.store.load()?;
        catalog::add_member(&mut data, name, member_id)?;
        self.store.save(&data)
    }

    /// Issue the first available copy of `isbn` to `member_id`.
    /// `Ok(false)` means no available copy exists; nothing is written
    /// in that case.
    pub fn issue_book(&self, isbn: &str, member_id: &str) -> ApiResult<bool> {
        require_non_empty("isbn", isbn)?;
        require_non_empty("member_id", member_id)?;

        let _guard = self.store.lock()?;
        let mut data = self.store.load()?;
        let issued = circulation::issue_book(&mut data, isbn, member_id)?;
        if issued {
            self.store.save(&data)?;
        }
        Ok(issued)
    }

    /// Return the first issued copy of `isbn`. The returning member
    /// need not be the one the copy was issued to.
    pub fn return_book(&self, isbn: &str, member_id: &str) -> ApiResult<bool> {
        require_non_empty("isbn", isbn)?;
        require_non_empty("member_id", member_id)?;

        let _guard = self.store.lock()?;
        let mut data = self.store.load()?;
        let returned = circulation::return_book(&mut data, isbn, member_id)?;
        if returned {
            self.store.save(&data)?;
        }
        Ok(returned)
    }

    pub fn list_books(&self) -> ApiResult<Vec<Book>> {
        Ok(self.store.load()?.books)
    }

    pub fn list_members(&self) -> ApiResult<Vec<Member>> {
        Ok(self.store.load()?.members)
    }

    pub fn list_transactions(&self) -> ApiResult<Vec<Transaction>> {
        Ok(self.store.load()?.transactions)
    }
}

fn resolve_name(name: &str, data_dir: &Path) -> ApiResult<PathBuf> {
    resolve_named_store_path(name, data_dir).map_err(map_store_name_resolve_error)
}

fn map_store_name_resolve_error(err: StoreNameResolveError) -> Error {
    match err {
        StoreNameResolveError::ContainsPathSeparator => Error::new(ErrorKind::Validation)
            .with_message("store name must not contain path separators")
            .with_field("name"),
    }
}
