//! Purpose: Define the stable public Rust API boundary for bibliofile.
//! Exports: The operation surface a presentation layer consumes.
//! Role: Public, additive-only surface; hides store internals.
//! Invariants: This module is the only public path adapters should use.
//! Invariants: Internal locking and load/save cycles are not exposed.

mod client;
mod validation;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::model::{Action, Book, Dataset, Member, Transaction};
pub use crate::core::store::{Store, StoreLock};
pub use client::{ApiResult, Library};
