//! Purpose: Shared local data-directory and store-name path resolution helpers.
//! Exports: `default_data_dir` and `resolve_named_store_path`.
//! Role: Keep presentation adapters' path semantics aligned from one source.
//! Invariants: Default data directory remains `~/.bibliofile`.
//! Invariants: Named store refs must not contain path separators.

use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum StoreNameResolveError {
    ContainsPathSeparator,
}

pub(crate) fn default_data_dir() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    PathBuf::from(home).join(".bibliofile")
}

pub(crate) fn resolve_named_store_path(
    name: &str,
    data_dir: &Path,
) -> Result<PathBuf, StoreNameResolveError> {
    if name.contains('/') {
        return Err(StoreNameResolveError::ContainsPathSeparator);
    }
    if name.ends_with(".json") {
        return Ok(data_dir.join(name));
    }
    Ok(data_dir.join(format!("{name}.json")))
}

#[cfg(test)]
mod tests {
    use super::{StoreNameResolveError, resolve_named_store_path};
    use std::path::PathBuf;

    #[test]
    fn name_gains_json_suffix() {
        let dir = PathBuf::from(".scratch/data");
        let path = resolve_named_store_path("branch", &dir).expect("path");
        assert_eq!(path, PathBuf::from(".scratch/data/branch.json"));
    }

    #[test]
    fn name_keeps_existing_suffix() {
        let dir = PathBuf::from(".scratch/data");
        let path = resolve_named_store_path("branch.json", &dir).expect("path");
        assert_eq!(path, PathBuf::from(".scratch/data/branch.json"));
    }

    #[test]
    fn name_rejects_slash() {
        let dir = PathBuf::from(".scratch/data");
        let err = resolve_named_store_path("foo/bar", &dir).expect_err("err");
        assert_eq!(err, StoreNameResolveError::ContainsPathSeparator);
    }
}
