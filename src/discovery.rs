//! Locating the wkhtmltoimage binary.
//!
//! Discovery runs at most once per process and caches the winning path. The
//! search order is: the directory containing the running executable, the
//! system `PATH`, and finally the directory named by the
//! `WKHTMLTOIMAGE_PATH` environment variable. An explicit
//! [`ImageOptions::binary_path`](crate::ImageOptions::binary_path) bypasses
//! discovery entirely.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::{Error, Result};

/// Environment variable naming a fallback directory to search.
pub const PATH_ENV_VAR: &str = "WKHTMLTOIMAGE_PATH";

#[cfg(windows)]
const BINARY_NAME: &str = "wkhtmltoimage.exe";
#[cfg(not(windows))]
const BINARY_NAME: &str = "wkhtmltoimage";

static BINARY_PATH: OnceCell<PathBuf> = OnceCell::new();

/// The binary path discovered earlier in this process, if any.
///
/// Returns `None` until the first successful discovery. Paths supplied
/// explicitly through options never populate this cache.
pub fn resolved_binary_path() -> Option<&'static Path> {
    BINARY_PATH.get().map(PathBuf::as_path)
}

/// Returns the cached binary path, running discovery on first use.
///
/// Idempotent: concurrent callers racing the first discovery settle on the
/// same value.
pub(crate) fn resolve() -> Result<&'static Path> {
    BINARY_PATH
        .get_or_try_init(|| {
            locate_from(
                current_exe_dir().as_deref(),
                env::var_os("PATH").as_deref(),
                env::var_os(PATH_ENV_VAR).as_deref(),
            )
        })
        .map(PathBuf::as_path)
}

fn current_exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

fn locate_from(
    exe_dir: Option<&Path>,
    search_path: Option<&OsStr>,
    fallback_dir: Option<&OsStr>,
) -> Result<PathBuf> {
    if let Some(dir) = exe_dir {
        let candidate = dir.join(BINARY_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    if let Some(paths) = search_path {
        for dir in env::split_paths(paths) {
            let candidate = dir.join(BINARY_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    if let Some(dir) = fallback_dir {
        if !dir.is_empty() {
            let candidate = Path::new(dir).join(BINARY_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(Error::BinaryNotFound(format!("{} not found", BINARY_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Creates a unique temp dir, optionally dropping a fake binary into it.
    fn temp_dir(tag: &str, with_binary: bool) -> PathBuf {
        let dir = env::temp_dir().join(format!("wkimage-discovery-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        if with_binary {
            fs::write(dir.join(BINARY_NAME), b"#!/bin/sh\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_exe_dir_wins_over_fallback() {
        let exe_dir = temp_dir("exe", true);
        let fallback = temp_dir("fb1", true);

        let found = locate_from(Some(&exe_dir), None, Some(fallback.as_os_str())).unwrap();
        assert_eq!(found, exe_dir.join(BINARY_NAME));
    }

    #[test]
    fn test_fallback_dir_is_last_resort() {
        let empty = temp_dir("empty", false);
        let fallback = temp_dir("fb2", true);

        let found = locate_from(Some(&empty), None, Some(fallback.as_os_str())).unwrap();
        assert_eq!(found, fallback.join(BINARY_NAME));
    }

    #[test]
    fn test_search_path_is_consulted() {
        let empty = temp_dir("empty2", false);
        let on_path = temp_dir("path", true);
        let joined = env::join_paths([empty.clone(), on_path.clone()]).unwrap();

        let found = locate_from(Some(&empty), Some(joined.as_os_str()), None).unwrap();
        assert_eq!(found, on_path.join(BINARY_NAME));
    }

    #[test]
    fn test_exhausted_search_is_an_error() {
        let empty = temp_dir("empty3", false);
        let err = locate_from(Some(&empty), None, None).unwrap_err();
        assert!(matches!(err, Error::BinaryNotFound(_)));
    }
}
