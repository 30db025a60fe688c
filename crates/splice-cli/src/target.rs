//! Reading and replacing the file being patched.

use std::fs;
use std::io::{self, Write};

use camino::Utf8Path;
use tempfile::NamedTempFile;

use crate::AppError;

/// Reads the whole target as UTF-8 text.
pub(crate) fn read_target(path: &Utf8Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::ReadTarget {
        path: path.to_owned(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| AppError::TargetEncoding {
        path: path.to_owned(),
    })
}

/// Replaces the target with `contents`.
///
/// The new text is written to a sibling temporary file which is then renamed
/// over the target, so readers never observe a partially written file. The
/// original permissions are carried over.
pub(crate) fn write_target(path: &Utf8Path, contents: &str) -> Result<(), AppError> {
    replace_atomically(path, contents).map_err(|source| AppError::WriteTarget {
        path: path.to_owned(),
        source,
    })
}

fn replace_atomically(path: &Utf8Path, contents: &str) -> io::Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut staged = NamedTempFile::new_in(directory)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.as_file().set_permissions(permissions)?;
    staged.persist(path).map_err(|error| error.error)?;
    Ok(())
}
