// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use crate::config::options::TableFormat;
use crate::error::{ConvertError, Result};

pub const DEFAULT_OUT_STEM: &str = "records";

/// `-o out/` or an existing directory → `out/records.<ext>`; anything else is the file itself.
pub fn resolve_out_path(hint: &Path, format: TableFormat) -> PathBuf {
    if looks_like_dir_hint(hint) || hint.is_dir() {
        hint.join(format!("{DEFAULT_OUT_STEM}.{}", format.ext()))
    } else {
        hint.to_path_buf()
    }
}

/// Ensure parent dir exists; create/truncate the file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(BufWriter::new(file))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(ConvertError::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
