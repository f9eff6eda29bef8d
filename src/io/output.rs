use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TransposeError, TransposeResult};

/// Reject labels that are empty or would leave the output directory.
pub fn validate_label(label: &str) -> TransposeResult<()> {
    let bad = label.is_empty()
        || label == "."
        || label.contains("..")
        || label.contains(['/', '\\'])
        || label.contains('\0');
    if bad {
        return Err(TransposeError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

/// Build `<output_dir>/<label>-major.<ext>`, taking the extension from the
/// source preset. A source without extension yields a target without one.
pub fn output_path(source: &Path, output_dir: &Path, label: &str) -> TransposeResult<PathBuf> {
    validate_label(label)?;
    let mut name = format!("{}-major", label);
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    Ok(output_dir.join(name))
}

/// Replace the full contents of `path` with `contents`.
///
/// The text goes to a hidden sibling file first and is then renamed over the
/// target, so readers never observe a half-written preset. Returns the number
/// of bytes written.
pub fn write_preset(path: &Path, contents: &str) -> TransposeResult<usize> {
    let write_err = |source: std::io::Error| TransposeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            write_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no file name",
            ))
        })?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(err) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(err));
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(err));
    }
    Ok(contents.len())
}
