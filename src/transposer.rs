use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{TransposeError, TransposeResult};
use crate::general::transpose::transpose_document;
use crate::io::input::read_preset;
use crate::io::output::{output_path, write_preset};

/// A file written by one transpose invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transposed {
    pub label: String,
    pub offset: i32,
    pub path: PathBuf,
    pub bytes: usize,
}

// Canonical comparison when both exist, so `presets/x.rpc` and
// `./presets/x.rpc` are caught; lexical otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Turns one source preset into transposed copies, one per call.
#[derive(Debug, Clone)]
pub struct Transposer {
    source: PathBuf,
    output_dir: PathBuf,
}

impl Transposer {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Write `<label>-major.<ext>` with every note shifted by `offset`.
    ///
    /// The source is read fresh on every call. Nothing is written unless the
    /// whole document transposes cleanly, and never when the target would
    /// be the source preset itself.
    pub fn transpose(&self, label: &str, offset: i32) -> TransposeResult<Transposed> {
        info!("{}", offset);
        let target = output_path(&self.source, &self.output_dir, label)?;
        if same_file(&target, &self.source) {
            return Err(TransposeError::TargetIsSource(target));
        }
        let text = read_preset(&self.source)?;
        let transposed = transpose_document(&text, offset)?;
        let bytes = write_preset(&target, &transposed)?;
        debug!("{} -> {} ({} bytes)", self.source.display(), target.display(), bytes);
        Ok(Transposed {
            label: label.to_string(),
            offset,
            path: target,
            bytes,
        })
    }
}
