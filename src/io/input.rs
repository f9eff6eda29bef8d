use std::fs;
use std::path::Path;

use crate::error::{TransposeError, TransposeResult};

/// Read the source preset as UTF-8 text.
///
/// Missing files, permission problems and non-UTF-8 content all surface as
/// `TransposeError::Read` carrying the path.
pub fn read_preset(path: &Path) -> TransposeResult<String> {
    fs::read_to_string(path).map_err(|source| TransposeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.rpc");

        let err = read_preset(&path).unwrap_err();
        match err {
            TransposeError::Read { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.rpc");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_preset(&path).unwrap_err();
        assert!(matches!(err, TransposeError::Read { .. }));
    }
}
