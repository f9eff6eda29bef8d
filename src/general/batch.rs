use log::{error, warn};

use crate::config::KeyTarget;
use crate::error::TransposeError;
use crate::transposer::{Transposed, Transposer};

/// What to do after a key fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    Continue,
    Stop,
}

impl ErrorPolicy {
    pub fn from_stop_flag(stop_on_error: bool) -> Self {
        if stop_on_error {
            ErrorPolicy::Stop
        } else {
            ErrorPolicy::Continue
        }
    }
}

/// Per-key outcome of one batch run, in table order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<(String, Result<Transposed, TransposeError>)>,
    /// Entries skipped because they named the baseline key.
    pub skipped: usize,
    /// True when `ErrorPolicy::Stop` cut the table short.
    pub halted: bool,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn written(&self) -> impl Iterator<Item = &Transposed> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }
}

/// Run `transposer` once per entry of `keys`, in order.
///
/// Entries labelled `baseline` are skipped. Failures are logged and
/// recorded; with `ErrorPolicy::Stop` the first failure ends the run.
pub fn run_batch(
    transposer: &Transposer,
    keys: &[KeyTarget],
    baseline: &str,
    policy: ErrorPolicy,
) -> BatchReport {
    let mut report = BatchReport::default();
    for key in keys {
        if key.label == baseline {
            warn!("skipping '{}': it is the baseline key", key.label);
            report.skipped += 1;
            continue;
        }

        let result = transposer.transpose(&key.label, key.offset);
        let failed = result.is_err();
        if let Err(err) = &result {
            error!("{}: {}", key.label, err);
        }
        report.results.push((key.label.clone(), result));

        if failed && policy == ErrorPolicy::Stop {
            report.halted = true;
            break;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_keys;
    use std::fs;

    fn fixture() -> (tempfile::TempDir, Transposer) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("c-major.rpc");
        fs::write(&source, "note=\"0\"\n").unwrap();
        let t = Transposer::new(source, dir.path());
        (dir, t)
    }

    #[test]
    fn default_table_writes_eleven_files() {
        let (dir, t) = fixture();
        let report = run_batch(&t, &default_keys(), "c", ErrorPolicy::Continue);

        assert!(report.is_success());
        assert_eq!(report.succeeded(), 11);
        // eleven outputs plus the source
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 12);
        assert_eq!(fs::read_to_string(dir.path().join("b-major.rpc")).unwrap(), "note=\"11\"\n");
    }

    #[test]
    fn baseline_entry_is_skipped() {
        let (dir, t) = fixture();
        let keys = vec![KeyTarget::new("c", 0), KeyTarget::new("d", 2)];
        let report = run_batch(&t, &keys, "c", ErrorPolicy::Continue);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.attempted(), 1);
        // the source itself is c-major.rpc and must not be overwritten
        assert_eq!(fs::read_to_string(dir.path().join("c-major.rpc")).unwrap(), "note=\"0\"\n");
        assert!(dir.path().join("d-major.rpc").exists());
    }

    #[test]
    fn source_key_under_other_baseline_is_not_overwritten() {
        let (dir, t) = fixture();
        let keys = vec![KeyTarget::new("c", 1), KeyTarget::new("d", 2)];
        let report = run_batch(&t, &keys, "g", ErrorPolicy::Continue);

        assert!(!report.is_success());
        assert!(matches!(report.results[0].1, Err(TransposeError::TargetIsSource(_))));
        assert_eq!(fs::read_to_string(dir.path().join("c-major.rpc")).unwrap(), "note=\"0\"\n");
        assert_eq!(fs::read_to_string(dir.path().join("d-major.rpc")).unwrap(), "note=\"2\"\n");
    }

    #[test]
    fn continue_policy_attempts_every_key() {
        let (dir, t) = fixture();
        let keys = vec![
            KeyTarget::new("../x", 1),
            KeyTarget::new("d", 2),
            KeyTarget::new("", 3),
            KeyTarget::new("e", 4),
        ];
        let report = run_batch(&t, &keys, "c", ErrorPolicy::Continue);

        assert_eq!(report.attempted(), 4);
        assert_eq!(report.failed(), 2);
        assert!(!report.halted);
        assert!(dir.path().join("d-major.rpc").exists());
        assert!(dir.path().join("e-major.rpc").exists());
    }

    #[test]
    fn stop_policy_halts_on_first_failure() {
        let (dir, t) = fixture();
        let keys = vec![KeyTarget::new("d", 2), KeyTarget::new("a/b", 3), KeyTarget::new("e", 4)];
        let report = run_batch(&t, &keys, "c", ErrorPolicy::Stop);

        assert!(report.halted);
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.written().count(), 1);
        assert!(!dir.path().join("e-major.rpc").exists());
    }
}
