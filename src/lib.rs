//! Transpose a Ripchord preset into every other major key.
//!
//! The source preset is read line by line; `note="N"` and `notes="A;B;C"`
//! fields are shifted by a semitone offset and everything else is copied
//! verbatim into `<label>-major.<ext>`.

pub mod config;
pub mod error;
pub mod general;
pub mod io;
pub mod transposer;

pub use config::{Config, KeyTarget};
pub use error::{ConfigError, TransposeError};
pub use general::batch::{run_batch, BatchReport, ErrorPolicy};
pub use transposer::{Transposed, Transposer};
