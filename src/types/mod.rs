//! Result types produced by a scan.

mod question;

pub use question::{BoundingBox, Question, QuestionKind, ScanResult};
