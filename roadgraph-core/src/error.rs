use thiserror::Error;

use crate::io::{DecodeError, FingerprintMismatch, Section};
use crate::loading::EdgeViolation;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(
        "Truncated {section} at byte {offset}: expected {expected} bytes, only {available} available"
    )]
    Truncated {
        section: Section,
        offset: u64,
        expected: u64,
        available: u64,
    },
    #[error("Fingerprint mismatch: {0}")]
    FingerprintMismatch(#[from] FingerprintMismatch),
    #[error("Invalid {section} record #{index}: {source}")]
    InvalidRecord {
        section: Section,
        index: u64,
        source: DecodeError,
    },
    #[error("Malformed edge list: {0}")]
    InvalidEdges(#[from] EdgeViolation),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
