//! Binary snapshot I/O
//!
//! Scoped reader and writer over the snapshot formats, the fingerprint header
//! and the fixed-width record codecs.
//!
//! Node/edge stream: `[Fingerprint][u32 n][n x node][u32 m][m x edge]`.
//! Restriction file: `[Fingerprint][u32 count][count x restriction]`.

mod fingerprint;
mod reader;
mod record;
mod writer;

use std::fmt;

pub use fingerprint::{
    BUILD_SIGNATURE, Fingerprint, FingerprintMismatch, FingerprintPolicy, FormatVersion, MAGIC,
};
pub use reader::FileReader;
pub use record::{DecodeError, Record};
pub use writer::{FileWriter, write_graph, write_restrictions};

/// Part of a snapshot file, used to locate read errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Nodes,
    Edges,
    Restrictions,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Header => "header",
            Section::Nodes => "node section",
            Section::Edges => "edge section",
            Section::Restrictions => "restriction section",
        })
    }
}
