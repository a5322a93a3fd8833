//! Format fingerprint stamped at the start of every snapshot file.
//!
//! Layout (11 bytes): magic `RGFP`, version major/minor/patch as one byte each,
//! then the build signature as a little-endian `u32`.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::Error;

/// Magic bytes identifying a road graph snapshot: "RGFP"
pub const MAGIC: [u8; 4] = *b"RGFP";

/// Signature of the build that writes and reads snapshots.
pub const BUILD_SIGNATURE: u32 = fnv1a(env!("CARGO_PKG_VERSION").as_bytes());

#[allow(clippy::cast_lossless)]
const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(0x0100_0193);
        i += 1;
    }
    hash
}

/// Snapshot format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl FormatVersion {
    /// The version this build reads and writes.
    pub const CURRENT: FormatVersion = FormatVersion {
        major: 0,
        minor: 3,
        patch: 0,
    };
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// What to do when a file's fingerprint differs from the expected one.
///
/// The header is consumed in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintPolicy {
    /// Fail before any record is read
    Enforce,
    /// Log a warning and keep reading
    Warn,
    /// Do not compare
    Skip,
}

/// First field of the fingerprint that differs from the expected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintMismatch {
    #[error(
        "unknown format id \"{}\", expected \"{}\"",
        .found.escape_ascii(),
        .expected.escape_ascii()
    )]
    FormatId { expected: [u8; 4], found: [u8; 4] },
    #[error("format version {found}, expected {expected}")]
    Version {
        expected: FormatVersion,
        found: FormatVersion,
    },
    #[error("build signature {found:#010x}, expected {expected:#010x}")]
    BuildSignature { expected: u32, found: u32 },
}

/// Format and build tag of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    pub magic: [u8; 4],
    pub version: FormatVersion,
    pub build_signature: u32,
}

impl Fingerprint {
    /// Encoded size in bytes.
    pub const SIZE: usize = 11;

    /// Fingerprint of this build.
    pub const fn valid() -> Self {
        Self {
            magic: MAGIC,
            version: FormatVersion::CURRENT,
            build_signature: BUILD_SIGNATURE,
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version.major;
        bytes[5] = self.version.minor;
        bytes[6] = self.version.patch;
        bytes[7..11].copy_from_slice(&self.build_signature.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8; Self::SIZE]) -> Self {
        let [m0, m1, m2, m3, major, minor, patch, s0, s1, s2, s3] = *bytes;
        Self {
            magic: [m0, m1, m2, m3],
            version: FormatVersion {
                major,
                minor,
                patch,
            },
            build_signature: u32::from_le_bytes([s0, s1, s2, s3]),
        }
    }

    /// Field-wise comparison against `expected`.
    pub fn verify(&self, expected: &Fingerprint) -> Result<(), FingerprintMismatch> {
        if self.magic != expected.magic {
            return Err(FingerprintMismatch::FormatId {
                expected: expected.magic,
                found: self.magic,
            });
        }
        if self.version != expected.version {
            return Err(FingerprintMismatch::Version {
                expected: expected.version,
                found: self.version,
            });
        }
        if self.build_signature != expected.build_signature {
            return Err(FingerprintMismatch::BuildSignature {
                expected: expected.build_signature,
                found: self.build_signature,
            });
        }
        Ok(())
    }

    /// Compares against [`Fingerprint::valid`] and applies `policy` to a mismatch.
    ///
    /// `origin` names the file in log messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FingerprintMismatch`] only under [`FingerprintPolicy::Enforce`].
    pub fn check(&self, policy: FingerprintPolicy, origin: &str) -> Result<(), Error> {
        let Err(mismatch) = self.verify(&Self::valid()) else {
            return Ok(());
        };
        match policy {
            FingerprintPolicy::Enforce => Err(mismatch.into()),
            FingerprintPolicy::Warn => {
                warn!(
                    "{origin} was prepared with a different build ({mismatch}). \
                    Reprocess it to get rid of this warning."
                );
                Ok(())
            }
            FingerprintPolicy::Skip => {
                debug!("Ignoring fingerprint of {origin}: {mismatch}");
                Ok(())
            }
        }
    }
}
