use std::io::Read;
use std::path::Path;

use log::info;

use crate::Error;
use crate::io::{FileReader, FingerprintPolicy, Section};
use crate::model::TurnRestriction;

/// Reads a turn restriction file.
///
/// The fingerprint must match this build; a mismatch fails before any record
/// is read. Node ids are internal ids and are not checked against a node array.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, carries another build's
/// fingerprint, or holds fewer records than declared.
pub fn load_restrictions(path: impl AsRef<Path>) -> Result<Vec<TurnRestriction>, Error> {
    let mut reader = FileReader::open(path, FingerprintPolicy::Enforce)?;
    read_restrictions(&mut reader)
}

/// Reads the restriction section from a reader positioned after the fingerprint.
pub fn read_restrictions<R: Read>(
    reader: &mut FileReader<R>,
) -> Result<Vec<TurnRestriction>, Error> {
    let count = reader.read_element_count(Section::Restrictions)?;
    let restrictions = reader.read_records(count, Section::Restrictions)?;
    info!("Loaded {count} turn restrictions");
    Ok(restrictions)
}
