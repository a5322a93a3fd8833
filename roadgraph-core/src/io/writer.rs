use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{Fingerprint, Record};
use crate::Error;
use crate::model::{ExternalNode, NodeBasedEdge, TurnRestriction};

/// Sequential writer producing the snapshot layouts read by [`super::FileReader`].
///
/// The fingerprint is written on construction.
#[derive(Debug)]
pub struct FileWriter<W: Write = BufWriter<File>> {
    inner: W,
    scratch: Vec<u8>,
}

impl FileWriter<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the current fingerprint.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to create file '{}': {}", path.display(), e),
            )
        })?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> FileWriter<W> {
    pub fn new(inner: W) -> Result<Self, Error> {
        Self::with_fingerprint(inner, &Fingerprint::valid())
    }

    /// Writes an arbitrary fingerprint, e.g. one of another build.
    pub fn with_fingerprint(mut inner: W, fingerprint: &Fingerprint) -> Result<Self, Error> {
        inner.write_all(&fingerprint.encode())?;
        Ok(Self {
            inner,
            scratch: Vec::new(),
        })
    }

    /// Writes a `u32` record count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if `count` does not fit the format.
    pub fn write_element_count(&mut self, count: usize) -> Result<(), Error> {
        let count = u32::try_from(count).map_err(|_| {
            Error::InvalidData(format!("{count} records exceed the u32 section limit"))
        })?;
        self.inner.write_all(&count.to_le_bytes())?;
        Ok(())
    }

    /// Writes the records without a count.
    pub fn write_records<T: Record>(&mut self, records: &[T]) -> Result<(), Error> {
        self.scratch.clear();
        self.scratch.reserve(records.len() * T::SIZE);
        for record in records {
            record.encode(&mut self.scratch);
        }
        self.inner.write_all(&self.scratch)?;
        Ok(())
    }

    /// Writes a count followed by the records.
    pub fn write_section<T: Record>(&mut self, records: &[T]) -> Result<(), Error> {
        self.write_element_count(records.len())?;
        self.write_records(records)
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Writes a node/edge stream.
pub fn write_graph<W: Write>(
    writer: W,
    nodes: &[ExternalNode],
    edges: &[NodeBasedEdge],
) -> Result<W, Error> {
    let mut writer = FileWriter::new(writer)?;
    writer.write_section(nodes)?;
    writer.write_section(edges)?;
    writer.finish()
}

/// Writes a turn restriction file.
pub fn write_restrictions<W: Write>(
    writer: W,
    restrictions: &[TurnRestriction],
) -> Result<W, Error> {
    let mut writer = FileWriter::new(writer)?;
    writer.write_section(restrictions)?;
    writer.finish()
}
