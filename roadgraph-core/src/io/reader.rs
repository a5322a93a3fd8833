use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

use super::{Fingerprint, FingerprintPolicy, Record, Section};
use crate::Error;

/// Upper bound for buffers sized from an untrusted header count.
/// Larger sections grow as bytes actually arrive.
const MAX_PREALLOCATED_BYTES: usize = 64 << 20;

/// Sequential reader over a snapshot file.
///
/// The fingerprint header is consumed on construction; every read after that
/// either returns the full amount requested or fails with [`Error::Truncated`].
/// The underlying stream is closed when the reader is dropped.
#[derive(Debug)]
pub struct FileReader<R = BufReader<File>> {
    inner: R,
    fingerprint: Fingerprint,
    offset: u64,
    scratch: Vec<u8>,
}

impl FileReader<BufReader<File>> {
    /// Opens `path` and checks its fingerprint according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, its header is truncated,
    /// or the fingerprint differs under [`FingerprintPolicy::Enforce`].
    pub fn open(path: impl AsRef<Path>, policy: FingerprintPolicy) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;
        debug!("Opened {}", path.display());
        Self::with_origin(BufReader::new(file), policy, &path.display().to_string())
    }
}

impl<R: Read> FileReader<R> {
    /// Wraps an already open stream positioned at the fingerprint header.
    ///
    /// # Errors
    ///
    /// Same as [`FileReader::open`], minus the open itself.
    pub fn new(inner: R, policy: FingerprintPolicy) -> Result<Self, Error> {
        Self::with_origin(inner, policy, "input stream")
    }

    fn with_origin(inner: R, policy: FingerprintPolicy, origin: &str) -> Result<Self, Error> {
        let mut reader = Self {
            inner,
            fingerprint: Fingerprint::valid(),
            offset: 0,
            scratch: Vec::new(),
        };
        let mut header = [0u8; Fingerprint::SIZE];
        reader.read_into(&mut header, Section::Header)?;
        reader.fingerprint = Fingerprint::decode(&header);
        reader.fingerprint.check(policy, origin)?;
        Ok(reader)
    }

    /// Fingerprint found in the header, whether or not it matched
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Number of bytes consumed so far, header included
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads one `u32` record count.
    pub fn read_element_count(&mut self, section: Section) -> Result<u32, Error> {
        let mut bytes = [0u8; 4];
        self.read_into(&mut bytes, section)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Fills `buf` completely from the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] if the stream ends first.
    pub fn read_into(&mut self, buf: &mut [u8], section: Section) -> Result<(), Error> {
        let available = fill_buffer(&mut self.inner, buf)?;
        if available < buf.len() {
            return Err(Error::Truncated {
                section,
                offset: self.offset,
                expected: buf.len() as u64,
                available: available as u64,
            });
        }
        self.offset += buf.len() as u64;
        Ok(())
    }

    /// Reads and decodes a single record; `index` locates decode errors.
    pub fn read_record<T: Record>(&mut self, section: Section, index: u64) -> Result<T, Error> {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.resize(T::SIZE, 0);
        let record = self.read_into(&mut scratch, section).and_then(|()| {
            T::decode(&scratch).map_err(|source| Error::InvalidRecord {
                section,
                index,
                source,
            })
        });
        self.scratch = scratch;
        record
    }

    /// Reads `count` records as one contiguous block.
    ///
    /// The returned vector has exactly `count` elements.
    pub fn read_records<T: Record>(&mut self, count: u32, section: Section) -> Result<Vec<T>, Error> {
        let expected = u64::from(count) * T::SIZE as u64;
        let capacity = usize::try_from(expected)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_BYTES);
        let mut buffer = Vec::with_capacity(capacity);
        let available = (&mut self.inner).take(expected).read_to_end(&mut buffer)? as u64;
        if available < expected {
            return Err(Error::Truncated {
                section,
                offset: self.offset,
                expected,
                available,
            });
        }
        self.offset += expected;

        let mut records = Vec::with_capacity(count as usize);
        for (index, chunk) in buffer.chunks_exact(T::SIZE).enumerate() {
            let record = T::decode(chunk).map_err(|source| Error::InvalidRecord {
                section,
                index: index as u64,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

fn fill_buffer<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::io::FingerprintMismatch;
    use crate::model::{NodeBasedEdge, NodeId};

    fn stream(payload: &[u8]) -> Vec<u8> {
        let mut bytes = Fingerprint::valid().encode().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn reads_count_and_tracks_offset() {
        let bytes = stream(&[42, 0, 0, 0, 0xff]);
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        assert_eq!(reader.offset(), Fingerprint::SIZE as u64);
        assert_eq!(reader.read_element_count(Section::Nodes).unwrap(), 42);
        assert_eq!(reader.offset(), Fingerprint::SIZE as u64 + 4);
    }

    #[test]
    fn short_read_reports_section_and_available_bytes() {
        let bytes = stream(&[1, 2]);
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        let err = reader.read_element_count(Section::Edges).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                section: Section::Edges,
                offset: 11,
                expected: 4,
                available: 2,
            }
        ));
    }

    #[test]
    fn truncated_header_is_an_error() {
        let err = FileReader::new(Cursor::new(vec![b'R', b'G']), FingerprintPolicy::Skip)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                section: Section::Header,
                ..
            }
        ));
    }

    #[test]
    fn enforce_fails_before_reading_payload() {
        let mut bytes = stream(&[0; 4]);
        bytes[1] = b'X';

        let err = FileReader::new(Cursor::new(bytes.clone()), FingerprintPolicy::Enforce)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::FingerprintMismatch(FingerprintMismatch::FormatId { .. })
        ));

        let reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Warn).unwrap();
        assert_eq!(reader.fingerprint().magic, *b"RXFP");
    }

    #[test]
    fn bulk_read_detects_missing_records() {
        let mut payload = Vec::new();
        NodeBasedEdge::new(NodeId::new(0), NodeId::new(1), 5).encode(&mut payload);
        let bytes = stream(&payload);
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        let err = reader
            .read_records::<NodeBasedEdge>(3, Section::Edges)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                expected: 54,
                available: 18,
                ..
            }
        ));
    }

    #[test]
    fn huge_declared_count_does_not_preallocate() {
        let bytes = stream(&[]);
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        let err = reader
            .read_records::<NodeBasedEdge>(u32::MAX, Section::Edges)
            .unwrap_err();
        assert!(matches!(err, Error::Truncated { available: 0, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FileReader::open("/nonexistent/graph.rgf", FingerprintPolicy::Warn).unwrap_err();
        assert!(matches!(err, Error::IoError(ref e) if e.kind() == io::ErrorKind::NotFound));
    }
}
