//! Fixed-width record codecs.
//!
//! Every record is encoded field by field in little-endian order. Layouts:
//!
//! | record | bytes | fields |
//! |---|---|---|
//! | [`ExternalNode`] | 18 | lon `i32`, lat `i32`, osm id `u64`, barrier `u8`, traffic lights `u8` |
//! | [`NodeBasedEdge`] | 18 | source `u32`, target `u32`, name id `u32`, weight `i32`, flags `u8`, travel mode `u8` |
//! | [`TurnRestriction`] | 13 | via `u32`, from `u32`, to `u32`, flags `u8` |

use thiserror::Error;

use crate::model::{ExternalNode, NodeBasedEdge, NodeId, OsmNodeId, TravelMode, TurnRestriction};

/// A record that cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record is {actual} bytes long, expected {expected}")]
    Length { expected: usize, actual: usize },
    #[error("boolean field holds {0:#04x}")]
    InvalidBool(u8),
    #[error("unknown flag bits {0:#010b}")]
    UnknownFlags(u8),
}

/// Fixed-size on-disk record.
pub trait Record: Sized {
    /// Encoded size in bytes
    const SIZE: usize;

    /// Decodes one record from exactly [`Record::SIZE`] bytes.
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;

    /// Appends exactly [`Record::SIZE`] bytes to `out`.
    fn encode(&self, out: &mut Vec<u8>);
}

struct FieldDecoder<'a> {
    bytes: &'a [u8],
    expected: usize,
    actual: usize,
}

impl<'a> FieldDecoder<'a> {
    fn new<T: Record>(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let decoder = Self {
            bytes,
            expected: T::SIZE,
            actual: bytes.len(),
        };
        if bytes.len() == T::SIZE {
            Ok(decoder)
        } else {
            Err(decoder.length_error())
        }
    }

    fn length_error(&self) -> DecodeError {
        DecodeError::Length {
            expected: self.expected,
            actual: self.actual,
        }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let (head, rest) = self
            .bytes
            .split_first_chunk::<N>()
            .ok_or_else(|| self.length_error())?;
        self.bytes = rest;
        Ok(*head)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.take::<1>()?;
        Ok(byte)
    }

    fn bool(&mut self) -> Result<bool, DecodeError> {
        match self.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidBool(other)),
        }
    }

    fn flags(&mut self, known: u8) -> Result<u8, DecodeError> {
        let bits = self.u8()?;
        if bits & !known == 0 {
            Ok(bits)
        } else {
            Err(DecodeError::UnknownFlags(bits & !known))
        }
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        self.take().map(u32::from_le_bytes)
    }

    fn i32(&mut self) -> Result<i32, DecodeError> {
        self.take().map(i32::from_le_bytes)
    }

    fn u64(&mut self) -> Result<u64, DecodeError> {
        self.take().map(u64::from_le_bytes)
    }

    fn node_id(&mut self) -> Result<NodeId, DecodeError> {
        self.u32().map(NodeId::new)
    }
}

impl Record for ExternalNode {
    const SIZE: usize = 18;

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut fields = FieldDecoder::new::<Self>(bytes)?;
        Ok(Self {
            lon: fields.i32()?,
            lat: fields.i32()?,
            node_id: OsmNodeId::new(fields.u64()?),
            barrier: fields.bool()?,
            traffic_lights: fields.bool()?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.lon.to_le_bytes());
        out.extend_from_slice(&self.lat.to_le_bytes());
        out.extend_from_slice(&self.node_id.get().to_le_bytes());
        out.push(u8::from(self.barrier));
        out.push(u8::from(self.traffic_lights));
    }
}

mod edge_flags {
    pub const FORWARD: u8 = 1 << 0;
    pub const BACKWARD: u8 = 1 << 1;
    pub const ROUNDABOUT: u8 = 1 << 2;
    pub const ACCESS_RESTRICTED: u8 = 1 << 3;
    pub const STARTPOINT: u8 = 1 << 4;
    pub const IS_SPLIT: u8 = 1 << 5;
    pub const ALL: u8 = FORWARD | BACKWARD | ROUNDABOUT | ACCESS_RESTRICTED | STARTPOINT | IS_SPLIT;
}

impl Record for NodeBasedEdge {
    const SIZE: usize = 18;

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut fields = FieldDecoder::new::<Self>(bytes)?;
        let source = fields.node_id()?;
        let target = fields.node_id()?;
        let name_id = fields.u32()?;
        let weight = fields.i32()?;
        let flags = fields.flags(edge_flags::ALL)?;
        let travel_mode = TravelMode(fields.u8()?);

        Ok(Self {
            source,
            target,
            name_id,
            weight,
            forward: flags & edge_flags::FORWARD != 0,
            backward: flags & edge_flags::BACKWARD != 0,
            roundabout: flags & edge_flags::ROUNDABOUT != 0,
            access_restricted: flags & edge_flags::ACCESS_RESTRICTED != 0,
            startpoint: flags & edge_flags::STARTPOINT != 0,
            is_split: flags & edge_flags::IS_SPLIT != 0,
            travel_mode,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        let flags = [
            (self.forward, edge_flags::FORWARD),
            (self.backward, edge_flags::BACKWARD),
            (self.roundabout, edge_flags::ROUNDABOUT),
            (self.access_restricted, edge_flags::ACCESS_RESTRICTED),
            (self.startpoint, edge_flags::STARTPOINT),
            (self.is_split, edge_flags::IS_SPLIT),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(0, |bits, (_, bit)| bits | bit);

        out.extend_from_slice(&self.source.get().to_le_bytes());
        out.extend_from_slice(&self.target.get().to_le_bytes());
        out.extend_from_slice(&self.name_id.to_le_bytes());
        out.extend_from_slice(&self.weight.to_le_bytes());
        out.push(flags);
        out.push(self.travel_mode.0);
    }
}

const RESTRICTION_IS_ONLY: u8 = 1 << 0;

impl Record for TurnRestriction {
    const SIZE: usize = 13;

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut fields = FieldDecoder::new::<Self>(bytes)?;
        Ok(Self {
            via: fields.node_id()?,
            from: fields.node_id()?,
            to: fields.node_id()?,
            is_only: fields.flags(RESTRICTION_IS_ONLY)? & RESTRICTION_IS_ONLY != 0,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.via.get().to_le_bytes());
        out.extend_from_slice(&self.from.get().to_le_bytes());
        out.extend_from_slice(&self.to.get().to_le_bytes());
        out.push(if self.is_only { RESTRICTION_IS_ONLY } else { 0 });
    }
}
