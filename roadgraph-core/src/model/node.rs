//! Road network nodes - raw on-disk records and the public node

use geo::Point;
use serde::{Deserialize, Serialize};

use super::OsmNodeId;
use crate::{COORDINATE_PRECISION, FixedCoordinate};

/// Node record as written by the extraction stage.
///
/// Only lives while the node stream is scanned; the flags are turned into
/// the barrier and traffic light lists of [`crate::LoadedNodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalNode {
    pub lon: FixedCoordinate,
    pub lat: FixedCoordinate,
    pub node_id: OsmNodeId,
    pub barrier: bool,
    pub traffic_lights: bool,
}

impl ExternalNode {
    pub fn new(lon: FixedCoordinate, lat: FixedCoordinate, node_id: OsmNodeId) -> Self {
        Self {
            lon,
            lat,
            node_id,
            barrier: false,
            traffic_lights: false,
        }
    }

    #[must_use]
    pub fn with_barrier(mut self, barrier: bool) -> Self {
        self.barrier = barrier;
        self
    }

    #[must_use]
    pub fn with_traffic_lights(mut self, traffic_lights: bool) -> Self {
        self.traffic_lights = traffic_lights;
        self
    }

    pub fn to_query_node(&self) -> QueryNode {
        QueryNode {
            lon: self.lon,
            lat: self.lat,
            node_id: self.node_id,
        }
    }
}

/// Routable graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNode {
    /// Longitude in millionths of a degree
    pub lon: FixedCoordinate,
    /// Latitude in millionths of a degree
    pub lat: FixedCoordinate,
    /// Id of the node in the source map
    pub node_id: OsmNodeId,
}

impl QueryNode {
    /// Node coordinates in degrees
    pub fn to_point(&self) -> Point<f64> {
        Point::new(
            f64::from(self.lon) / COORDINATE_PRECISION,
            f64::from(self.lat) / COORDINATE_PRECISION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_node_keeps_coordinates_and_external_id() {
        let raw = ExternalNode::new(13_388_860, 52_517_037, OsmNodeId::new(240_109_189))
            .with_barrier(true);
        let node = raw.to_query_node();

        assert_eq!(node.lon, 13_388_860);
        assert_eq!(node.lat, 52_517_037);
        assert_eq!(node.node_id.get(), 240_109_189);
    }

    #[test]
    fn point_is_in_degrees() {
        let node = ExternalNode::new(-73_985_656, 40_748_433, OsmNodeId::new(1)).to_query_node();
        let point = node.to_point();

        assert!((point.x() - -73.985_656).abs() < 1e-9);
        assert!((point.y() - 40.748_433).abs() < 1e-9);
    }
}
