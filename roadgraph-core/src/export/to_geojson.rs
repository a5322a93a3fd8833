use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use itertools::Itertools;
use serde_json::json;

use crate::{Error, NodeId, RoadNetwork};

impl RoadNetwork {
    /// Barrier and traffic light nodes as a `GeoJSON` `FeatureCollection` of points.
    ///
    /// A node that is both gets a single feature with both properties set.
    pub fn classified_nodes_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = self
            .barrier_nodes
            .iter()
            .merge(&self.traffic_lights)
            .dedup()
            .map(|&id| self.classified_node_feature(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn classified_nodes_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.classified_nodes_geojson()?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    fn classified_node_feature(&self, id: NodeId) -> Result<Feature, Error> {
        let node = self.node(id).ok_or_else(|| {
            Error::InvalidData(format!(
                "classified node {id} is outside the node array of {} nodes",
                self.node_count()
            ))
        })?;
        let geometry = Geometry::new(GeoJsonValue::from(&node.to_point()));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "node_id": id,
                "osm_id": node.node_id,
                "barrier": self.is_barrier(id),
                "traffic_lights": self.has_traffic_light(id),
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
