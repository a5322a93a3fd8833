//! Export of loaded data for inspection

mod to_geojson;
