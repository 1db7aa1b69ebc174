//! Vector tile wire schema and serialization
//!
//! The schema is the standard vector tile protobuf layout: a tile holds
//! layers, a layer holds features, and a feature carries a geometry type and
//! a packed `u32` command stream.

mod compress;

pub use compress::{compress, decompress};

use prost::Message;

use crate::constants::{LAYER_VERSION, LINES_LAYER, POLYGONS_LAYER};
use crate::error::TileError;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Tile {
    #[prost(message, repeated, tag = "3")]
    pub layers: Vec<Layer>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Layer {
    #[prost(string, required, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub features: Vec<Feature>,
    #[prost(string, repeated, tag = "3")]
    pub keys: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub values: Vec<Value>,
    #[prost(uint32, optional, tag = "5")]
    pub extent: Option<u32>,
    #[prost(uint32, required, tag = "15")]
    pub version: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Feature {
    #[prost(uint64, optional, tag = "1")]
    pub id: Option<u64>,
    #[prost(uint32, repeated, packed = "true", tag = "2")]
    pub tags: Vec<u32>,
    #[prost(enumeration = "GeomType", optional, tag = "3")]
    pub geometry_type: Option<i32>,
    #[prost(uint32, repeated, packed = "true", tag = "4")]
    pub geometry: Vec<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Value {
    #[prost(string, optional, tag = "1")]
    pub string_value: Option<String>,
    #[prost(float, optional, tag = "2")]
    pub float_value: Option<f32>,
    #[prost(double, optional, tag = "3")]
    pub double_value: Option<f64>,
    #[prost(int64, optional, tag = "4")]
    pub int_value: Option<i64>,
    #[prost(uint64, optional, tag = "5")]
    pub uint_value: Option<u64>,
    #[prost(sint64, optional, tag = "6")]
    pub sint_value: Option<i64>,
    #[prost(bool, optional, tag = "7")]
    pub bool_value: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, prost::Enumeration)]
#[repr(i32)]
pub enum GeomType {
    Unknown = 0,
    Point = 1,
    LineString = 2,
    Polygon = 3,
}

impl Feature {
    pub fn new(geometry_type: GeomType, geometry: Vec<u32>) -> Self {
        Self {
            id: None,
            tags: Vec::new(),
            geometry_type: Some(geometry_type as i32),
            geometry,
        }
    }
}

impl Layer {
    /// A version-1 layer holding a single feature
    pub fn with_feature(name: impl Into<String>, extent: u32, feature: Feature) -> Self {
        Self {
            name: name.into(),
            features: vec![feature],
            keys: Vec::new(),
            values: Vec::new(),
            extent: Some(extent),
            version: LAYER_VERSION,
        }
    }
}

impl Tile {
    /// Find a layer by name
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Serialize to protobuf bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Parse protobuf bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TileError> {
        Ok(Self::decode(bytes)?)
    }
}

/// Assemble the two-layer tile
///
/// Both layers are always present, each with exactly one feature, even when
/// the feature's geometry is empty.
pub fn build_tile(line_geometry: Vec<u32>, polygon_geometry: Vec<u32>, extent: u32) -> Tile {
    Tile {
        layers: vec![
            Layer::with_feature(
                LINES_LAYER,
                extent,
                Feature::new(GeomType::LineString, line_geometry),
            ),
            Layer::with_feature(
                POLYGONS_LAYER,
                extent,
                Feature::new(GeomType::Polygon, polygon_geometry),
            ),
        ],
    }
}

/// Decompress and parse a tile produced by [`compress`]
pub fn decode_tile(compressed: &[u8]) -> Result<Tile, TileError> {
    let bytes = decompress(compressed)?;
    Tile::from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tile_layers() {
        let tile = build_tile(vec![9, 0, 0], Vec::new(), 4096);
        assert_eq!(tile.layers.len(), 2);

        let lines = &tile.layers[0];
        assert_eq!(lines.name, LINES_LAYER);
        assert_eq!(lines.version, 1);
        assert_eq!(lines.extent, Some(4096));
        assert_eq!(lines.features.len(), 1);
        assert_eq!(lines.features[0].geometry_type(), GeomType::LineString);

        let polygons = tile.layer(POLYGONS_LAYER).unwrap();
        assert_eq!(polygons.features.len(), 1);
        assert_eq!(polygons.features[0].geometry_type(), GeomType::Polygon);
        assert!(polygons.features[0].geometry.is_empty());
    }

    #[test]
    fn test_tile_bytes_round_trip() {
        let tile = build_tile(vec![9, 0, 0, 10, 10, 10], vec![9, 18, 20], 16);
        let parsed = Tile::from_bytes(&tile.to_bytes()).unwrap();
        assert_eq!(parsed, tile);
    }

    #[test]
    fn test_empty_tile_round_trip() {
        let tile = build_tile(Vec::new(), Vec::new(), 4096);
        let parsed = Tile::from_bytes(&tile.to_bytes()).unwrap();
        assert_eq!(parsed.layers.len(), 2);
        assert!(parsed.layers.iter().all(|l| l.features.len() == 1));
        assert_eq!(parsed, tile);
    }

    #[test]
    fn test_wire_bytes_for_small_layer() {
        // Layer: name "lines", one LineString feature [9, 0, 0], extent 16, version 1
        let tile = Tile {
            layers: vec![Layer::with_feature(
                "lines",
                16,
                Feature::new(GeomType::LineString, vec![9, 0, 0]),
            )],
        };
        let expected: Vec<u8> = vec![
            0x1a, 0x14, // tile.layers, 20 bytes
            0x0a, 0x05, b'l', b'i', b'n', b'e', b's', // name
            0x12, 0x07, // feature, 7 bytes
            0x18, 0x02, // type LineString
            0x22, 0x03, 0x09, 0x00, 0x00, // packed geometry
            0x28, 0x10, // extent 16
            0x78, 0x01, // version 1
        ];
        assert_eq!(tile.to_bytes(), expected);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Tile::from_bytes(&[0x1a, 0xff]),
            Err(TileError::Decode(_))
        ));
    }
}
