use super::decode::{self, ParseResult, Properties};
use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum GeometryKind {
    Point,
    Polygon,
    Unspecified,
}

impl GeometryKind {
    fn from_geometry(geometry: &Properties) -> Self {
        match decode::string(geometry, "type") {
            ParseResult::Value("Point") => GeometryKind::Point,
            ParseResult::Value(_) => GeometryKind::Polygon,
            _ => GeometryKind::Unspecified,
        }
    }
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Spot,
    AnchorageSpot,
    Port,
    Beach,
    MooringSpot,
    Marina,
    Unspecified,
}

impl CategoryKind {
    pub const TAGGED: [CategoryKind; 6] = [
        CategoryKind::Spot,
        CategoryKind::AnchorageSpot,
        CategoryKind::Port,
        CategoryKind::Beach,
        CategoryKind::MooringSpot,
        CategoryKind::Marina,
    ];

    pub fn tag(self) -> Option<&'static str> {
        match self {
            CategoryKind::Spot => Some("spot"),
            CategoryKind::AnchorageSpot => Some("anchorage_spot"),
            CategoryKind::Port => Some("port"),
            CategoryKind::Beach => Some("beach"),
            CategoryKind::MooringSpot => Some("mooring_spot"),
            CategoryKind::Marina => Some("marina"),
            CategoryKind::Unspecified => None,
        }
    }

    /// Case-sensitive lookup; unknown tags are `Unspecified`.
    pub fn from_tag(tag: &str) -> Self {
        CategoryKind::TAGGED
            .iter()
            .copied()
            .find(|category| category.tag() == Some(tag))
            .unwrap_or(CategoryKind::Unspecified)
    }

    fn from_properties(properties: &Properties) -> Self {
        decode::string(properties, "type")
            .ok()
            .map_or(CategoryKind::Unspecified, CategoryKind::from_tag)
    }
}

/// A GeoJSON feature with its kinds decided once, at construction.
#[derive(PartialEq, Debug, Clone)]
pub struct ClassifiedFeature {
    geometry_kind: GeometryKind,
    category: CategoryKind,
    properties: Properties,
    geometry: Properties,
}

impl ClassifiedFeature {
    pub fn geometry_kind(&self) -> GeometryKind {
        self.geometry_kind
    }

    pub fn category(&self) -> CategoryKind {
        self.category
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn geometry(&self) -> &Properties {
        &self.geometry
    }
}

pub fn classify(properties: &Properties, geometry: &Properties) -> ClassifiedFeature {
    ClassifiedFeature {
        geometry_kind: GeometryKind::from_geometry(geometry),
        category: CategoryKind::from_properties(properties),
        properties: properties.clone(),
        geometry: geometry.clone(),
    }
}
