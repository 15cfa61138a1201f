use super::color::{parse_hex, Paint, Rgb};
use super::decode::{self, ParseResult, Properties};
use super::feature::{ClassifiedFeature, GeometryKind};
use super::geo::Location;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

pub const MARKER_COLOR: Rgb = Rgb::ORANGE;
pub const FILL_COLOR: Rgb = Rgb::GREEN;
pub const STROKE_COLOR: Rgb = Rgb::RED;
pub const OPACITY: f64 = 1.0;
pub const STROKE_WIDTH: f64 = 1.0;

#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct MarkerDescriptor {
    pub position: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    pub icon_color: Rgb,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct PolygonDescriptor {
    pub ring: Vec<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(tag = "type")]
pub enum OverlayDescriptor {
    Marker(MarkerDescriptor),
    Polygon(PolygonDescriptor),
}

fn text(properties: &Properties, key: &str) -> Option<String> {
    decode::string(properties, key).ok().map(String::from)
}

fn color(properties: &Properties, key: &str, fallback: Rgb) -> Rgb {
    decode::string(properties, key)
        .ok()
        .and_then(parse_hex)
        .unwrap_or(fallback)
}

fn opacity(properties: &Properties, key: &str) -> f64 {
    match decode::number(properties, key) {
        ParseResult::Value(n) if n.is_finite() => n.max(0.0).min(1.0),
        _ => OPACITY,
    }
}

fn stroke_width(properties: &Properties) -> f64 {
    match decode::number(properties, "stroke-width") {
        ParseResult::Value(n) if n.is_finite() && n >= 0.0 => n,
        _ => STROKE_WIDTH,
    }
}

fn marker(properties: &Properties, coordinates: &serde_json::Value) -> Option<OverlayDescriptor> {
    let pair = decode::position(coordinates).ok()?;
    Some(OverlayDescriptor::Marker(MarkerDescriptor {
        position: pair.into(),
        title: text(properties, "name"),
        snippet: text(properties, "type"),
        icon_color: color(properties, "marker-color", MARKER_COLOR),
    }))
}

fn polygons(
    properties: &Properties,
    coordinates: &serde_json::Value,
) -> Option<Vec<OverlayDescriptor>> {
    let rings = decode::rings(coordinates).ok()?;
    if rings.is_empty() {
        return None;
    }
    let title = text(properties, "name");
    let fill = Paint {
        color: color(properties, "fill", FILL_COLOR),
        opacity: opacity(properties, "fill-opacity"),
    };
    let stroke = Paint {
        color: color(properties, "stroke", STROKE_COLOR),
        opacity: opacity(properties, "stroke-opacity"),
    };
    let stroke_width = stroke_width(properties);
    let overlays = rings
        .into_iter()
        .map(|ring| {
            OverlayDescriptor::Polygon(PolygonDescriptor {
                ring: ring.into_iter().map(Location::from).collect(),
                title: title.clone(),
                fill,
                stroke,
                stroke_width,
            })
        })
        .collect_vec();
    Some(overlays)
}

/// Build the overlays for a feature.
///
/// A point yields one marker, a polygon yields one overlay per ring.
/// `None` means there is nothing to render.
pub fn to_overlay(feature: &ClassifiedFeature) -> Option<Vec<OverlayDescriptor>> {
    let coordinates = match decode::field(feature.geometry(), "coordinates") {
        ParseResult::Value(coordinates) => coordinates,
        _ => {
            debug!("feature without coordinates: {:?}", feature.properties());
            return None;
        }
    };
    let overlays = match feature.geometry_kind() {
        GeometryKind::Point => marker(feature.properties(), coordinates).map(|m| vec![m]),
        GeometryKind::Polygon => polygons(feature.properties(), coordinates),
        GeometryKind::Unspecified => None,
    };
    if overlays.is_none() {
        debug!(
            "no overlay for {:?} feature {:?}",
            feature.geometry_kind(),
            feature.properties()
        );
    }
    overlays
}
