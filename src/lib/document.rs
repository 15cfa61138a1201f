use super::decode::{self, ParseResult, Properties};
use super::feature::{classify, ClassifiedFeature, GeometryKind};
use super::geo::{get_bounds, Bounds};
use super::overlay::{to_overlay, OverlayDescriptor};
use super::visibility::select_visible;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::io::Read;

pub struct Document {
    bbox: Option<Bounds>,
    features: Vec<ClassifiedFeature>,
}

fn object(record: &Value, key: &str) -> Properties {
    match record.get(key) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

fn get_bbox(document: &Value) -> Option<Bounds> {
    let numbers: Option<Vec<f64>> = document
        .get("bbox")?
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect();
    Bounds::from_bbox(&numbers?)
}

fn positions(feature: &ClassifiedFeature) -> Vec<(f64, f64)> {
    let coordinates = match decode::field(feature.geometry(), "coordinates") {
        ParseResult::Value(coordinates) => coordinates,
        _ => return vec![],
    };
    match feature.geometry_kind() {
        GeometryKind::Point => decode::position(coordinates).ok().into_iter().collect(),
        GeometryKind::Polygon => decode::rings(coordinates)
            .ok()
            .into_iter()
            .flatten()
            .flatten()
            .collect(),
        GeometryKind::Unspecified => vec![],
    }
}

impl Document {
    /// Classify every record of a decoded GeoJSON `FeatureCollection`.
    ///
    /// Records that are not objects, or that lack `properties`/`geometry`
    /// maps, are classified with empty maps rather than skipped.
    pub fn from_value(document: &Value) -> Self {
        let bbox = get_bbox(document);
        let records = match document.get("features").and_then(Value::as_array) {
            Some(records) => records,
            None => {
                warn!("document has no features array");
                return Document {
                    bbox,
                    features: vec![],
                };
            }
        };
        let features = records
            .iter()
            .map(|record| classify(&object(record, "properties"), &object(record, "geometry")))
            .collect();
        Document { bbox, features }
    }

    pub fn features(&self) -> &[ClassifiedFeature] {
        &self.features
    }

    /// The declared `bbox`, or the extent of all decodable coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.bbox.is_some() {
            return self.bbox;
        }
        let coordinates: Vec<(f64, f64)> = self.features.iter().flat_map(positions).collect();
        get_bounds(&coordinates)
    }

    pub fn overlays(&self, zoom: f64) -> Vec<OverlayDescriptor> {
        let visible = select_visible(&self.features, zoom);
        debug!(
            "{} of {} features visible at zoom {}",
            visible.len(),
            self.features.len(),
            zoom
        );
        visible
            .into_iter()
            .filter_map(to_overlay)
            .flatten()
            .collect()
    }
}

pub fn load(reader: impl Read) -> Result<Document, Box<dyn Error>> {
    let value: Value = serde_json::from_reader(reader)?;
    Ok(Document::from_value(&value))
}
