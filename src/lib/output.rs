use super::overlay::OverlayDescriptor;
use serde::Serialize;
use serde_json::{json, to_string, Map, Value};
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Entity {
    Feature {
        properties: Map<String, Value>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

fn insert_some(properties: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        properties.insert(key.into(), value.as_str().into());
    }
}

impl From<&OverlayDescriptor> for Entity {
    fn from(overlay: &OverlayDescriptor) -> Self {
        let mut properties = Map::new();
        let geometry = match overlay {
            OverlayDescriptor::Marker(marker) => {
                insert_some(&mut properties, "name", &marker.title);
                insert_some(&mut properties, "type", &marker.snippet);
                properties.insert("marker-color".into(), json!(marker.icon_color));
                Geometry::Point {
                    coordinates: marker.position.into(),
                }
            }
            OverlayDescriptor::Polygon(polygon) => {
                insert_some(&mut properties, "name", &polygon.title);
                properties.insert("fill".into(), json!(polygon.fill.color));
                properties.insert("fill-opacity".into(), json!(polygon.fill.opacity));
                properties.insert("stroke".into(), json!(polygon.stroke.color));
                properties.insert("stroke-opacity".into(), json!(polygon.stroke.opacity));
                properties.insert("stroke-width".into(), json!(polygon.stroke_width));
                let ring: Vec<[f64; 2]> =
                    polygon.ring.iter().copied().map(<[f64; 2]>::from).collect();
                Geometry::Polygon {
                    coordinates: vec![ring],
                }
            }
        };
        Entity::Feature {
            properties,
            geometry,
        }
    }
}

impl Output for [OverlayDescriptor] {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for overlay in self.iter() {
            let json = to_string(overlay)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self.iter().map(Entity::from).collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
