use geo::prelude::*;
use geo_types::{Coordinate, MultiPoint, Point};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl From<(f64, f64)> for Location {
    /// GeoJSON position order: `(lon, lat)`.
    fn from(coordinates: (f64, f64)) -> Self {
        Location {
            lon: coordinates.0,
            lat: coordinates.1,
        }
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

impl From<Coordinate<f64>> for Location {
    fn from(coordinate: Coordinate<f64>) -> Self {
        Location {
            lat: coordinate.y,
            lon: coordinate.x,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl Bounds {
    /// Reads `[minLon, minLat, maxLon, maxLat]`.
    pub fn from_bbox(bbox: &[f64]) -> Option<Self> {
        match *bbox {
            [w, s, e, n] => Some(Bounds { e, n, s, w }),
            _ => None,
        }
    }

    pub fn sw_ne(&self) -> (Location, Location) {
        let sw = Location {
            lat: self.s,
            lon: self.w,
        };
        let ne = Location {
            lat: self.n,
            lon: self.e,
        };
        (sw, ne)
    }
}

pub fn get_bounds(coordinates: &[(f64, f64)]) -> Option<Bounds> {
    let points: MultiPoint<f64> = coordinates
        .iter()
        .map(|&(lon, lat)| Point::new(lon, lat))
        .collect::<Vec<_>>()
        .into();
    let rect = points.bounding_rect()?;
    let sw: Location = rect.min().into();
    let ne: Location = rect.max().into();
    Some(Bounds {
        e: ne.lon,
        n: ne.lat,
        s: sw.lat,
        w: sw.lon,
    })
}
