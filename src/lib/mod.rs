pub use document::{load, Document};
pub use feature::{classify, CategoryKind, ClassifiedFeature, GeometryKind};
pub use overlay::{to_overlay, MarkerDescriptor, OverlayDescriptor, PolygonDescriptor};
pub use visibility::{select_visible, Visible, ZoomTier};

pub mod color;
pub mod decode;
mod document;
mod feature;
pub mod geo;
pub mod output;
mod overlay;
mod visibility;
