use super::feature::{CategoryKind, ClassifiedFeature};

/// The band a zoom level falls into. Each band admits a superset of the
/// categories of the band below it.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ZoomTier {
    /// zoom ≤ 9
    Hidden,
    /// 9 < zoom ≤ 12
    Harbours,
    /// 12 < zoom ≤ 17
    Coast,
    /// zoom > 17
    Everything,
}

impl ZoomTier {
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom > 17.0 {
            ZoomTier::Everything
        } else if zoom > 12.0 {
            ZoomTier::Coast
        } else if zoom > 9.0 {
            ZoomTier::Harbours
        } else {
            // also NaN
            ZoomTier::Hidden
        }
    }

    pub fn admits(self, category: CategoryKind) -> bool {
        use CategoryKind::*;

        match self {
            ZoomTier::Hidden => false,
            ZoomTier::Harbours => match category {
                Port | Marina => true,
                Spot | AnchorageSpot | Beach | MooringSpot | Unspecified => false,
            },
            ZoomTier::Coast => match category {
                Port | Marina | Beach => true,
                Spot | AnchorageSpot | MooringSpot | Unspecified => false,
            },
            ZoomTier::Everything => true,
        }
    }
}

pub trait Visible {
    fn visible_at(&self, zoom: f64) -> bool;
}

impl Visible for ClassifiedFeature {
    fn visible_at(&self, zoom: f64) -> bool {
        ZoomTier::for_zoom(zoom).admits(self.category())
    }
}

/// Stable filter: visible features keep their relative input order.
pub fn select_visible(features: &[ClassifiedFeature], zoom: f64) -> Vec<&ClassifiedFeature> {
    features
        .iter()
        .filter(|feature| feature.visible_at(zoom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::classify;
    use serde_json::{json, Map};

    fn feature(tag: &str) -> ClassifiedFeature {
        let properties = json!({ "type": tag }).as_object().cloned().unwrap();
        classify(&properties, &Map::new())
    }

    fn all_features() -> Vec<ClassifiedFeature> {
        vec![
            feature("spot"),
            feature("marina"),
            feature("beach"),
            feature("anchorage_spot"),
            feature("port"),
            feature("mooring_spot"),
            feature("unknown"),
            feature("marina"),
        ]
    }

    fn categories_at(features: &[ClassifiedFeature], zoom: f64) -> Vec<CategoryKind> {
        select_visible(features, zoom)
            .into_iter()
            .map(ClassifiedFeature::category)
            .collect()
    }

    #[test]
    fn nothing_at_low_zoom() {
        let features = all_features();
        assert!(categories_at(&features, 0.0).is_empty());
        assert!(categories_at(&features, 9.0).is_empty());
        assert!(categories_at(&features, -3.0).is_empty());
        assert!(categories_at(&features, std::f64::NAN).is_empty());
    }

    #[test]
    fn harbours_above_nine() {
        use CategoryKind::*;

        let features = all_features();
        assert_eq!(categories_at(&features, 9.01), vec![Marina, Port, Marina]);
        assert_eq!(categories_at(&features, 12.0), vec![Marina, Port, Marina]);
    }

    #[test]
    fn beaches_above_twelve() {
        use CategoryKind::*;

        let features = all_features();
        assert_eq!(
            categories_at(&features, 12.01),
            vec![Marina, Beach, Port, Marina]
        );
        assert_eq!(
            categories_at(&features, 17.0),
            vec![Marina, Beach, Port, Marina]
        );
    }

    #[test]
    fn everything_above_seventeen() {
        let features = all_features();
        let visible = select_visible(&features, 17.01);
        assert_eq!(visible.len(), features.len());
        for (selected, original) in visible.iter().zip(features.iter()) {
            assert_eq!(*selected, original);
        }
    }

    #[test]
    fn repeated_calls_agree_and_leave_input_alone() {
        let features = all_features();
        let before = features.clone();
        let first = categories_at(&features, 13.5);
        let second = categories_at(&features, 13.5);
        assert_eq!(first, second);
        assert_eq!(features, before);
    }

    #[test]
    fn tiers_at_boundaries() {
        assert_eq!(ZoomTier::for_zoom(9.0), ZoomTier::Hidden);
        assert_eq!(ZoomTier::for_zoom(9.000_001), ZoomTier::Harbours);
        assert_eq!(ZoomTier::for_zoom(12.0), ZoomTier::Harbours);
        assert_eq!(ZoomTier::for_zoom(12.000_001), ZoomTier::Coast);
        assert_eq!(ZoomTier::for_zoom(17.0), ZoomTier::Coast);
        assert_eq!(ZoomTier::for_zoom(17.000_001), ZoomTier::Everything);
    }

    #[test]
    fn visible_trait() {
        assert_eq!(feature("beach").visible_at(12.0), false);
        assert_eq!(feature("beach").visible_at(12.5), true);
        assert_eq!(feature("spot").visible_at(17.0), false);
        assert_eq!(feature("spot").visible_at(18.0), true);
    }
}
