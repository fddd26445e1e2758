use super::{GeoCollection, GeoFeature, Geometry};

/// What the converter accepts: a whole collection, a single feature, or a
/// bare geometry (treated as an anonymous feature without properties).
#[derive(Clone, Debug, PartialEq)]
pub enum GeoInput {
	Collection(GeoCollection),
	Feature(GeoFeature),
	Geometry(Geometry),
}

impl From<GeoCollection> for GeoInput {
	fn from(value: GeoCollection) -> Self {
		GeoInput::Collection(value)
	}
}

impl From<GeoFeature> for GeoInput {
	fn from(value: GeoFeature) -> Self {
		GeoInput::Feature(value)
	}
}

impl From<Geometry> for GeoInput {
	fn from(value: Geometry) -> Self {
		GeoInput::Geometry(value)
	}
}
