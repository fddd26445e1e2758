use super::GeoFeature;

/// An ordered sequence of input features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}
