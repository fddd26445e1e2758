use super::ProtoGeometry;
use crate::geo::{GeoProperties, GeoValue, GeometryKind};

/// One converted feature: flattened projected geometry plus the identity and
/// attributes carried over from the input. Owned by the caller once
/// returned; the converter never touches it again.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtoFeature {
	pub id: Option<GeoValue>,
	pub geometry: ProtoGeometry,
	pub properties: GeoProperties,
}

impl ProtoFeature {
	#[must_use]
	pub fn new(id: Option<GeoValue>, geometry: ProtoGeometry, properties: GeoProperties) -> Self {
		Self {
			id,
			geometry,
			properties,
		}
	}

	#[must_use]
	pub fn kind(&self) -> GeometryKind {
		self.geometry.kind()
	}
}
