use super::{ProtoRing, ProtoVertex};
use crate::geo::GeometryKind;
use std::fmt::Debug;

/// The flattened geometry container. Nesting depth depends on the kind; a
/// collection kind never appears here because the converter expands
/// collections into separate features.
#[derive(Clone, PartialEq)]
pub enum ProtoGeometry {
	Point(ProtoVertex),
	MultiPoint(Vec<ProtoVertex>),
	LineString(ProtoRing),
	MultiLineString(Vec<ProtoRing>),
	/// First ring is the exterior, the rest are holes. Ring metrics stay
	/// independent; hole areas are not subtracted.
	Polygon(Vec<ProtoRing>),
	MultiPolygon(Vec<Vec<ProtoRing>>),
}

impl ProtoGeometry {
	#[must_use]
	pub fn kind(&self) -> GeometryKind {
		match self {
			ProtoGeometry::Point(_) => GeometryKind::Point,
			ProtoGeometry::MultiPoint(_) => GeometryKind::MultiPoint,
			ProtoGeometry::LineString(_) => GeometryKind::LineString,
			ProtoGeometry::MultiLineString(_) => GeometryKind::MultiLineString,
			ProtoGeometry::Polygon(_) => GeometryKind::Polygon,
			ProtoGeometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
		}
	}
}

impl Debug for ProtoGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			ProtoGeometry::Point(g) => g,
			ProtoGeometry::MultiPoint(g) => g,
			ProtoGeometry::LineString(g) => g,
			ProtoGeometry::MultiLineString(g) => g,
			ProtoGeometry::Polygon(g) => g,
			ProtoGeometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.kind().as_str()).field(inner).finish()
	}
}
