use crate::ConvertError;
use std::{fmt, str::FromStr};

/// The recognized geometry kinds. Anything else entering the system as a
/// kind string fails with [`ConvertError::UnsupportedGeometry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryKind {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryKind {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::MultiPoint => "MultiPoint",
			GeometryKind::LineString => "LineString",
			GeometryKind::MultiLineString => "MultiLineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::MultiPolygon => "MultiPolygon",
			GeometryKind::GeometryCollection => "GeometryCollection",
		}
	}
}

impl fmt::Display for GeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeometryKind {
	type Err = ConvertError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Ok(match value {
			"Point" => GeometryKind::Point,
			"MultiPoint" => GeometryKind::MultiPoint,
			"LineString" => GeometryKind::LineString,
			"MultiLineString" => GeometryKind::MultiLineString,
			"Polygon" => GeometryKind::Polygon,
			"MultiPolygon" => GeometryKind::MultiPolygon,
			"GeometryCollection" => GeometryKind::GeometryCollection,
			_ => return Err(ConvertError::UnsupportedGeometry(value.to_string())),
		})
	}
}
