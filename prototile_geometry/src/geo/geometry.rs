use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// A decoded geometry tree. Unlike the flattened output model, this may still
/// contain a `GeometryCollection`, which the converter expands away.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T: Convertible>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T: Convertible>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T: Convertible>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T: Convertible>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T: Convertible>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T: Convertible>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(value: Vec<Geometry>) -> Self {
		Self::GeometryCollection(value)
	}

	#[must_use]
	pub fn kind(&self) -> GeometryKind {
		match self {
			Geometry::Point(_) => GeometryKind::Point,
			Geometry::LineString(_) => GeometryKind::LineString,
			Geometry::Polygon(_) => GeometryKind::Polygon,
			Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
			Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(children) => {
				for child in children {
					child.verify()?;
				}
				Ok(())
			}
		}
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.kind().as_str()).field(inner).finish()
	}
}

impl From<geo::Geometry<f64>> for Geometry {
	fn from(value: geo::Geometry<f64>) -> Self {
		match value {
			geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			geo::Geometry::Line(g) => Geometry::LineString(LineStringGeometry(vec![
				Coordinates::from(g.start),
				Coordinates::from(g.end),
			])),
			geo::Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::from(g)),
			geo::Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::from(g)),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(MultiPointGeometry::from(g)),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry::from(g)),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry::from(g)),
			geo::Geometry::GeometryCollection(g) => {
				Geometry::GeometryCollection(g.into_iter().map(Geometry::from).collect())
			}
			geo::Geometry::Rect(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
			geo::Geometry::Triangle(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_names() {
		assert_eq!(Geometry::new_point([1, 2]).kind(), GeometryKind::Point);
		assert_eq!(
			Geometry::new_geometry_collection(vec![]).kind(),
			GeometryKind::GeometryCollection
		);
	}

	#[test]
	fn verify_example() {
		assert!(Geometry::new_example().verify().is_ok());
	}

	#[test]
	fn verify_collection_recurses() {
		let collection = Geometry::new_geometry_collection(vec![
			Geometry::new_point([1, 2]),
			Geometry::new_line_string(vec![[0, 0]]),
		]);
		assert!(collection.verify().is_err());
	}

	#[test]
	fn debug_shows_kind() {
		let debug = format!("{:?}", Geometry::new_point([1, 2]));
		assert!(debug.starts_with("Point"));
	}

	#[test]
	fn from_geo_geometry() {
		let geometry = Geometry::from(geo::Geometry::Point(geo::Point::new(1.0, 2.0)));
		assert_eq!(geometry, Geometry::new_point([1.0, 2.0]));

		let collection = geo::Geometry::GeometryCollection(geo::GeometryCollection::from(vec![
			geo::Geometry::Point(geo::Point::new(0.0, 0.0)),
		]));
		assert_eq!(Geometry::from(collection).kind(), GeometryKind::GeometryCollection);
	}
}
