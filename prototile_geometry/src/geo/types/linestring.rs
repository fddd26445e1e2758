use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A connected series of coordinates forming an open path.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures the line has at least two points and only finite coordinates.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		for coord in &self.0 {
			coord.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_valid() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1], [2, 0]]);
		assert!(line.verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let line = LineStringGeometry::from(&[[0, 0]]);
		assert!(line.verify().is_err());
	}

	#[test]
	fn verify_non_finite() {
		let line = LineStringGeometry(vec![Coordinates::new(0.0, 0.0), Coordinates::new(f64::NAN, 1.0)]);
		assert!(line.verify().is_err());
	}

	#[test]
	fn composite_access() {
		let mut line = LineStringGeometry::new();
		assert!(line.is_empty());
		line.push(Coordinates::new(1.0, 2.0));
		line.push(Coordinates::new(3.0, 4.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line.first().unwrap().x(), 1.0);
		assert_eq!(line.last().unwrap().y(), 4.0);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		assert_eq!(LineStringGeometry::from(ls).len(), 2);
	}
}
