use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A closed ring: a connected series of coordinates forming a loop, the
/// building block of polygons. The first and last point must be identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring has at least 4 coordinates (3 unique points
	/// plus the closing point), is closed, and carries only finite values.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "ring must be closed");
		for coord in &self.0 {
			coord.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn verify_not_closed() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn verify_non_finite() {
		let mut ring = square();
		ring.0[2] = Coordinates::new(f64::INFINITY, 10.0);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn composite_access() {
		let ring = square();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring.first(), ring.last());
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		assert_eq!(RingGeometry::from(ls).len(), 2);
	}
}
