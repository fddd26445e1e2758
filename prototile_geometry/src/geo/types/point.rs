use super::{Coordinates, GeometryTrait};
use anyhow::Result;
use std::fmt::Debug;

/// A single geographic point defined by longitude and latitude.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		self.0.verify()
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn from_array_ref() {
		let p = PointGeometry::from(&[1, 2]);
		assert_eq!(p.x(), 1.0);
		assert_eq!(p.y(), 2.0);
	}

	#[test]
	fn from_geo_point() {
		let p = PointGeometry::from(geo::Point::new(3.0, 4.0));
		assert_eq!(p.x(), 3.0);
		assert_eq!(p.y(), 4.0);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from([1.0, 2.0])), "[1.0, 2.0]");
	}

	#[test]
	fn verify() {
		assert!(PointGeometry::from([0.0, 0.0]).verify().is_ok());
		assert!(PointGeometry::from([f64::NAN, 0.0]).verify().is_err());
	}
}
