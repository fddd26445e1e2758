use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Scalar types a raw coordinate component may arrive as.
pub trait Convertible: Copy + Into<f64> {}

impl<T: Copy + Into<f64>> Convertible for T {}

/// A single (longitude, latitude) pair in degrees. The range is unconstrained
/// on input; the projection stage decides what happens outside the usual
/// bounds.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	/// Longitude component.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Latitude component.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.0[0].is_finite() && self.0[1].is_finite(),
			"coordinate [{}, {}] is not finite",
			self.0[0],
			self.0[1]
		);
		Ok(())
	}
}

impl<T: Convertible> From<[T; 2]> for Coordinates {
	fn from(value: [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl<'a, T: Convertible> From<&'a [T; 2]> for Coordinates {
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<geo::Point> for Coordinates {
	fn from(value: geo::Point) -> Self {
		Coordinates([value.x(), value.y()])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
	}

	#[test]
	fn from_integer_array() {
		let c = Coordinates::from([7, 8]);
		assert_eq!(c.x(), 7.0);
		assert_eq!(c.y(), 8.0);
	}

	#[test]
	fn from_array_ref_and_tuple() {
		assert_eq!(Coordinates::from(&[1, 2]), Coordinates::new(1.0, 2.0));
		assert_eq!(Coordinates::from((3.0, 4.0)), Coordinates::new(3.0, 4.0));
	}

	#[test]
	fn from_geo_coord() {
		let c = Coordinates::from(geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(c.x(), 11.0);
		assert_eq!(c.y(), 22.0);
	}

	#[test]
	fn into_array() {
		let arr: [f64; 2] = Coordinates::new(10.25, -20.5).into();
		assert_eq!(arr, [10.25, -20.5]);
	}

	#[test]
	fn verify_finite() {
		assert!(Coordinates::new(1.0, 2.0).verify().is_ok());
	}

	#[test]
	fn verify_rejects_nan_and_infinity() {
		assert!(Coordinates::new(f64::NAN, 2.0).verify().is_err());
		assert!(Coordinates::new(1.0, f64::INFINITY).verify().is_err());
	}
}
