use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// A collection of discrete points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		for point in &self.0 {
			point.verify()?;
		}
		Ok(())
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_ok() {
		let mp = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert!(mp.verify().is_ok());
		assert!(MultiPointGeometry::new().verify().is_ok());
	}

	#[test]
	fn verify_non_finite() {
		let mp = MultiPointGeometry(vec![PointGeometry::from([f64::NAN, 0.0])]);
		assert!(mp.verify().is_err());
	}

	#[test]
	fn composite_access() {
		let mp = MultiPointGeometry::from(&[[1, 2], [3, 4], [5, 6]]);
		assert_eq!(mp.len(), 3);
		assert_eq!(mp.first().unwrap().x(), 1.0);
		assert_eq!(mp.last().unwrap().x(), 5.0);
	}

	#[test]
	fn from_geo_multi_point() {
		let mp = geo::MultiPoint::new(vec![geo::Point::new(1.0, 2.0), geo::Point::new(3.0, 4.0)]);
		assert_eq!(MultiPointGeometry::from(mp).len(), 2);
	}
}
