use super::{Simplifier, project_x, project_y};
use crate::{
	geo::{CompositeGeometryTrait, Coordinates, Geometry, PolygonGeometry},
	proto::{ProtoGeometry, ProtoRing, ProtoVertex},
};
use anyhow::{Result, bail};
use log::trace;

/// Turns one decoded geometry into its flattened, projected counterpart.
///
/// Holds the per-pass squared tolerance and the simplifier; both stay
/// constant across all rings of a conversion call.
pub(crate) struct GeometryFlattener<'a, S: Simplifier> {
	sq_tolerance: f64,
	simplifier: &'a S,
}

impl<'a, S: Simplifier> GeometryFlattener<'a, S> {
	pub fn new(sq_tolerance: f64, simplifier: &'a S) -> Self {
		Self {
			sq_tolerance,
			simplifier,
		}
	}

	/// Dispatches by geometry kind into the matching nesting of flattened
	/// rings and vertices. Collections never reach this point; the
	/// converter expands them into separate features first.
	pub fn flatten(&self, geometry: &Geometry) -> Result<ProtoGeometry> {
		Ok(match geometry {
			Geometry::Point(g) => ProtoGeometry::Point(flatten_point(g.as_coord())),
			Geometry::MultiPoint(g) => {
				ProtoGeometry::MultiPoint(g.iter().map(|p| flatten_point(p.as_coord())).collect())
			}
			Geometry::LineString(g) => ProtoGeometry::LineString(self.flatten_ring(g.as_vec(), false)),
			Geometry::MultiLineString(g) => {
				ProtoGeometry::MultiLineString(g.iter().map(|line| self.flatten_ring(line.as_vec(), false)).collect())
			}
			Geometry::Polygon(g) => ProtoGeometry::Polygon(self.flatten_polygon(g)),
			Geometry::MultiPolygon(g) => {
				ProtoGeometry::MultiPolygon(g.iter().map(|polygon| self.flatten_polygon(polygon)).collect())
			}
			Geometry::GeometryCollection(_) => {
				bail!("geometry collections must be expanded before flattening")
			}
		})
	}

	/// Projects one ring or line, computes its metric, pins the endpoint
	/// significances and lets the simplifier mark the interior.
	pub fn flatten_ring(&self, coords: &[Coordinates], is_polygon: bool) -> ProtoRing {
		let vertices = coords
			.iter()
			.map(|c| ProtoVertex::new(project_x(c.x()), project_y(c.y())))
			.collect();
		let mut ring = ProtoRing::from_projected(vertices, is_polygon);
		self.mark_significance(&mut ring);
		ring
	}

	fn flatten_polygon(&self, polygon: &PolygonGeometry) -> Vec<ProtoRing> {
		polygon.iter().map(|ring| self.flatten_ring(ring.as_vec(), true)).collect()
	}

	fn mark_significance(&self, ring: &mut ProtoRing) {
		let len = ring.vertices.len();
		if len < 2 {
			trace!("ring/line with {len} vertices, nothing to simplify");
			return;
		}
		let last = len - 1;
		ring.vertices[0].set_significance(1.0);
		ring.vertices[last].set_significance(1.0);
		self.simplifier.simplify(&mut ring.vertices, 0, last, self.sq_tolerance);
		// endpoints stay pinned no matter what the simplifier wrote
		ring.vertices[0].set_significance(1.0);
		ring.vertices[last].set_significance(1.0);
	}
}

fn flatten_point(c: &Coordinates) -> ProtoVertex {
	ProtoVertex::new(project_x(c.x()), project_y(c.y()))
}
