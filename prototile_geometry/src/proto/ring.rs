use super::ProtoVertex;
use std::fmt::Debug;

/// One flattened closed ring or open line, with its derived metric.
///
/// For a closed ring `metric` is the absolute shoelace area, for an open line
/// the cumulative Euclidean length, both in normalized-plane units. `start`
/// and `end` mark the metric-space offset range of the line; mid-line offsets
/// are not supported, so `start` is always 0 and `end` equals `metric`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtoRing {
	pub vertices: Vec<ProtoVertex>,
	pub metric: f64,
	pub start: f64,
	pub end: f64,
}

impl ProtoRing {
	/// Builds a ring from already-projected vertices, accumulating the
	/// signed shoelace area (`closed`) or the Euclidean length (open). The
	/// first vertex contributes nothing; the stored metric is the absolute
	/// value of the accumulated sum.
	#[must_use]
	pub fn from_projected(vertices: Vec<ProtoVertex>, closed: bool) -> Self {
		let mut sum = 0f64;
		for pair in vertices.windows(2) {
			let (p0, p1) = (pair[0], pair[1]);
			if closed {
				sum += (p0.x() * p1.y() - p1.x() * p0.y()) / 2.0;
			} else {
				sum += (p1.x() - p0.x()).hypot(p1.y() - p0.y());
			}
		}
		let metric = sum.abs();
		Self {
			vertices,
			metric,
			start: 0.0,
			end: metric,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.vertices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}
}
