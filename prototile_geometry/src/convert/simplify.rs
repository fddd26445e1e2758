use crate::proto::ProtoVertex;

/// Point-reduction capability consumed by the flattener.
///
/// Implementations mutate the significance of interior vertices in place.
/// The contract:
/// - `vertices[first]` and `vertices[last]` are left untouched (the
///   flattener pins them to 1 regardless),
/// - running twice with the same tolerance yields the same significances,
/// - vertex positions are never modified.
///
/// Any tolerance-based reducer satisfying this contract may be substituted,
/// e.g. Visvalingam-Whyatt instead of the stock Douglas-Peucker.
pub trait Simplifier {
	fn simplify(&self, vertices: &mut [ProtoVertex], first: usize, last: usize, sq_tolerance: f64);
}

/// The stock reducer: recursive Douglas-Peucker over squared distances.
///
/// Each retained pivot gets its squared perpendicular offset written as its
/// significance, so a downstream consumer can re-filter the buffer at any
/// coarser tolerance without running the reducer again.
#[derive(Clone, Copy, Debug, Default)]
pub struct DouglasPeucker;

impl Simplifier for DouglasPeucker {
	fn simplify(&self, vertices: &mut [ProtoVertex], first: usize, last: usize, sq_tolerance: f64) {
		if last <= first + 1 {
			return;
		}

		let mid = (first + last) / 2;
		let mut max_sq_dist = sq_tolerance;
		let mut min_pos_to_mid = last - first;
		let mut index = None;

		for i in first + 1..last {
			let sq_dist = sq_segment_dist(&vertices[i], &vertices[first], &vertices[last]);
			if sq_dist > max_sq_dist {
				index = Some(i);
				max_sq_dist = sq_dist;
			} else if sq_dist == max_sq_dist {
				// on ties, pick the pivot closest to the middle; keeps the
				// recursion depth bounded for degenerate inputs
				let pos_to_mid = i.abs_diff(mid);
				if pos_to_mid < min_pos_to_mid {
					index = Some(i);
					min_pos_to_mid = pos_to_mid;
				}
			}
		}

		if max_sq_dist <= sq_tolerance {
			return;
		}
		let Some(index) = index else { return };

		if index - first > 1 {
			self.simplify(vertices, first, index, sq_tolerance);
		}
		vertices[index].set_significance(max_sq_dist);
		if last - index > 1 {
			self.simplify(vertices, index, last, sq_tolerance);
		}
	}
}

/// Squared distance from `p` to the segment `a`-`b`.
fn sq_segment_dist(p: &ProtoVertex, a: &ProtoVertex, b: &ProtoVertex) -> f64 {
	let mut x = a.x();
	let mut y = a.y();
	let mut dx = b.x() - x;
	let mut dy = b.y() - y;

	if dx != 0.0 || dy != 0.0 {
		let t = ((p.x() - x) * dx + (p.y() - y) * dy) / (dx * dx + dy * dy);
		if t > 1.0 {
			x = b.x();
			y = b.y();
		} else if t > 0.0 {
			x += dx * t;
			y += dy * t;
		}
	}

	dx = p.x() - x;
	dy = p.y() - y;
	dx * dx + dy * dy
}
