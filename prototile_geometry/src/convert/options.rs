use crate::ConvertError;

/// Parameters of one conversion pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
	/// Zoom level at which detail must be fully preserved.
	pub max_zoom: u8,
	/// Linear simplification tolerance in normalized-plane units before
	/// zoom/extent scaling. Zero keeps every vertex significant.
	pub tolerance: f64,
	/// Target tile pixel extent used to scale the tolerance.
	pub extent: u32,
	/// Explode multi-lines into single lines so each part carries its own
	/// start/end distance offsets.
	pub line_metrics: bool,
	/// Property key to promote to the feature id when the feature itself
	/// carries none.
	pub promote_id: Option<String>,
	/// Fall back to the feature's position in the collection as its id.
	pub generate_id: bool,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			max_zoom: 14,
			tolerance: 3.0,
			extent: 4096,
			line_metrics: false,
			promote_id: None,
			generate_id: false,
		}
	}
}

impl ConvertOptions {
	pub fn validate(&self) -> Result<(), ConvertError> {
		if self.extent == 0 {
			return Err(ConvertError::InvalidOptions("extent must be positive".to_string()));
		}
		if self.max_zoom > 24 {
			return Err(ConvertError::InvalidOptions(format!(
				"max_zoom must be at most 24, got {}",
				self.max_zoom
			)));
		}
		if !self.tolerance.is_finite() || self.tolerance < 0.0 {
			return Err(ConvertError::InvalidOptions(format!(
				"tolerance must be a non-negative finite number, got {}",
				self.tolerance
			)));
		}
		Ok(())
	}

	/// The squared simplification tolerance in normalized-plane units:
	/// how many source units one pixel covers at the finest zoom level,
	/// squared. Squared because the simplifier compares squared distances,
	/// saving a square root per candidate vertex.
	#[must_use]
	pub fn squared_tolerance(&self) -> f64 {
		let scale = 2f64.powi(i32::from(self.max_zoom)) * f64::from(self.extent);
		(self.tolerance / scale).powi(2)
	}
}
