use std::f64::consts::PI;

/// Maps a longitude in degrees onto the normalized plane: [-180, 180] lands
/// in [0, 1]. Values outside that range pass through linearly and fold over
/// outside the unit square.
#[must_use]
pub fn project_x(lng: f64) -> f64 {
	lng / 360.0 + 0.5
}

/// Maps a latitude in degrees onto the normalized plane with a spherical
/// Mercator transform. The result is clamped to [0, 1], so polar latitudes
/// land exactly on the plane edges instead of diverging.
#[must_use]
pub fn project_y(lat: f64) -> f64 {
	let sin = (lat * PI / 180.0).sin();
	let y = 0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI;
	y.clamp(0.0, 1.0)
}
