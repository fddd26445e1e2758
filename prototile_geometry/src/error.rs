use thiserror::Error;

/// Failure conditions of the conversion core.
///
/// Every failure is an input-validity error; there is nothing transient to
/// retry. Errors travel through `anyhow::Result` and can be recovered with
/// `Error::downcast_ref::<ConvertError>()`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
	/// The geometry kind is not in the recognized set. Fatal to the whole
	/// conversion call.
	#[error("unsupported geometry kind '{0}'")]
	UnsupportedGeometry(String),

	/// The geometry is structurally broken: a non-finite coordinate, a line
	/// with fewer than two points, an open or undersized ring.
	#[error("malformed geometry: {0}")]
	MalformedGeometry(String),

	/// The conversion options are out of range.
	#[error("invalid options: {0}")]
	InvalidOptions(String),
}
