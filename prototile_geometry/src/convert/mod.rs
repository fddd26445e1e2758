// The conversion core: projection, tolerance derivation, ring flattening and
// the feature-level driver.

#[allow(clippy::module_inception)]
mod convert;
mod flatten;
mod options;
mod project;
mod simplify;

pub use convert::*;
pub(crate) use flatten::*;
pub use options::*;
pub use project::*;
pub use simplify::*;
