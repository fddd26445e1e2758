pub mod convert;
mod error;
mod geo;
mod proto;

pub use convert::*;
pub use error::*;
pub use geo::*;
pub use proto::*;
