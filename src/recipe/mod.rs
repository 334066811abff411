pub mod conversion;
pub mod definition;
pub(crate) mod visit;

pub use conversion::*;
pub use definition::*;
