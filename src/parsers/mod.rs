pub mod mcux;
pub mod types;

pub use mcux::McuXpresso;
pub use types::{ParseError, Parseable, Sample, Trace};
