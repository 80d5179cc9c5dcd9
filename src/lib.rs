//! Numeric trait bundles for generic array and image pipelines.
//!
//! Every supported primitive scalar type gets one [`Numeric`] impl carrying
//! its identities, bounds, widened accumulator type and sign predicates, so
//! that generic algorithms can be written once per algorithm rather than once
//! per pixel/sample type. Dispatch is resolved entirely at compile time; an
//! unsupported scalar type is a build error, never a runtime fallback.

pub mod numeric;
pub mod stats;

pub use numeric::*;
