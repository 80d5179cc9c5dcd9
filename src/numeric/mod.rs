mod impls;
mod scalar;

pub use scalar::*;
