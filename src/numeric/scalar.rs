pub use num::{One, Zero};

use num::traits::NumAssignOps;
use num::{Num, ToPrimitive};
use std::cmp::PartialOrd;
use std::fmt::Debug;

/// The per-type fact bundle for a primitive scalar type.
///
/// One impl exists per supported type (`bool`, the 8/16/32/64-bit integers,
/// `f32` and `f64`); see the macros in `impls`. Everything here is either a
/// literal constant or a branch-free function of its single argument, so a
/// generic algorithm instantiated at `T` compiles down to the same code a
/// hand-written per-type version would.
///
/// The sign predicates are written once against [`Numeric::ZERO`] and only
/// overridden where the default is wrong or needlessly ordered (unsigned
/// types have nothing below zero to order against).
pub trait Numeric: Copy + Clone + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Unsigned (or floating) type wide enough to hold `|v|` for every `v`.
    type Abs: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static;

    /// Wider type for running sums and products of many values.
    ///
    /// Guaranteed to hold at least twice the full value range of `Self`, so
    /// accumulating does not overflow where the element type would.
    type Accumulate: Copy
        + PartialOrd
        + Debug
        + Num
        + NumAssignOps
        + ToPrimitive
        + Send
        + Sync
        + 'static;

    /// Additive identity, as a literal of `Self`.
    const ZERO: Self;

    /// Multiplicative identity, as a literal of `Self`.
    const ONE: Self;

    /// Smallest representable value, straight from the platform limits.
    const MIN: Self;

    /// Largest representable value, straight from the platform limits.
    const MAX: Self;

    /// The magnitude of `self`, in a type that cannot overflow on `MIN`.
    fn abs(self) -> Self::Abs;

    /// `self` converted losslessly into the accumulator type.
    fn widen(self) -> Self::Accumulate;

    /// The most nonpositive usable value.
    ///
    /// Defaults to [`Numeric::MIN`]; floating-point impls override this with
    /// `-MAX` rather than trusting the raw minimum constant.
    fn nonpositive_min() -> Self {
        Self::MIN
    }

    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    fn is_nonpositive(self) -> bool {
        self <= Self::ZERO
    }

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    fn is_nonnegative(self) -> bool {
        self >= Self::ZERO
    }
}
