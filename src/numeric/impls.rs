use super::scalar::Numeric;

// One macro per scalar kind so every impl of a kind stays identical in shape.
// Adding a type means adding one tuple to the invocations at the bottom.

macro_rules! signed_impl {
    ($(($t:ty, $abs:ty, $acc:ty)),+ $(,)?) => {
        $(
            impl Numeric for $t {
                type Abs = $abs;
                type Accumulate = $acc;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn abs(self) -> $abs {
                    // plain abs() would overflow on MIN
                    self.unsigned_abs()
                }

                fn widen(self) -> $acc {
                    self as $acc
                }
            }
        )+
    };
}

macro_rules! unsigned_impl {
    ($(($t:ty, $acc:ty)),+ $(,)?) => {
        $(
            impl Numeric for $t {
                type Abs = $t;
                type Accumulate = $acc;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn abs(self) -> $t {
                    self
                }

                fn widen(self) -> $acc {
                    self as $acc
                }

                // nothing below zero exists, so ordering against ZERO
                // collapses to (in)equality and the negative tests to
                // constants
                fn is_positive(self) -> bool {
                    self != Self::ZERO
                }

                fn is_nonpositive(self) -> bool {
                    self == Self::ZERO
                }

                fn is_negative(self) -> bool {
                    false
                }

                fn is_nonnegative(self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! float_impl {
    ($(($t:ty, $acc:ty)),+ $(,)?) => {
        $(
            impl Numeric for $t {
                type Abs = $t;
                type Accumulate = $acc;

                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn abs(self) -> $t {
                    self.abs()
                }

                fn widen(self) -> $acc {
                    self as $acc
                }

                // computed as an explicit negation of MAX instead of
                // inheriting the MIN default: float "minimum" constants are
                // not a trustworthy most-nonpositive value across platforms
                fn nonpositive_min() -> Self {
                    -Self::MAX
                }
            }
        )+
    };
}

signed_impl!(
    (i8, u8, i16),
    (i16, u16, i32),
    (i32, u32, i64),
    (i64, u64, i64),
);

unsigned_impl!((u8, u16), (u16, u32), (u32, u32), (u64, u64));

float_impl!((f32, f64), (f64, f64));

impl Numeric for bool {
    type Abs = u8;
    type Accumulate = u8;

    const ZERO: Self = false;
    const ONE: Self = true;
    const MIN: Self = false;
    const MAX: Self = true;

    fn abs(self) -> u8 {
        u8::from(self)
    }

    fn widen(self) -> u8 {
        u8::from(self)
    }

    fn is_positive(self) -> bool {
        self
    }

    fn is_nonpositive(self) -> bool {
        !self
    }

    fn is_negative(self) -> bool {
        false
    }

    fn is_nonnegative(self) -> bool {
        true
    }
}
