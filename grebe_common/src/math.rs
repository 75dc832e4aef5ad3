/// Types with a conventional three-way sign.
pub trait Signable: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
}

macro_rules! def_signable {
    ($($type: ty),*: $zero: expr, $one: expr, $neg_one: expr) => {
        $(
            impl Signable for $type {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
                const NEG_ONE: Self = $neg_one;
            }
        )*
    }
}

def_signable!(i8, i16, i32, i64, i128, isize: 0, 1, -1);
def_signable!(f32, f64: 0.0, 1.0, -1.0);

/// Returns -1, 0 or 1 as `x` is negative, zero or positive.
/// NaN and both float zeroes map to 0.
pub fn sign<T: Signable>(x: T) -> T {
    if x < T::ZERO {
        T::NEG_ONE
    } else if x > T::ZERO {
        T::ONE
    } else {
        T::ZERO
    }
}
