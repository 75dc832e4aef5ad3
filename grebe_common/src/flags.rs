use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Field-less enums whose variants are single bits. Only implement this
/// through `impl_enum_flags!`: the `as` cast it relies on does not compile
/// for any other kind of type.
pub trait Enum_Flag: Copy {
    type Repr: Copy
        + Default
        + PartialEq
        + BitAnd<Output = Self::Repr>
        + BitOr<Output = Self::Repr>
        + BitXor<Output = Self::Repr>
        + Not<Output = Self::Repr>;

    fn to_raw(self) -> Self::Repr;
}

/// A combination of variants of the flag enum `E`. Bits no variant names
/// (a complement usually has some) are kept verbatim.
pub struct Flag_Set<E: Enum_Flag> {
    raw: E::Repr,
}

impl<E: Enum_Flag> Flag_Set<E> {
    pub fn empty() -> Self {
        Self {
            raw: E::Repr::default(),
        }
    }

    pub fn from_raw(raw: E::Repr) -> Self {
        Self { raw }
    }

    pub fn raw(self) -> E::Repr {
        self.raw
    }

    pub fn has(self, flag: E) -> bool {
        (self.raw & flag.to_raw()) != E::Repr::default()
    }

    pub fn without(self, flag: E) -> Self {
        Self {
            raw: self.raw & !flag.to_raw(),
        }
    }

    pub fn is_empty(self) -> bool {
        self.raw == E::Repr::default()
    }
}

// The derives would put bounds on `E` rather than on `E::Repr`, so these are
// spelled out by hand.
impl<E: Enum_Flag> Copy for Flag_Set<E> {}

impl<E: Enum_Flag> Clone for Flag_Set<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Enum_Flag> Default for Flag_Set<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: Enum_Flag> PartialEq for Flag_Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: Enum_Flag> Eq for Flag_Set<E> {}

impl<E: Enum_Flag> PartialEq<E> for Flag_Set<E> {
    fn eq(&self, flag: &E) -> bool {
        self.raw == flag.to_raw()
    }
}

impl<E: Enum_Flag> From<E> for Flag_Set<E> {
    fn from(flag: E) -> Self {
        Self::from_raw(flag.to_raw())
    }
}

impl<E: Enum_Flag> fmt::Debug for Flag_Set<E>
where
    E::Repr: fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Flag_Set({:#b})", self.raw)
    }
}

macro_rules! impl_flag_set_op {
    ($op_trait: ident, $op_fn: ident, $assign_trait: ident, $assign_fn: ident) => {
        impl<E: Enum_Flag> $op_trait for Flag_Set<E> {
            type Output = Self;

            fn $op_fn(self, rhs: Self) -> Self {
                Self::from_raw(self.raw.$op_fn(rhs.raw))
            }
        }

        impl<E: Enum_Flag> $op_trait<E> for Flag_Set<E> {
            type Output = Self;

            fn $op_fn(self, flag: E) -> Self {
                Self::from_raw(self.raw.$op_fn(flag.to_raw()))
            }
        }

        impl<E: Enum_Flag> $assign_trait for Flag_Set<E> {
            fn $assign_fn(&mut self, rhs: Self) {
                self.raw = self.raw.$op_fn(rhs.raw);
            }
        }

        impl<E: Enum_Flag> $assign_trait<E> for Flag_Set<E> {
            fn $assign_fn(&mut self, flag: E) {
                self.raw = self.raw.$op_fn(flag.to_raw());
            }
        }
    };
}

impl_flag_set_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_flag_set_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_flag_set_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<E: Enum_Flag> Not for Flag_Set<E> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_raw(!self.raw)
    }
}

/// Implements `Enum_Flag` and the bitwise operators for a field-less enum
/// with the given integer representation, so its variants combine directly.
#[macro_export]
macro_rules! impl_enum_flags {
    ($enum_ty: ty, $repr: ty) => {
        impl $crate::flags::Enum_Flag for $enum_ty {
            type Repr = $repr;

            fn to_raw(self) -> $repr {
                self as $repr
            }
        }

        impl std::ops::BitOr for $enum_ty {
            type Output = $crate::flags::Flag_Set<$enum_ty>;

            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::flags::Flag_Set::from_raw((self as $repr) | (rhs as $repr))
            }
        }

        impl std::ops::BitAnd for $enum_ty {
            type Output = $crate::flags::Flag_Set<$enum_ty>;

            fn bitand(self, rhs: Self) -> Self::Output {
                $crate::flags::Flag_Set::from_raw((self as $repr) & (rhs as $repr))
            }
        }

        impl std::ops::BitXor for $enum_ty {
            type Output = $crate::flags::Flag_Set<$enum_ty>;

            fn bitxor(self, rhs: Self) -> Self::Output {
                $crate::flags::Flag_Set::from_raw((self as $repr) ^ (rhs as $repr))
            }
        }

        impl std::ops::Not for $enum_ty {
            type Output = $crate::flags::Flag_Set<$enum_ty>;

            fn not(self) -> Self::Output {
                $crate::flags::Flag_Set::from_raw(!(self as $repr))
            }
        }
    };
}
