use num::{
    cast::{FromPrimitive, ToPrimitive},
    traits::{Bounded, Float, Num},
};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the math containers.
pub trait ValueType:
    Num
    + Mini
    + Maxi
    + Bounded
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
}

pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where
    T: Num
        + Mini
        + Maxi
        + Bounded
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
{
}
impl<T> FloatValueType for T where T: ValueType + Float {}

/// Maps to number types that implement `fn min(self, other)`.
///
/// For floats this is the IEEE minNum, which returns the non-NaN operand when
/// the other one is NaN. The slab test in [`super::Bounds3`] relies on that.
pub trait Mini {
    fn mini(self, other: Self) -> Self;
}

/// Maps to number types that implement `fn max(self, other)`.
pub trait Maxi {
    fn maxi(self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(self, other: $t) -> $t {
                    self.min(other)
                }
            }

            impl Maxi for $t {
                fn maxi(self, other: $t) -> $t {
                    self.max(other)
                }
            }
        )*
    }
}
impl_mini_maxi_float!(f32, f64);

macro_rules! impl_mini_maxi_integer {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                fn mini(self, other: $t) -> $t {
                    std::cmp::Ord::min(self, other)
                }
            }

            impl Maxi for $t {
                fn maxi(self, other: $t) -> $t {
                    std::cmp::Ord::max(self, other)
                }
            }
        )*
    }
}
impl_mini_maxi_integer!(u8, u16, u32, u64, i8, i16, i32, i64);
