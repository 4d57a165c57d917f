use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

pub type IntegerType = i16;

pub trait Ring:
    Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + PartialEq
    + From<IntegerType>
    + Clone
    + Sized
{
    #[must_use]
    fn ring_zero() -> Self {
        0.into()
    }

    #[must_use]
    fn ring_one() -> Self {
        1.into()
    }
}

impl Ring for i16 {}
impl Ring for i32 {}
impl Ring for i64 {}
impl Ring for f32 {}
impl Ring for f64 {}

pub trait Field: Ring + Div<Output = Self> {
    /// zero has no inverse, everything else divides into one
    #[must_use]
    fn try_inverse(self) -> Option<Self> {
        if self == Self::ring_zero() {
            None
        } else {
            Some(Self::ring_one() / self)
        }
    }
}

impl Field for f32 {}
impl Field for f64 {}

mod test {

    #[test]
    fn inverses() {
        use super::Field;
        assert_eq!(2.0_f64.try_inverse(), Some(0.5));
        assert_eq!(0.0_f64.try_inverse(), None);
        assert_eq!(0.25_f32.try_inverse(), Some(4.0));
    }

    #[test]
    fn ring_constants() {
        use super::Ring;
        assert_eq!(i64::ring_zero(), 0);
        assert_eq!(i64::ring_one(), 1);
        assert_eq!(f64::ring_one(), 1.0);
    }
}
