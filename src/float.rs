//! Floating point type selection that enables switching between f64 and
//! f32 as the primary float type.

#[cfg(not(feature = "single_precision"))]
pub type Float = f64;
#[cfg(feature = "single_precision")]
pub type Float = f32;

pub trait ToFloat {
    fn to_float(self) -> Float;
}

impl ToFloat for f32 {
    #[allow(clippy::useless_conversion)]
    fn to_float(self) -> Float {
        self.into()
    }
}

impl ToFloat for f64 {
    #[allow(clippy::unnecessary_cast)]
    fn to_float(self) -> Float {
        self as Float
    }
}
