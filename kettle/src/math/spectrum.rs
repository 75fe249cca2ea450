use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

/// An RGB radiance or attenuation triple in linear space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Spectrum {
    /// Constructs a new `Spectrum`.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        let c = Self { r, g, b };
        debug_assert!(!c.has_nans());
        c
    }

    /// Constructs a black `Spectrum`.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }

    /// Constructs a white `Spectrum`.
    #[inline]
    pub fn ones() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }

    /// Returns `true` if any channel is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns `true` if every channel is zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns the channel-wise square root, i.e. gamma 2 encoding.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self::new(self.r.sqrt(), self.g.sqrt(), self.b.sqrt())
    }

    /// Returns the channel-wise clamp to `[lo, hi]`.
    #[inline]
    pub fn clamped(&self, lo: f32, hi: f32) -> Self {
        Self::new(
            self.r.clamp(lo, hi),
            self.g.clamp(lo, hi),
            self.b.clamp(lo, hi),
        )
    }

    /// Linearly interpolates toward `other`, `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        *self * (1.0 - t) + other * t
    }
}

impl Add for Spectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Spectrum {
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl Mul for Spectrum {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for Spectrum {
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl Mul<f32> for Spectrum {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Div<f32> for Spectrum {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self::new(self.r / s, self.g / s, self.b / s)
    }
}

impl AbsDiffEq for Spectrum {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.r, &other.r, epsilon)
            && f32::abs_diff_eq(&self.g, &other.g, epsilon)
            && f32::abs_diff_eq(&self.b, &other.b, epsilon)
    }
}

impl RelativeEq for Spectrum {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.r, &other.r, epsilon, max_relative)
            && f32::relative_eq(&self.g, &other.g, epsilon, max_relative)
            && f32::relative_eq(&self.b, &other.b, epsilon, max_relative)
    }
}
