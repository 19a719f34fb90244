use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A complex number in rectangular form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T> {
    re: T,
    im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Copy> Complex<T> {
    pub const fn real(&self) -> T {
        self.re
    }

    pub const fn imag(&self) -> T {
        self.im
    }
}

impl<T: Copy + Neg<Output = T>> Complex<T> {
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Complex<T> {
    /// Squared magnitude.
    pub fn norm(self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl Complex<f32> {
    /// Exact widening; every `f32` is representable as an `f64`.
    pub const fn widen(self) -> Complex<f64> {
        Complex::new(self.re as f64, self.im as f64)
    }
}

impl From<Complex<f32>> for Complex<f64> {
    fn from(z: Complex<f32>) -> Self {
        z.widen()
    }
}

impl<T> From<T> for Complex<T>
where
    T: Default,
{
    fn from(re: T) -> Self {
        Self::new(re, T::default())
    }
}

impl<T: Add<Output = T>> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Sub<Output = T>> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T> Mul for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

/// `z += x` adds to the real part only.
impl<T: AddAssign> AddAssign<T> for Complex<T> {
    fn add_assign(&mut self, rhs: T) {
        self.re += rhs;
    }
}

impl<T: AddAssign> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<T: SubAssign> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}
