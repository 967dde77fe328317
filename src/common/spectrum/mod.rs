mod data;
mod tables;

pub use tables::{ColorTables, COLOR_TABLES};

use crate::common::math::gamma_correct;
use num::Zero;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub};

pub const SPECTRAL_SAMPLES: usize = 60;
pub const LAMBDA_START: f32 = 400.0;
pub const LAMBDA_END: f32 = 700.0;

/// Whether an RGB triple describes surface reflectance or emitted light.
/// The two cases up-sample through different basis spectra.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpectrumType {
    Reflectance,
    Illuminant,
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct CoefficientSpectrum<const N: usize> {
    c: [f32; N],
}

impl<const N: usize> CoefficientSpectrum<N> {
    pub fn new(v: f32) -> Self {
        Self { c: [v; N] }
    }

    pub fn from_samples(c: [f32; N]) -> Self {
        Self { c }
    }

    pub fn num_samples(&self) -> usize {
        N
    }

    pub fn is_black(&self) -> bool {
        self.c.iter().all(|&v| v == 0.0)
    }

    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    pub fn clamp(&self, low: f32, high: f32) -> Self {
        let mut ret = *self;
        for v in &mut ret.c {
            *v = v.clamp(low, high);
        }
        ret
    }

    pub fn clamp_positive(&self) -> Self {
        self.clamp(0.0, f32::INFINITY)
    }

    pub fn max_component_value(&self) -> f32 {
        self.c.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b))
    }

    pub fn sqrt(&self) -> Self {
        let mut ret = *self;
        for v in &mut ret.c {
            *v = v.sqrt();
        }
        ret
    }

    fn sum(&self) -> f32 {
        self.c.iter().sum()
    }
}

impl<const N: usize> Index<usize> for CoefficientSpectrum<N> {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.c[i]
    }
}

impl<const N: usize> IndexMut<usize> for CoefficientSpectrum<N> {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.c[i]
    }
}

impl<const N: usize> Add for CoefficientSpectrum<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for i in 0..N {
            self.c[i] += rhs.c[i];
        }
        self
    }
}

impl<const N: usize> AddAssign for CoefficientSpectrum<N> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<const N: usize> Sub for CoefficientSpectrum<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        for i in 0..N {
            self.c[i] -= rhs.c[i];
        }
        self
    }
}

impl<const N: usize> Mul for CoefficientSpectrum<N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        for i in 0..N {
            self.c[i] *= rhs.c[i];
        }
        self
    }
}

impl<const N: usize> MulAssign for CoefficientSpectrum<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Mul<f32> for CoefficientSpectrum<N> {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self::Output {
        for v in &mut self.c {
            *v *= rhs;
        }
        self
    }
}

impl<const N: usize> MulAssign<f32> for CoefficientSpectrum<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Mul<CoefficientSpectrum<N>> for f32 {
    type Output = CoefficientSpectrum<N>;

    fn mul(self, rhs: CoefficientSpectrum<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Div for CoefficientSpectrum<N> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        for i in 0..N {
            self.c[i] /= rhs.c[i];
        }
        self
    }
}

impl<const N: usize> Div<f32> for CoefficientSpectrum<N> {
    type Output = Self;

    fn div(mut self, rhs: f32) -> Self::Output {
        for v in &mut self.c {
            *v /= rhs;
        }
        self
    }
}

impl<const N: usize> DivAssign<f32> for CoefficientSpectrum<N> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl<const N: usize> Zero for CoefficientSpectrum<N> {
    fn zero() -> Self {
        Self::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.is_black()
    }
}

/// Radiometric quantities sampled at uniform wavelength bins over
/// `[LAMBDA_START, LAMBDA_END]` nanometers.
pub type SampledSpectrum = CoefficientSpectrum<SPECTRAL_SAMPLES>;

/// Display-referred RGB triple.
pub type RgbSpectrum = CoefficientSpectrum<3>;

pub fn xyz_to_rgb(xyz: &[f32; 3]) -> [f32; 3] {
    [
        3.240479 * xyz[0] - 1.537150 * xyz[1] - 0.498535 * xyz[2],
        -0.969256 * xyz[0] + 1.875991 * xyz[1] + 0.041556 * xyz[2],
        0.055648 * xyz[0] - 0.204043 * xyz[1] + 1.057311 * xyz[2],
    ]
}

pub fn rgb_to_xyz(rgb: &[f32; 3]) -> [f32; 3] {
    [
        0.412453 * rgb[0] + 0.357580 * rgb[1] + 0.180423 * rgb[2],
        0.212671 * rgb[0] + 0.715160 * rgb[1] + 0.072169 * rgb[2],
        0.019334 * rgb[0] + 0.119193 * rgb[1] + 0.950227 * rgb[2],
    ]
}

impl SampledSpectrum {
    /// Up-samples an RGB triple to a full spectrum by blending the basis
    /// spectra for the given type, keyed on the ordering of the channels.
    pub fn from_rgb(rgb: &RgbSpectrum, ty: SpectrumType, tables: &ColorTables) -> Self {
        let (r, g, b) = (rgb[0], rgb[1], rgb[2]);
        let basis = match ty {
            SpectrumType::Reflectance => &tables.refl_basis,
            SpectrumType::Illuminant => &tables.illum_basis,
        };
        let mut ret = Self::new(0.0);

        if r <= g && r <= b {
            ret += r * basis.white;
            if g <= b {
                ret += (g - r) * basis.cyan;
                ret += (b - g) * basis.blue;
            } else {
                ret += (b - r) * basis.cyan;
                ret += (g - b) * basis.green;
            }
        } else if g <= r && g <= b {
            ret += g * basis.white;
            if r <= b {
                ret += (r - g) * basis.magenta;
                ret += (b - r) * basis.blue;
            } else {
                ret += (b - g) * basis.magenta;
                ret += (r - b) * basis.red;
            }
        } else {
            ret += b * basis.white;
            if r <= g {
                ret += (r - b) * basis.yellow;
                ret += (g - r) * basis.green;
            } else {
                ret += (g - b) * basis.yellow;
                ret += (r - g) * basis.red;
            }
        }

        ret.clamp_positive()
    }

    pub fn to_xyz(&self, tables: &ColorTables) -> [f32; 3] {
        let mut xyz = [0.0f32; 3];
        for i in 0..SPECTRAL_SAMPLES {
            xyz[0] += tables.x[i] * self.c[i];
            xyz[1] += tables.y[i] * self.c[i];
            xyz[2] += tables.z[i] * self.c[i];
        }
        let scale = (LAMBDA_END - LAMBDA_START) / (tables.y_integral * SPECTRAL_SAMPLES as f32);
        [xyz[0] * scale, xyz[1] * scale, xyz[2] * scale]
    }

    pub fn to_rgb(&self, tables: &ColorTables) -> RgbSpectrum {
        let rgb = xyz_to_rgb(&self.to_xyz(tables));
        RgbSpectrum::from_samples(rgb)
    }

    /// Luminance, the CIE-Y projection normalized by the curve integral.
    pub fn y(&self, tables: &ColorTables) -> f32 {
        let yy: f32 = (0..SPECTRAL_SAMPLES).map(|i| tables.y[i] * self.c[i]).sum();
        yy * (LAMBDA_END - LAMBDA_START) / (tables.y_integral * SPECTRAL_SAMPLES as f32)
    }
}

impl RgbSpectrum {
    pub fn from_floats(r: f32, g: f32, b: f32) -> Self {
        Self { c: [r, g, b] }
    }

    pub fn r(&self) -> f32 {
        self.c[0]
    }
    pub fn g(&self) -> f32 {
        self.c[1]
    }
    pub fn b(&self) -> f32 {
        self.c[2]
    }

    pub fn y(&self) -> f32 {
        const Y_WEIGHT: [f32; 3] = [0.212671, 0.715160, 0.072169];
        self.r() * Y_WEIGHT[0] + self.g() * Y_WEIGHT[1] + self.b() * Y_WEIGHT[2]
    }

    pub fn to_image_rgb(&self) -> image::Rgb<u8> {
        image::Rgb([
            (gamma_correct(self.r()) * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
            (gamma_correct(self.g()) * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
            (gamma_correct(self.b()) * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
        ])
    }
}
