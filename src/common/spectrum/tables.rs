use super::data;
use super::{SampledSpectrum, LAMBDA_END, LAMBDA_START, SPECTRAL_SAMPLES};

/// The seven blending spectra used to up-sample one kind of RGB triple.
pub struct BasisSpectra {
    pub white: SampledSpectrum,
    pub cyan: SampledSpectrum,
    pub magenta: SampledSpectrum,
    pub yellow: SampledSpectrum,
    pub red: SampledSpectrum,
    pub green: SampledSpectrum,
    pub blue: SampledSpectrum,
}

/// Immutable colorimetric context: CIE matching curves resampled to the
/// renderer's wavelength bins, the luminance normalization integral, and the
/// RGB up-sampling bases. Construct one per process (see [`COLOR_TABLES`]) or
/// per test when isolation matters.
pub struct ColorTables {
    pub x: SampledSpectrum,
    pub y: SampledSpectrum,
    pub z: SampledSpectrum,
    pub y_integral: f32,
    pub refl_basis: BasisSpectra,
    pub illum_basis: BasisSpectra,
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Averages a piecewise-linear spectrum given by irregular `(lambda, vals)`
/// pairs over the range `[lambda_start, lambda_end]`. Values outside the
/// tabulated range clamp to the boundary samples.
pub fn average_spectrum_samples(
    lambda: &[f32],
    vals: &[f32],
    lambda_start: f32,
    lambda_end: f32,
) -> f32 {
    let n = lambda.len();
    debug_assert!(n == vals.len() && lambda_end > lambda_start);

    if lambda_end <= lambda[0] {
        return vals[0];
    }
    if lambda_start >= lambda[n - 1] {
        return vals[n - 1];
    }
    if n == 1 {
        return vals[0];
    }

    let mut sum = 0.0;
    if lambda_start < lambda[0] {
        sum += vals[0] * (lambda[0] - lambda_start);
    }
    if lambda_end > lambda[n - 1] {
        sum += vals[n - 1] * (lambda_end - lambda[n - 1]);
    }

    let mut i = 0;
    while lambda_start > lambda[i + 1] {
        i += 1;
    }

    let interp = |w: f32, i: usize| {
        lerp(
            (w - lambda[i]) / (lambda[i + 1] - lambda[i]),
            vals[i],
            vals[i + 1],
        )
    };
    while i + 1 < n && lambda_end >= lambda[i] {
        let seg_lambda_start = lambda_start.max(lambda[i]);
        let seg_lambda_end = lambda_end.min(lambda[i + 1]);
        sum += 0.5
            * (interp(seg_lambda_start, i) + interp(seg_lambda_end, i))
            * (seg_lambda_end - seg_lambda_start);
        i += 1;
    }

    sum / (lambda_end - lambda_start)
}

fn resample_cie(vals: &[f32]) -> SampledSpectrum {
    let mut out = SampledSpectrum::new(0.0);
    for i in 0..SPECTRAL_SAMPLES {
        let wl0 = lerp(
            i as f32 / SPECTRAL_SAMPLES as f32,
            LAMBDA_START,
            LAMBDA_END,
        );
        let wl1 = lerp(
            (i + 1) as f32 / SPECTRAL_SAMPLES as f32,
            LAMBDA_START,
            LAMBDA_END,
        );
        out[i] = average_spectrum_samples(&data::CIE_LAMBDA, vals, wl0, wl1);
    }
    out
}

impl ColorTables {
    pub fn new() -> Self {
        let x = resample_cie(&data::CIE_X);
        let y = resample_cie(&data::CIE_Y);
        let z = resample_cie(&data::CIE_Z);
        // normalizing by the resampled curve keeps y(flat unit spectrum) == 1
        let y_integral = y.sum() * (LAMBDA_END - LAMBDA_START) / SPECTRAL_SAMPLES as f32;

        Self {
            x,
            y,
            z,
            y_integral,
            refl_basis: BasisSpectra {
                white: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_WHITE),
                cyan: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_CYAN),
                magenta: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_MAGENTA),
                yellow: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_YELLOW),
                red: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_RED),
                green: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_GREEN),
                blue: SampledSpectrum::from_samples(data::RGB_REFL2_SPECT_BLUE),
            },
            illum_basis: BasisSpectra {
                white: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_WHITE),
                cyan: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_CYAN),
                magenta: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_MAGENTA),
                yellow: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_YELLOW),
                red: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_RED),
                green: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_GREEN),
                blue: SampledSpectrum::from_samples(data::RGB_ILLUM2_SPECT_BLUE),
            },
        }
    }
}

impl Default for ColorTables {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref COLOR_TABLES: ColorTables = ColorTables::new();
}
