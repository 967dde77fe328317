use super::sampling::cosine_sample_hemisphere;
use crate::common::spectrum::SampledSpectrum;
use std::f32::consts::FRAC_1_PI;

pub fn cos_theta(w: &na::Vector3<f32>) -> f32 {
    w.z
}

pub fn abs_cos_theta(w: &na::Vector3<f32>) -> f32 {
    w.z.abs()
}

pub fn same_hemisphere(w: &na::Vector3<f32>, wp: &na::Vector3<f32>) -> bool {
    w.z * wp.z > 0.0
}

bitflags! {
    pub struct BxDFType: u32 {
        const BSDF_REFLECTION = 1 << 0;
        const BSDF_TRANSMISSION = 1 << 1;
        const BSDF_DIFFUSE = 1 << 2;
        const BSDF_GLOSSY = 1 << 3;
        const BSDF_SPECULAR = 1 << 4;
        const BSDF_ALL = Self::BSDF_DIFFUSE.bits | Self::BSDF_GLOSSY.bits | Self::BSDF_SPECULAR.bits | Self::BSDF_REFLECTION.bits |
        Self::BSDF_TRANSMISSION.bits;
    }
}

/// Directions are in the local shading frame with the normal along +z.
pub trait BxDFInterface: Send + Sync {
    fn f(&self, wo: &na::Vector3<f32>, wi: &na::Vector3<f32>) -> SampledSpectrum;

    fn sample_f(
        &self,
        wo: &na::Vector3<f32>,
        wi: &mut na::Vector3<f32>,
        u: &na::Point2<f32>,
        pdf: &mut f32,
        _sampled_type: &mut Option<BxDFType>,
    ) -> SampledSpectrum {
        *wi = cosine_sample_hemisphere(u);
        if wo.z < 0.0 {
            wi.z *= -1.0;
        }

        *pdf = self.pdf(wo, wi);
        self.f(wo, wi)
    }

    fn matches_flags(&self, t: BxDFType) -> bool {
        (self.get_type() & t) == self.get_type()
    }

    fn get_type(&self) -> BxDFType;

    fn pdf(&self, wo: &na::Vector3<f32>, wi: &na::Vector3<f32>) -> f32 {
        if same_hemisphere(wo, wi) {
            abs_cos_theta(wi) * FRAC_1_PI
        } else {
            0.0
        }
    }
}

pub struct LambertianReflection {
    r: SampledSpectrum,
}

impl LambertianReflection {
    pub fn new(r: SampledSpectrum) -> Self {
        Self { r }
    }
}

impl BxDFInterface for LambertianReflection {
    fn f(&self, _wo: &na::Vector3<f32>, _wi: &na::Vector3<f32>) -> SampledSpectrum {
        self.r * FRAC_1_PI
    }

    fn get_type(&self) -> BxDFType {
        BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambertian_f_is_r_over_pi() {
        let lambertian = LambertianReflection::new(SampledSpectrum::new(0.5));
        let wo = na::Vector3::new(0.0, 0.0, 1.0);
        let wi = na::Vector3::new(0.0, 0.0, 1.0);

        let f = lambertian.f(&wo, &wi);
        approx::assert_relative_eq!(f[0], 0.5 * FRAC_1_PI);
    }

    #[test]
    fn test_pdf_zero_across_hemispheres() {
        let lambertian = LambertianReflection::new(SampledSpectrum::new(0.5));
        let wo = na::Vector3::new(0.0, 0.0, 1.0);
        let below = na::Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(lambertian.pdf(&wo, &below), 0.0);
    }

    #[test]
    fn test_sample_f_stays_in_wo_hemisphere() {
        let lambertian = LambertianReflection::new(SampledSpectrum::new(0.5));
        let wo = na::Vector3::new(0.1, 0.2, -0.97);
        let mut wi = glm::zero();
        let mut pdf = 0.0;
        lambertian.sample_f(
            &wo,
            &mut wi,
            &na::Point2::new(0.3, 0.7),
            &mut pdf,
            &mut None,
        );

        assert!(same_hemisphere(&wo, &wi));
        assert!(pdf > 0.0);
        approx::assert_relative_eq!(pdf, abs_cos_theta(&wi) * FRAC_1_PI);
    }

    #[test]
    fn test_matches_flags() {
        let lambertian = LambertianReflection::new(SampledSpectrum::new(0.5));
        assert!(lambertian.matches_flags(BxDFType::BSDF_ALL));
        assert!(lambertian.matches_flags(BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE));
        assert!(!lambertian.matches_flags(BxDFType::BSDF_SPECULAR));
    }
}
