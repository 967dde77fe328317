use super::{bsdf::Bsdf, bxdf::LambertianReflection, interaction::SurfaceInteraction};
use crate::common::spectrum::SampledSpectrum;

pub trait MaterialInterface {
    fn compute_scattering_functions(&self, si: &mut SurfaceInteraction);
}

pub trait SyncMaterial: MaterialInterface + Send + Sync {}
impl<T> SyncMaterial for T where T: MaterialInterface + Send + Sync {}

pub struct MatteMaterial {
    kd: SampledSpectrum,
    log: slog::Logger,
}

impl MatteMaterial {
    pub fn new(log: &slog::Logger, kd: SampledSpectrum) -> Self {
        let log = log.new(o!());
        Self { kd, log }
    }
}

impl MaterialInterface for MatteMaterial {
    fn compute_scattering_functions(&self, si: &mut SurfaceInteraction) {
        let mut bsdf = Bsdf::new(&self.log, si);
        bsdf.add(Box::new(LambertianReflection::new(self.kd)));

        si.bsdf = Some(bsdf);
    }
}
