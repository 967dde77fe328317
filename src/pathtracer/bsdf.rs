use super::{
    bxdf::{BxDFInterface, BxDFType},
    interaction::SurfaceInteraction,
};
use crate::common::math::coordinate_system;
use crate::common::spectrum::SampledSpectrum;

/// Collection of scattering functions at a surface point, together with the
/// orthonormal shading frame used to move directions in and out of the
/// local +z-up space the BxDFs work in.
pub struct Bsdf {
    ns: na::Vector3<f32>,
    ng: na::Vector3<f32>,
    ss: na::Vector3<f32>,
    ts: na::Vector3<f32>,
    bxdfs: Vec<Box<dyn BxDFInterface>>,
    log: slog::Logger,
}

impl Bsdf {
    pub fn new(log: &slog::Logger, si: &SurfaceInteraction) -> Self {
        let log = log.new(o!());
        let ns = si.shading.n;
        let mut ss = glm::zero();
        let mut ts = glm::zero();
        coordinate_system(&ns, &mut ss, &mut ts);
        Self {
            ns,
            ng: si.general.n,
            ss,
            ts,
            bxdfs: Vec::new(),
            log,
        }
    }

    pub fn add(&mut self, b: Box<dyn BxDFInterface>) {
        self.bxdfs.push(b);
    }

    pub fn num_components(&self, flags: BxDFType) -> usize {
        self.bxdfs.iter().filter(|b| b.matches_flags(flags)).count()
    }

    pub fn world_to_local(&self, v: &na::Vector3<f32>) -> na::Vector3<f32> {
        na::Vector3::new(v.dot(&self.ss), v.dot(&self.ts), v.dot(&self.ns))
    }

    pub fn local_to_world(&self, v: &na::Vector3<f32>) -> na::Vector3<f32> {
        na::Vector3::new(
            self.ss.x * v.x + self.ts.x * v.y + self.ns.x * v.z,
            self.ss.y * v.x + self.ts.y * v.y + self.ns.y * v.z,
            self.ss.z * v.x + self.ts.z * v.y + self.ns.z * v.z,
        )
    }

    pub fn sample_f(
        &self,
        wo_world: &na::Vector3<f32>,
        wi_world: &mut na::Vector3<f32>,
        u: &na::Point2<f32>,
        pdf: &mut f32,
        bxdf_type: BxDFType,
        sampled_type: &mut Option<BxDFType>,
    ) -> SampledSpectrum {
        let matching_comps = self.num_components(bxdf_type);
        if matching_comps == 0 {
            *pdf = 0.0;
            if let Some(sampled_type) = sampled_type {
                *sampled_type = BxDFType::empty();
            }
            return SampledSpectrum::new(0.0);
        }
        let comp = ((u[0] * matching_comps as f32).floor() as usize).min(matching_comps - 1);
        let (chosen_index, bxdf) = match self
            .bxdfs
            .iter()
            .enumerate()
            .filter(|(_, b)| b.matches_flags(bxdf_type))
            .nth(comp)
        {
            Some((i, bxdf)) => (i, bxdf),
            None => {
                *pdf = 0.0;
                return SampledSpectrum::new(0.0);
            }
        };

        let u_remapped = na::Point2::new((u[0] * matching_comps as f32) - comp as f32, u[1]);
        let mut wi = glm::zero();
        let wo = self.world_to_local(wo_world);
        *pdf = 0.0;

        if let Some(sampled_type) = sampled_type {
            *sampled_type = bxdf.get_type();
        }

        let mut f = bxdf.sample_f(&wo, &mut wi, &u_remapped, pdf, sampled_type);
        trace!(self.log, "sampled local wi: {:?}, pdf: {:?}", wi, pdf);

        if *pdf == 0.0 {
            if let Some(sampled_type) = sampled_type {
                *sampled_type = BxDFType::empty();
            }
            return SampledSpectrum::new(0.0);
        }

        *wi_world = self.local_to_world(&wi);

        if !bxdf.get_type().contains(BxDFType::BSDF_SPECULAR) && matching_comps > 1 {
            for (i, curr_bxdf) in self.bxdfs.iter().enumerate() {
                if i != chosen_index && curr_bxdf.matches_flags(bxdf_type) {
                    *pdf += curr_bxdf.pdf(&wo, &wi);
                }
            }
        }
        if matching_comps > 1 {
            *pdf /= matching_comps as f32;
        }

        if !bxdf.get_type().contains(BxDFType::BSDF_SPECULAR) && matching_comps > 1 {
            let reflect = wi_world.dot(&self.ng) * wo_world.dot(&self.ng) > 0.0;
            f = SampledSpectrum::new(0.0);
            for curr_bxdf in &self.bxdfs {
                if curr_bxdf.matches_flags(bxdf_type)
                    && ((reflect && curr_bxdf.get_type().contains(BxDFType::BSDF_REFLECTION))
                        || (!reflect
                            && curr_bxdf.get_type().contains(BxDFType::BSDF_TRANSMISSION)))
                {
                    f += curr_bxdf.f(&wo, &wi);
                }
            }
        }

        f
    }

    pub fn f(
        &self,
        wo_w: &na::Vector3<f32>,
        wi_w: &na::Vector3<f32>,
        flags: BxDFType,
    ) -> SampledSpectrum {
        let wi = self.world_to_local(wi_w);
        let wo = self.world_to_local(wo_w);
        if wo.z == 0.0 {
            return SampledSpectrum::new(0.0);
        }
        let reflect = wi_w.dot(&self.ng) * wo_w.dot(&self.ng) > 0.0;

        let mut f = SampledSpectrum::new(0.0);
        for bxdf in &self.bxdfs {
            if bxdf.matches_flags(flags)
                && ((reflect && bxdf.get_type().contains(BxDFType::BSDF_REFLECTION))
                    || (!reflect && bxdf.get_type().contains(BxDFType::BSDF_TRANSMISSION)))
            {
                f += bxdf.f(&wo, &wi);
            }
        }

        f
    }

    pub fn pdf(
        &self,
        wo_world: &na::Vector3<f32>,
        wi_world: &na::Vector3<f32>,
        flags: BxDFType,
    ) -> f32 {
        if self.bxdfs.is_empty() {
            return 0.0;
        }

        let wo = self.world_to_local(wo_world);
        let wi = self.world_to_local(wi_world);

        if wo.z == 0.0 {
            return 0.0;
        }

        let mut pdf = 0.0;
        let mut matching_comps = 0;

        for bxdf in &self.bxdfs {
            if bxdf.matches_flags(flags) {
                matching_comps += 1;
                pdf += bxdf.pdf(&wo, &wi);
            }
        }

        if matching_comps > 0 {
            pdf / matching_comps as f32
        } else {
            0.0
        }
    }
}
