use super::{interaction::Interaction, RenderScene};
use crate::common::{bounds::Bounds3, spectrum::SampledSpectrum};

bitflags! {
    pub struct LightFlags: u32 {
        const DELTA_POSITION = 1;
        const DELTA_DIRECTION = 2;
        const AREA = 4;
        const INFINITE = 8;
    }
}

pub fn is_delta_light(flags: &LightFlags) -> bool {
    flags.contains(LightFlags::DELTA_DIRECTION) || flags.contains(LightFlags::DELTA_POSITION)
}

pub struct VisibilityTester {
    p0: Interaction,
    p1: Interaction,
}

impl VisibilityTester {
    pub fn unoccluded(&self, scene: &RenderScene) -> bool {
        !scene.intersect_p(&self.p0.spawn_ray_to(&self.p1.p))
    }
}

pub trait Light {
    fn sample_li(
        &self,
        reference: &Interaction,
        u: &na::Point2<f32>,
        wi: &mut na::Vector3<f32>,
        pdf: &mut f32,
        vis: &mut Option<VisibilityTester>,
    ) -> SampledSpectrum;

    fn power(&self) -> SampledSpectrum;

    fn pdf_li(&self, reference: &Interaction, wi: &na::Vector3<f32>) -> f32;

    fn flags(&self) -> LightFlags;

    fn preprocess(&mut self, _world_bound: &Bounds3) {}
}

pub trait SyncLight: Light + Send + Sync {}
impl<T> SyncLight for T where T: Light + Send + Sync {}

pub struct PointLight {
    flags: LightFlags,
    p_light: na::Point3<f32>,
    #[allow(non_snake_case)]
    I: SampledSpectrum,
}

impl PointLight {
    #[allow(non_snake_case)]
    pub fn new(light_to_world: &na::Projective3<f32>, I: SampledSpectrum) -> Self {
        Self {
            flags: LightFlags::DELTA_POSITION,
            p_light: light_to_world * na::Point3::origin(),
            I,
        }
    }
}

impl Light for PointLight {
    fn sample_li(
        &self,
        reference: &Interaction,
        _u: &na::Point2<f32>,
        wi: &mut na::Vector3<f32>,
        pdf: &mut f32,
        vis: &mut Option<VisibilityTester>,
    ) -> SampledSpectrum {
        *wi = (self.p_light - reference.p).normalize();
        *pdf = 1.0;
        *vis = Some(VisibilityTester {
            p0: *reference,
            p1: Interaction {
                p: self.p_light,
                ..Default::default()
            },
        });

        self.I / (self.p_light - reference.p).norm_squared()
    }

    fn power(&self) -> SampledSpectrum {
        4.0 * std::f32::consts::PI * self.I
    }

    fn pdf_li(&self, _reference: &Interaction, _wi: &na::Vector3<f32>) -> f32 {
        0.0
    }

    fn flags(&self) -> LightFlags {
        self.flags
    }
}

pub struct DirectionalLight {
    flags: LightFlags,
    #[allow(non_snake_case)]
    L: SampledSpectrum,
    w_light: na::Vector3<f32>,
    world_center: na::Point3<f32>,
    world_radius: f32,
}

impl DirectionalLight {
    #[allow(non_snake_case)]
    pub fn new(
        light_to_world: &na::Projective3<f32>,
        L: SampledSpectrum,
        w_light: na::Vector3<f32>,
    ) -> Self {
        Self {
            flags: LightFlags::DELTA_DIRECTION,
            L,
            w_light: (light_to_world * w_light).normalize(),
            world_center: na::Point3::origin(),
            world_radius: 0.0,
        }
    }
}

impl Light for DirectionalLight {
    fn sample_li(
        &self,
        reference: &Interaction,
        _u: &na::Point2<f32>,
        wi: &mut na::Vector3<f32>,
        pdf: &mut f32,
        vis: &mut Option<VisibilityTester>,
    ) -> SampledSpectrum {
        *wi = self.w_light;
        *pdf = 1.0;
        let p_outside = reference.p + self.w_light * (2.0 * self.world_radius);
        *vis = Some(VisibilityTester {
            p0: *reference,
            p1: Interaction {
                p: p_outside,
                ..Default::default()
            },
        });

        self.L
    }

    fn power(&self) -> SampledSpectrum {
        self.L * std::f32::consts::PI * self.world_radius * self.world_radius
    }

    fn pdf_li(&self, _reference: &Interaction, _wi: &na::Vector3<f32>) -> f32 {
        0.0
    }

    fn flags(&self) -> LightFlags {
        self.flags
    }

    fn preprocess(&mut self, world_bound: &Bounds3) {
        world_bound.bounding_sphere(&mut self.world_center, &mut self.world_radius);
    }
}
