use super::bsdf::Bsdf;
use crate::common::math::offset_ray_origin;
use crate::common::ray::Ray;
use std::cell::RefCell;

const SHADOW_EPSILON: f32 = 1e-4;

/// Minimal point-on-something record, enough to spawn offset rays from.
#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    pub p: na::Point3<f32>,
    pub p_error: na::Vector3<f32>,
    pub wo: na::Vector3<f32>,
    pub n: na::Vector3<f32>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            p: na::Point3::origin(),
            p_error: glm::zero(),
            wo: glm::zero(),
            n: glm::zero(),
        }
    }
}

impl Interaction {
    pub fn spawn_ray(&self, d: &na::Vector3<f32>) -> Ray {
        let o = offset_ray_origin(&self.p, &self.p_error, &self.n, d);
        Ray::new(o, *d)
    }

    /// Ray toward a target point, parameterized so the target sits at t = 1.
    pub fn spawn_ray_to(&self, p2: &na::Point3<f32>) -> Ray {
        let o = offset_ray_origin(&self.p, &self.p_error, &self.n, &(p2 - self.p));
        Ray {
            o,
            d: p2 - o,
            t_max: RefCell::new(1.0 - SHADOW_EPSILON),
        }
    }
}

pub struct Shading {
    pub n: na::Vector3<f32>,
}

/// Full hit record handed to the estimators: geometric frame, interpolated
/// shading attributes, and the scattering functions attached by the scene.
pub struct SurfaceInteraction {
    pub general: Interaction,
    pub uv: na::Point2<f32>,
    pub shading: Shading,
    pub instance_id: u32,
    pub bsdf: Option<Bsdf>,
}
