pub mod accelerator;
pub mod bsdf;
pub mod bxdf;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod sampler;
pub mod sampling;

use crate::common::bounds::Bounds3;
use crate::common::math::face_forward;
use crate::common::ray::Ray;
use crate::common::Camera;
use accelerator::{RayHit, TopLevelAccelerationStructure};
use interaction::{Interaction, Shading, SurfaceInteraction};
use light::SyncLight;
use material::SyncMaterial;
use std::sync::Arc;

pub struct CameraSample {
    pub p_film: na::Point2<f32>,
}

impl Camera {
    pub fn generate_ray(&self, sample: &CameraSample) -> Ray {
        let p_film = na::Point3::new(sample.p_film.x, sample.p_film.y, 0.0);
        let p_camera = self.raster_to_camera * p_film;
        let d = self.cam_to_world * p_camera.coords.normalize();
        let o = self.cam_to_world * na::Point3::origin();
        Ray::new(o, d)
    }
}

/// World visible to the estimators: committed instance geometry with a
/// material per instance and the scene's lights.
pub struct RenderScene {
    tlas: TopLevelAccelerationStructure,
    instance_materials: Vec<Arc<dyn SyncMaterial>>,
    pub lights: Vec<Box<dyn SyncLight>>,
    world_bound: Bounds3,
    log: slog::Logger,
}

impl RenderScene {
    pub fn new(
        log: &slog::Logger,
        tlas: TopLevelAccelerationStructure,
        instance_materials: Vec<Arc<dyn SyncMaterial>>,
        mut lights: Vec<Box<dyn SyncLight>>,
    ) -> Self {
        let log = log.new(o!("module" => "scene"));
        assert_eq!(
            tlas.num_instances(),
            instance_materials.len(),
            "every instance needs a material"
        );
        let world_bound = tlas.world_bound();
        for light in &mut lights {
            light.preprocess(&world_bound);
        }
        info!(
            log,
            "built render scene";
            "instances" => tlas.num_instances(),
            "lights" => lights.len()
        );
        Self {
            tlas,
            instance_materials,
            lights,
            world_bound,
            log,
        }
    }

    pub fn world_bound(&self) -> Bounds3 {
        self.world_bound
    }

    pub fn intersect(&self, r: &Ray) -> Option<SurfaceInteraction> {
        let hit = self.tlas.intersect(r)?;
        let mut si = self.surface_interaction(r, &hit);
        self.instance_materials[hit.instance_id as usize].compute_scattering_functions(&mut si);
        Some(si)
    }

    pub fn intersect_p(&self, r: &Ray) -> bool {
        self.tlas.intersect_p(r)
    }

    fn surface_interaction(&self, r: &Ray, hit: &RayHit) -> SurfaceInteraction {
        let local_to_world = self.tlas.instance_transform(hit.instance_id);
        let world_to_local = self.tlas.instance_inverse_transform(hit.instance_id);
        let mesh = self
            .tlas
            .instance_blas(hit.instance_id)
            .geometry(hit.geometry_id);

        let tri = &mesh.indices[3 * hit.primitive_id as usize..3 * hit.primitive_id as usize + 3];
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let b1 = hit.barycentric.x;
        let b2 = hit.barycentric.y;
        let b0 = 1.0 - b1 - b2;

        let p0 = local_to_world * mesh.pos[i0];
        let p1 = local_to_world * mesh.pos[i1];
        let p2 = local_to_world * mesh.pos[i2];
        let p = na::Point3::from(b0 * p0.coords + b1 * p1.coords + b2 * p2.coords);
        let p_error = crate::common::math::gamma(7)
            * (glm::abs(&(b0 * p0.coords)) + glm::abs(&(b1 * p1.coords)) + glm::abs(&(b2 * p2.coords)));

        // geometric normal from the world space winding
        let mut ng = (p1 - p0).cross(&(p2 - p0)).normalize();

        // shading normal from vertex attributes when the mesh has them,
        // moved to world space with the inverse transpose
        let ns = if mesh.normal.is_empty() {
            ng
        } else {
            let n_local = b0 * mesh.normal[i0] + b1 * mesh.normal[i1] + b2 * mesh.normal[i2];
            let m = world_to_local.matrix().transpose();
            (m * n_local.to_homogeneous()).xyz().normalize()
        };
        ng = face_forward(&ng, &ns);

        let uv = if mesh.uv.is_empty() {
            na::Point2::new(b1, b2)
        } else {
            na::Point2::from(
                b0 * mesh.uv[i0].coords + b1 * mesh.uv[i1].coords + b2 * mesh.uv[i2].coords,
            )
        };

        trace!(
            self.log,
            "hit instance {:?} geometry {:?} primitive {:?} at t {:?}",
            hit.instance_id,
            hit.geometry_id,
            hit.primitive_id,
            hit.t
        );

        SurfaceInteraction {
            general: Interaction {
                p,
                p_error,
                wo: -r.d.normalize(),
                n: ng,
            },
            uv,
            shading: Shading { n: ns },
            instance_id: hit.instance_id,
            bsdf: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::accelerator::{Device, TriangleMesh};
    use super::material::MatteMaterial;
    use super::*;
    use crate::common::spectrum::SampledSpectrum;

    fn test_log() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    fn quad_mesh() -> TriangleMesh {
        TriangleMesh {
            indices: vec![0, 1, 2, 0, 2, 3],
            pos: vec![
                na::Point3::new(-1.0, -1.0, 0.0),
                na::Point3::new(1.0, -1.0, 0.0),
                na::Point3::new(1.0, 1.0, 0.0),
                na::Point3::new(-1.0, 1.0, 0.0),
            ],
            normal: vec![na::Vector3::new(0.0, 0.0, 1.0); 4],
            uv: vec![],
        }
    }

    fn single_quad_scene(log: &slog::Logger, kd: f32) -> RenderScene {
        let device = Device::new(log);
        let mut blas = device.create_bottom_level();
        blas.add_geometry(quad_mesh());
        blas.generate();

        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(blas), &na::Projective3::identity());
        tlas.generate();

        RenderScene::new(
            log,
            tlas,
            vec![Arc::new(MatteMaterial::new(log, SampledSpectrum::new(kd)))],
            vec![],
        )
    }

    #[test]
    fn test_intersect_attaches_bsdf_and_normals() {
        let scene = single_quad_scene(&test_log(), 0.5);
        let ray = Ray::new(
            na::Point3::new(0.25, 0.25, 3.0),
            na::Vector3::new(0.0, 0.0, -1.0),
        );

        let si = scene.intersect(&ray).unwrap();
        approx::assert_relative_eq!(si.general.p.z, 0.0, epsilon = 1e-4);
        approx::assert_relative_eq!(
            si.shading.n,
            na::Vector3::new(0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
        assert!(si.general.n.dot(&si.shading.n) > 0.0);
        assert!(si.bsdf.is_some());
        approx::assert_relative_eq!(si.general.wo, na::Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_intersect_p_matches_intersect() {
        let scene = single_quad_scene(&test_log(), 0.5);
        let hit_ray = Ray::new(
            na::Point3::new(0.0, 0.0, 3.0),
            na::Vector3::new(0.0, 0.0, -1.0),
        );
        let miss_ray = Ray::new(
            na::Point3::new(4.0, 4.0, 3.0),
            na::Vector3::new(0.0, 0.0, -1.0),
        );
        assert!(scene.intersect_p(&hit_ray));
        assert!(!scene.intersect_p(&miss_ray));
    }

    #[test]
    fn test_scaled_instance_keeps_unit_shading_normal() {
        let log = test_log();
        let device = Device::new(&log);
        let mut blas = device.create_bottom_level();
        blas.add_geometry(quad_mesh());
        blas.generate();

        let scale =
            na::Projective3::from_matrix_unchecked(glm::scaling(&glm::vec3(2.0, 2.0, 0.5)));
        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(blas), &scale);
        tlas.generate();

        let scene = RenderScene::new(
            &log,
            tlas,
            vec![Arc::new(MatteMaterial::new(
                &log,
                SampledSpectrum::new(0.5),
            ))],
            vec![],
        );

        let ray = Ray::new(
            na::Point3::new(1.5, 0.0, 3.0),
            na::Vector3::new(0.0, 0.0, -1.0),
        );
        let si = scene.intersect(&ray).unwrap();
        approx::assert_relative_eq!(si.shading.n.norm(), 1.0, epsilon = 1e-5);
        approx::assert_relative_eq!(
            si.shading.n,
            na::Vector3::new(0.0, 0.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_generate_ray_center_points_down_view_axis() {
        let camera = Camera::default();
        let resolution = camera.film.resolution;
        let sample = CameraSample {
            p_film: na::Point2::new(resolution.x as f32 / 2.0, resolution.y as f32 / 2.0),
        };

        let ray = camera.generate_ray(&sample);
        let forward = camera.cam_to_world * na::Vector3::new(0.0, 0.0, -1.0);
        approx::assert_relative_eq!(ray.d.dot(&forward), 1.0, epsilon = 1e-4);
        approx::assert_relative_eq!(
            ray.o,
            camera.cam_to_world * na::Point3::origin(),
            epsilon = 1e-5
        );
    }
}
