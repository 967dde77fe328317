use super::bxdf::BxDFType;
use super::sampler::{Sampler, SamplerBuilder};
use super::sampling::cosine_sample_hemisphere;
use super::RenderScene;
use crate::common::bounds::Bounds2i;
use crate::common::film::FilmTile;
use crate::common::ray::Ray;
use crate::common::spectrum::{RgbSpectrum, SampledSpectrum, SpectrumType, COLOR_TABLES};
use crate::common::Camera;
use anyhow::bail;
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rayon::prelude::*;
use std::time::Instant;

const MAX_RECURSION_DEPTH: u32 = 64;

/// How radiance is estimated at a camera ray.
pub enum RadianceEstimator {
    /// Shading normal at the first hit, remapped to colors.
    Normal,
    /// Fraction of cosine distributed hemisphere rays that escape the scene.
    AmbientOcclusion { num_samples: u32 },
    /// Direct lighting at every bounce plus sampled indirect bounces up to
    /// `max_depth`. `max_depth` of zero gives direct lighting only.
    Path { max_depth: u32, shadow_rays: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorState {
    Uninitialized,
    Initialized,
    Rendering,
    Done,
}

pub struct Integrator {
    sampler_builder: SamplerBuilder,
    estimator: RadianceEstimator,
    state: IntegratorState,
    log: slog::Logger,
}

impl Integrator {
    pub fn new(
        log: &slog::Logger,
        sampler_builder: SamplerBuilder,
        estimator: RadianceEstimator,
    ) -> Self {
        let log = log.new(o!("module" => "integrator"));
        Self {
            sampler_builder,
            estimator,
            state: IntegratorState::Uninitialized,
            log,
        }
    }

    pub fn state(&self) -> IntegratorState {
        self.state
    }

    /// Validates the configuration. Must succeed before any rendering;
    /// calling it again after a finished render arms a fresh, equally
    /// deterministic run.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        self.sampler_builder.validate()?;
        match self.estimator {
            RadianceEstimator::AmbientOcclusion { num_samples } if num_samples == 0 => {
                bail!("ambient occlusion needs at least one hemisphere sample")
            }
            RadianceEstimator::Path { max_depth, .. } if max_depth > MAX_RECURSION_DEPTH => {
                bail!(
                    "max depth {} exceeds the recursion limit of {}",
                    max_depth,
                    MAX_RECURSION_DEPTH
                )
            }
            _ => {}
        }
        self.state = IntegratorState::Initialized;

        Ok(())
    }

    fn li(&self, r: &Ray, scene: &RenderScene, sampler: &mut Sampler, depth: u32) -> SampledSpectrum {
        match self.estimator {
            RadianceEstimator::Normal => self.li_normal(r, scene),
            RadianceEstimator::AmbientOcclusion { num_samples } => {
                self.li_ambient_occlusion(r, scene, sampler, num_samples)
            }
            RadianceEstimator::Path {
                max_depth,
                shadow_rays,
            } => self.li_path(r, scene, sampler, depth, max_depth, shadow_rays),
        }
    }

    fn li_normal(&self, r: &Ray, scene: &RenderScene) -> SampledSpectrum {
        match scene.intersect(r) {
            Some(isect) => {
                let n = isect.shading.n;
                let rgb = RgbSpectrum::from_floats(
                    0.5 * (n.x + 1.0),
                    0.5 * (n.y + 1.0),
                    0.5 * (n.z + 1.0),
                );
                SampledSpectrum::from_rgb(&rgb, SpectrumType::Reflectance, &COLOR_TABLES)
            }
            None => SampledSpectrum::new(0.0),
        }
    }

    fn li_ambient_occlusion(
        &self,
        r: &Ray,
        scene: &RenderScene,
        sampler: &mut Sampler,
        num_samples: u32,
    ) -> SampledSpectrum {
        let isect = match scene.intersect(r) {
            Some(isect) => isect,
            None => return SampledSpectrum::new(0.0),
        };
        let bsdf = match isect.bsdf.as_ref() {
            Some(bsdf) => bsdf,
            None => return SampledSpectrum::new(0.0),
        };

        let mut unoccluded = 0;
        for _ in 0..num_samples {
            let w = bsdf.local_to_world(&cosine_sample_hemisphere(&sampler.get_2d()));
            if !scene.intersect_p(&isect.general.spawn_ray(&w)) {
                unoccluded += 1;
            }
        }

        SampledSpectrum::new(unoccluded as f32 / num_samples as f32)
    }

    fn li_path(
        &self,
        r: &Ray,
        scene: &RenderScene,
        sampler: &mut Sampler,
        depth: u32,
        max_depth: u32,
        shadow_rays: bool,
    ) -> SampledSpectrum {
        let mut l = SampledSpectrum::new(0.0);
        let isect = match scene.intersect(r) {
            Some(isect) => isect,
            None => return l,
        };
        let bsdf = match isect.bsdf.as_ref() {
            Some(bsdf) => bsdf,
            None => return l,
        };
        trace!(self.log, "intersected geometry at: {:?}", isect.general.p);

        let wo = isect.general.wo;

        for light in &scene.lights {
            let u_light = sampler.get_2d();
            let mut wi = glm::zero();
            let mut light_pdf = 0.0;
            let mut visibility = None;
            let li = light.sample_li(
                &isect.general,
                &u_light,
                &mut wi,
                &mut light_pdf,
                &mut visibility,
            );
            if light_pdf <= 0.0 || li.is_black() {
                continue;
            }

            let f = bsdf.f(&wo, &wi, BxDFType::BSDF_ALL) * wi.dot(&isect.shading.n).abs();
            if f.is_black() {
                continue;
            }

            if shadow_rays {
                if let Some(visibility) = visibility {
                    if !visibility.unoccluded(scene) {
                        continue;
                    }
                }
            }

            l += f * li / light_pdf;
        }

        trace!(self.log, "L: {:?}, after light rays", l);

        if depth < max_depth {
            let mut wi = glm::zero();
            let mut pdf = 0.0;
            let f = bsdf.sample_f(
                &wo,
                &mut wi,
                &sampler.get_2d(),
                &mut pdf,
                BxDFType::BSDF_ALL,
                &mut None,
            );
            if pdf > 0.0 && !f.is_black() {
                let ray = isect.general.spawn_ray(&wi);
                let li = self.li_path(&ray, scene, sampler, depth + 1, max_depth, shadow_rays);
                l += f * li * wi.dot(&isect.shading.n).abs() / pdf;
            }
        }

        l
    }

    /// Renders one pixel with the configured sampler and returns the
    /// averaged radiance. The estimate matches what a full render would
    /// accumulate for the same pixel.
    pub fn render_single_pixel(
        &self,
        camera: &Camera,
        pixel: na::Point2<i32>,
        scene: &RenderScene,
    ) -> anyhow::Result<SampledSpectrum> {
        if self.state == IntegratorState::Uninitialized {
            bail!("integrator must be initialized before rendering");
        }
        trace!(self.log, "render single pixel: {:?}", pixel);

        let mut pixel_sampler = self.sampler_builder.build();
        pixel_sampler.start_pixel(&pixel);

        let mut sum = SampledSpectrum::new(0.0);
        loop {
            let camera_sample = pixel_sampler.get_camera_sample(&pixel);
            let ray = camera.generate_ray(&camera_sample);
            let l = self.li(&ray, scene, &mut pixel_sampler, 0);
            if !l.has_nans() {
                sum += l.clamp_positive();
            }

            if !pixel_sampler.start_next_sample() {
                break;
            }
        }

        Ok(sum / pixel_sampler.samples_per_pixel() as f32)
    }

    pub fn render(&mut self, camera: &Camera, scene: &RenderScene) -> anyhow::Result<()> {
        match self.state {
            IntegratorState::Uninitialized | IntegratorState::Rendering => {
                bail!("integrator must be initialized before rendering")
            }
            IntegratorState::Initialized | IntegratorState::Done => {}
        }
        self.state = IntegratorState::Rendering;

        debug!(
            self.log,
            "start rendering image of size: {:?}",
            camera.film.get_sample_bounds().diagonal(),
        );
        let start = Instant::now();
        let sample_bounds = camera.film.get_sample_bounds();
        let sample_extent = sample_bounds.diagonal();
        const TILE_SIZE: i32 = 16;
        let num_tiles = na::Point2::new(
            (sample_extent.x + TILE_SIZE - 1) / TILE_SIZE,
            (sample_extent.y + TILE_SIZE - 1) / TILE_SIZE,
        );

        (0..num_tiles.x)
            .cartesian_product(0..num_tiles.y)
            .collect_vec()
            .par_iter()
            .progress_count((num_tiles.x * num_tiles.y) as u64)
            .map(|(x, y)| {
                let tile = na::Point2::new(*x, *y);
                let mut tile_sampler = self.sampler_builder.build();

                let x0 = sample_bounds.p_min.x + tile.x * TILE_SIZE;
                let x1 = std::cmp::min(x0 + TILE_SIZE, sample_bounds.p_max.x);
                let y0 = sample_bounds.p_min.y + tile.y * TILE_SIZE;
                let y1 = std::cmp::min(y0 + TILE_SIZE, sample_bounds.p_max.y);

                let tile_bounds = Bounds2i {
                    p_min: na::Point2::new(x0, y0),
                    p_max: na::Point2::new(x1, y1),
                };
                let mut film_tile = camera.film.get_film_tile(&tile_bounds);

                for (x, y) in (tile_bounds.p_min.x..tile_bounds.p_max.x)
                    .cartesian_product(tile_bounds.p_min.y..tile_bounds.p_max.y)
                {
                    let pixel = na::Point2::new(x, y);
                    tile_sampler.start_pixel(&pixel);

                    loop {
                        let camera_sample = tile_sampler.get_camera_sample(&pixel);
                        let ray = camera.generate_ray(&camera_sample);
                        let l = self.li(&ray, scene, &mut tile_sampler, 0);
                        film_tile.add_sample(&camera_sample.p_film, &l);

                        if !tile_sampler.start_next_sample() {
                            break;
                        }
                    }
                }

                film_tile
            })
            .collect::<Vec<Box<FilmTile>>>()
            .drain(..)
            .for_each(|film_tile| {
                camera.film.merge_film_tile(film_tile, &COLOR_TABLES);
            });

        let duration = start.elapsed();
        info!(self.log, "rendering took: {:?}", duration);
        self.state = IntegratorState::Done;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathtracer::accelerator::{Device, TriangleMesh};
    use crate::pathtracer::light::{PointLight, SyncLight};
    use crate::pathtracer::material::{MatteMaterial, SyncMaterial};
    use crate::pathtracer::RenderScene;
    use std::f32::consts::FRAC_1_PI;
    use std::sync::Arc;

    fn test_log() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    fn plane_mesh(half_extent: f32, z: f32) -> TriangleMesh {
        TriangleMesh {
            indices: vec![0, 1, 2, 0, 2, 3],
            pos: vec![
                na::Point3::new(-half_extent, -half_extent, z),
                na::Point3::new(half_extent, -half_extent, z),
                na::Point3::new(half_extent, half_extent, z),
                na::Point3::new(-half_extent, half_extent, z),
            ],
            normal: vec![na::Vector3::new(0.0, 0.0, 1.0); 4],
            uv: vec![],
        }
    }

    fn plane_scene(log: &slog::Logger, lights: Vec<Box<dyn SyncLight>>) -> RenderScene {
        let device = Device::new(log);
        let mut blas = device.create_bottom_level();
        blas.add_geometry(plane_mesh(100.0, 0.0));
        blas.generate();

        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(blas), &na::Projective3::identity());
        tlas.generate();

        let materials: Vec<Arc<dyn SyncMaterial>> =
            vec![Arc::new(MatteMaterial::new(log, SampledSpectrum::new(0.5)))];
        RenderScene::new(log, tlas, materials, lights)
    }

    fn camera_above_origin() -> Camera {
        Camera::look_at(
            &na::Point3::new(0.0, 0.0, 5.0),
            &na::Point3::origin(),
            &na::Vector3::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            &glm::vec2(64.0, 64.0),
        )
    }

    fn down_ray() -> Ray {
        Ray::new(na::Point3::new(0.0, 0.0, 5.0), na::Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_render_before_initialize_fails() {
        let log = test_log();
        let scene = plane_scene(&log, vec![]);
        let camera = camera_above_origin();
        let mut integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Normal,
        );

        assert_eq!(integrator.state(), IntegratorState::Uninitialized);
        assert!(integrator.render(&camera, &scene).is_err());
        assert!(integrator
            .render_single_pixel(&camera, na::Point2::new(0, 0), &scene)
            .is_err());
    }

    #[test]
    fn test_initialize_rejects_bad_configs() {
        let log = test_log();
        let mut zero_spp = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 0),
            RadianceEstimator::Normal,
        );
        assert!(zero_spp.initialize().is_err());

        let mut zero_ao = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::AmbientOcclusion { num_samples: 0 },
        );
        assert!(zero_ao.initialize().is_err());

        let mut deep = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: MAX_RECURSION_DEPTH + 1,
                shadow_rays: false,
            },
        );
        assert!(deep.initialize().is_err());

        let mut ok = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 0,
                shadow_rays: false,
            },
        );
        assert!(ok.initialize().is_ok());
        assert_eq!(ok.state(), IntegratorState::Initialized);
    }

    #[test]
    fn test_lifecycle_reaches_done_and_can_rerun() {
        let log = test_log();
        let scene = plane_scene(&log, vec![]);
        let camera = camera_above_origin();
        let mut integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Normal,
        );

        integrator.initialize().unwrap();
        integrator.render(&camera, &scene).unwrap();
        assert_eq!(integrator.state(), IntegratorState::Done);
        let first = camera.film.get_pixel(&na::Point2::new(32, 32));

        // a finished integrator can rerun without reinitializing and
        // produces the same image
        integrator.render(&camera, &scene).unwrap();
        assert_eq!(integrator.state(), IntegratorState::Done);
        assert_eq!(camera.film.get_pixel(&na::Point2::new(32, 32)), first);
    }

    #[test]
    fn test_normal_estimator_miss_is_black_hit_is_not() {
        let log = test_log();
        let scene = plane_scene(&log, vec![]);
        let mut sampler = SamplerBuilder::new(&log, 1).build();
        sampler.start_pixel(&na::Point2::new(0, 0));
        let integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Normal,
        );

        let miss = Ray::new(
            na::Point3::new(0.0, 0.0, 5.0),
            na::Vector3::new(0.0, 0.0, 1.0),
        );
        assert!(integrator.li(&miss, &scene, &mut sampler, 0).is_black());

        let l = integrator.li(&down_ray(), &scene, &mut sampler, 0);
        assert!(!l.is_black());
        // +z normal remaps to rgb (0.5, 0.5, 1.0)
        let rgb = l.to_rgb(&COLOR_TABLES);
        approx::assert_relative_eq!(rgb.b(), 1.0, epsilon = 1e-2);
        approx::assert_relative_eq!(rgb.r(), 0.5, epsilon = 1e-2);
    }

    #[test]
    fn test_ambient_occlusion_open_plane_is_fully_unoccluded() {
        let log = test_log();
        let scene = plane_scene(&log, vec![]);
        let mut sampler = SamplerBuilder::new(&log, 1).build();
        sampler.start_pixel(&na::Point2::new(0, 0));
        let integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::AmbientOcclusion { num_samples: 256 },
        );

        let l = integrator.li(&down_ray(), &scene, &mut sampler, 0);
        approx::assert_relative_eq!(l[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ambient_occlusion_under_cover_is_dark() {
        let log = test_log();
        let device = Device::new(&log);
        let mut blas = device.create_bottom_level();
        blas.add_geometry(plane_mesh(100.0, 0.0));
        blas.generate();
        let mut cover = device.create_bottom_level();
        cover.add_geometry(plane_mesh(1000.0, 1.0));
        cover.generate();

        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(blas), &na::Projective3::identity());
        tlas.add_instance(Arc::new(cover), &na::Projective3::identity());
        tlas.generate();

        let material: Arc<dyn SyncMaterial> =
            Arc::new(MatteMaterial::new(&log, SampledSpectrum::new(0.5)));
        let scene = RenderScene::new(
            &log,
            tlas,
            vec![Arc::clone(&material), material],
            vec![],
        );

        let mut sampler = SamplerBuilder::new(&log, 1).build();
        sampler.start_pixel(&na::Point2::new(0, 0));
        let integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::AmbientOcclusion { num_samples: 64 },
        );

        // ray entering through the tiny gap model: start below the cover
        let ray = Ray::new(
            na::Point3::new(0.0, 0.0, 0.5),
            na::Vector3::new(0.0, 0.0, -1.0),
        );
        let l = integrator.li(&ray, &scene, &mut sampler, 0);
        approx::assert_relative_eq!(l[0], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_path_direct_lighting_matches_analytic_value() {
        let log = test_log();
        // light directly above the origin, no occluders besides the plane
        let light_to_world: na::Projective3<f32> =
            na::convert(na::Translation3::new(0.0, 0.0, 2.0));
        let light: Box<dyn SyncLight> = Box::new(PointLight::new(
            &light_to_world,
            SampledSpectrum::new(100.0),
        ));
        let scene = plane_scene(&log, vec![light]);

        let mut sampler = SamplerBuilder::new(&log, 1).build();
        sampler.start_pixel(&na::Point2::new(0, 0));
        let integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 0,
                shadow_rays: false,
            },
        );

        let l = integrator.li(&down_ray(), &scene, &mut sampler, 0);
        // f * li * cos / pdf = (0.5 / pi) * (100 / 4) * 1
        let expected = 0.5 * FRAC_1_PI * 25.0;
        approx::assert_relative_eq!(l[0], expected, epsilon = 1e-3);
    }

    #[test]
    fn test_path_shadow_rays_darken_occluded_point() {
        let log = test_log();
        let device = Device::new(&log);
        let mut blas = device.create_bottom_level();
        blas.add_geometry(plane_mesh(100.0, 0.0));
        blas.generate();
        let mut blocker = device.create_bottom_level();
        blocker.add_geometry(plane_mesh(100.0, 1.0));
        blocker.generate();

        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(blas), &na::Projective3::identity());
        tlas.add_instance(Arc::new(blocker), &na::Projective3::identity());
        tlas.generate();

        let material: Arc<dyn SyncMaterial> =
            Arc::new(MatteMaterial::new(&log, SampledSpectrum::new(0.5)));
        let light_to_world: na::Projective3<f32> =
            na::convert(na::Translation3::new(0.0, 0.0, 2.0));
        let light: Box<dyn SyncLight> = Box::new(PointLight::new(
            &light_to_world,
            SampledSpectrum::new(100.0),
        ));
        let scene = RenderScene::new(
            &log,
            tlas,
            vec![Arc::clone(&material), material],
            vec![light],
        );

        let mut sampler = SamplerBuilder::new(&log, 1).build();
        sampler.start_pixel(&na::Point2::new(0, 0));
        let shadowed = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 0,
                shadow_rays: true,
            },
        );
        let unshadowed = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 0,
                shadow_rays: false,
            },
        );

        // point on the lower plane, light hidden behind the upper plane
        let ray = Ray::new(
            na::Point3::new(0.0, 0.0, 0.5),
            na::Vector3::new(0.0, 0.0, -1.0),
        );
        let with_shadows = shadowed.li(&ray, &scene, &mut sampler, 0);
        let without_shadows = unshadowed.li(&ray, &scene, &mut sampler, 0);

        assert!(with_shadows.is_black());
        assert!(!without_shadows.is_black());
    }

    #[test]
    fn test_path_indirect_adds_energy() {
        let log = test_log();
        // floor plus a wall so bounced light has something to pick up
        let device = Device::new(&log);
        let mut floor = device.create_bottom_level();
        floor.add_geometry(plane_mesh(100.0, 0.0));
        floor.generate();
        let mut ceiling = device.create_bottom_level();
        ceiling.add_geometry(plane_mesh(1000.0, 4.0));
        ceiling.generate();

        let mut tlas = device.create_top_level();
        tlas.add_instance(Arc::new(floor), &na::Projective3::identity());
        tlas.add_instance(Arc::new(ceiling), &na::Projective3::identity());
        tlas.generate();

        let material: Arc<dyn SyncMaterial> =
            Arc::new(MatteMaterial::new(&log, SampledSpectrum::new(0.5)));
        let light_to_world: na::Projective3<f32> =
            na::convert(na::Translation3::new(0.0, 0.0, 2.0));
        let light: Box<dyn SyncLight> = Box::new(PointLight::new(
            &light_to_world,
            SampledSpectrum::new(100.0),
        ));
        let scene = RenderScene::new(
            &log,
            tlas,
            vec![Arc::clone(&material), material],
            vec![light],
        );

        let direct = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 0,
                shadow_rays: false,
            },
        );
        let bounced = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 1),
            RadianceEstimator::Path {
                max_depth: 3,
                shadow_rays: false,
            },
        );

        let mut sampler_a = SamplerBuilder::new(&log, 1).build();
        sampler_a.start_pixel(&na::Point2::new(0, 0));
        let l_direct = direct.li(&down_ray(), &scene, &mut sampler_a, 0);

        let mut sampler_b = SamplerBuilder::new(&log, 1).build();
        sampler_b.start_pixel(&na::Point2::new(0, 0));
        let l_bounced = bounced.li(&down_ray(), &scene, &mut sampler_b, 0);

        assert!(l_bounced.y(&COLOR_TABLES) > l_direct.y(&COLOR_TABLES));
    }

    #[test]
    fn test_render_single_pixel_is_deterministic() {
        let log = test_log();
        let light_to_world: na::Projective3<f32> =
            na::convert(na::Translation3::new(0.0, 0.0, 2.0));
        let light: Box<dyn SyncLight> = Box::new(PointLight::new(
            &light_to_world,
            SampledSpectrum::new(100.0),
        ));
        let scene = plane_scene(&log, vec![light]);
        let camera = camera_above_origin();

        let mut sampler_builder = SamplerBuilder::new(&log, 4);
        sampler_builder.with_seed(11);
        let mut integrator = Integrator::new(
            &log,
            sampler_builder,
            RadianceEstimator::Path {
                max_depth: 2,
                shadow_rays: true,
            },
        );
        integrator.initialize().unwrap();

        let pixel = na::Point2::new(32, 32);
        let first = integrator.render_single_pixel(&camera, pixel, &scene).unwrap();
        let second = integrator.render_single_pixel(&camera, pixel, &scene).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_render_fills_film() {
        let log = test_log();
        let light_to_world: na::Projective3<f32> =
            na::convert(na::Translation3::new(0.0, 0.0, 2.0));
        let light: Box<dyn SyncLight> = Box::new(PointLight::new(
            &light_to_world,
            SampledSpectrum::new(100.0),
        ));
        let scene = plane_scene(&log, vec![light]);
        let camera = camera_above_origin();

        let mut integrator = Integrator::new(
            &log,
            SamplerBuilder::new(&log, 2),
            RadianceEstimator::Path {
                max_depth: 1,
                shadow_rays: false,
            },
        );
        integrator.initialize().unwrap();
        integrator.render(&camera, &scene).unwrap();

        // center pixel looks straight down at the lit plane
        let center = camera.film.get_pixel(&na::Point2::new(32, 32));
        assert!(center[0] > 0);
    }
}
