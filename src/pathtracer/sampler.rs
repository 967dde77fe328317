use super::CameraSample;
use anyhow::bail;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub type Random = SmallRng;

#[derive(Clone)]
pub struct SamplerBuilder {
    samples_per_pixel: usize,
    seed: u64,
    log: slog::Logger,
}

impl SamplerBuilder {
    pub fn new(log: &slog::Logger, samples_per_pixel: usize) -> Self {
        let log = log.new(o!("module" => "sampler"));
        Self {
            samples_per_pixel,
            seed: 0,
            log,
        }
    }

    pub fn with_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;

        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.samples_per_pixel == 0 {
            bail!("samples per pixel must be at least 1");
        }

        Ok(())
    }

    pub fn build(&self) -> Sampler {
        Sampler {
            samples_per_pixel: self.samples_per_pixel,
            seed: self.seed,
            current_pixel_sample_index: 0,
            rng: RefCell::new(Random::seed_from_u64(self.seed)),
            log: self.log.clone(),
        }
    }
}

pub struct Sampler {
    samples_per_pixel: usize,
    seed: u64,
    current_pixel_sample_index: usize,
    rng: RefCell<Random>,
    log: slog::Logger,
}

impl Sampler {
    /// Reseeds from (seed, pixel) so a pixel's sequence does not depend on
    /// which tile or worker visits it.
    pub fn start_pixel(&mut self, p: &na::Point2<i32>) {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        p.x.hash(&mut hasher);
        p.y.hash(&mut hasher);
        self.rng = RefCell::new(Random::seed_from_u64(hasher.finish()));
        self.current_pixel_sample_index = 0;
        trace!(self.log, "starting pixel {:?}", p);
    }

    pub fn get_1d(&self) -> f32 {
        self.rng.borrow_mut().gen_range(0.0, 1.0)
    }

    pub fn get_2d(&self) -> na::Point2<f32> {
        let mut rng = self.rng.borrow_mut();
        na::Point2::new(rng.gen_range(0.0, 1.0), rng.gen_range(0.0, 1.0))
    }

    pub fn get_camera_sample(&mut self, p_raster: &na::Point2<i32>) -> CameraSample {
        CameraSample {
            p_film: na::Point2::new(p_raster.x as f32, p_raster.y as f32) + self.get_2d().coords,
        }
    }

    pub fn start_next_sample(&mut self) -> bool {
        self.current_pixel_sample_index += 1;
        self.current_pixel_sample_index < self.samples_per_pixel
    }

    pub fn samples_per_pixel(&self) -> usize {
        self.samples_per_pixel
    }

    pub fn get_current_sample_number(&self) -> usize {
        self.current_pixel_sample_index
    }
}
