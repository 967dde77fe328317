use super::bounds::Bounds2i;
use super::spectrum::{ColorTables, SampledSpectrum};
use image::RgbImage;
use itertools::Itertools;
use std::path::Path;
use std::sync::RwLock;

/// Per-pixel running sum of wavelength-sampled radiance. Conversion to RGB
/// happens exactly once, when the tile merges into the film.
#[derive(Clone, Debug)]
pub struct FilmTilePixel {
    contrib_sum: SampledSpectrum,
    num_samples: u32,
}

impl FilmTilePixel {
    pub fn new() -> Self {
        FilmTilePixel {
            contrib_sum: SampledSpectrum::new(0.0),
            num_samples: 0,
        }
    }
}

pub struct FilmTile {
    tile: Vec<FilmTilePixel>,
    pixel_bounds: Bounds2i,
}

impl FilmTile {
    pub fn new(pixel_bounds: Bounds2i) -> Self {
        FilmTile {
            tile: vec![FilmTilePixel::new(); pixel_bounds.area() as usize],
            pixel_bounds,
        }
    }

    pub fn get_pixel(&self, p: &na::Point2<i32>) -> &FilmTilePixel {
        let width = self.pixel_bounds.p_max.x - self.pixel_bounds.p_min.x;
        let offset = (p.x - self.pixel_bounds.p_min.x) + (p.y - self.pixel_bounds.p_min.y) * width;
        &self.tile[offset as usize]
    }

    pub fn get_pixel_mut(&mut self, p: &na::Point2<i32>) -> &mut FilmTilePixel {
        let width = self.pixel_bounds.p_max.x - self.pixel_bounds.p_min.x;
        let offset = (p.x - self.pixel_bounds.p_min.x) + (p.y - self.pixel_bounds.p_min.y) * width;
        &mut self.tile[offset as usize]
    }

    /// Accumulates one radiance sample. Samples carrying NaNs count as black
    /// and negative components clamp to zero, so a single degenerate sample
    /// cannot corrupt the pixel average.
    pub fn add_sample(&mut self, p_film: &na::Point2<f32>, l: &SampledSpectrum) {
        let p_film_discrete = p_film - na::Vector2::new(0.5, 0.5);
        let pixel = self.get_pixel_mut(&na::Point2::new(
            p_film_discrete.x.floor() as i32,
            p_film_discrete.y.floor() as i32,
        ));
        if !l.has_nans() {
            pixel.contrib_sum += l.clamp_positive();
        }
        pixel.num_samples += 1;
    }

    pub fn get_pixel_bounds(&self) -> Bounds2i {
        self.pixel_bounds
    }
}

pub struct Film {
    pub resolution: na::Vector2<u32>,
    image: RwLock<RgbImage>,
}

impl Film {
    pub fn new(resolution: &glm::UVec2) -> Self {
        Film {
            resolution: *resolution,
            image: RwLock::new(RgbImage::new(resolution.x, resolution.y)),
        }
    }

    pub fn save(&self, file_path: &Path) -> anyhow::Result<()> {
        self.image
            .read()
            .unwrap()
            .save(file_path)?;
        Ok(())
    }

    pub fn get_pixel(&self, p: &na::Point2<i32>) -> image::Rgb<u8> {
        *self
            .image
            .read()
            .unwrap()
            .get_pixel(p.x as u32, p.y as u32)
    }

    pub fn get_sample_bounds(&self) -> Bounds2i {
        Bounds2i {
            p_min: na::Point2::new(0, 0),
            p_max: na::Point2::new(self.resolution.x as i32, self.resolution.y as i32),
        }
    }

    pub fn get_film_tile(&self, sample_bounds: &Bounds2i) -> Box<FilmTile> {
        Box::new(FilmTile::new(*sample_bounds))
    }

    pub fn merge_film_tile(&self, tile: Box<FilmTile>, tables: &ColorTables) {
        let mut image = self.image.write().unwrap();
        let pixel_bounds = tile.get_pixel_bounds();
        for (x, y) in (pixel_bounds.p_min.x..pixel_bounds.p_max.x)
            .cartesian_product(pixel_bounds.p_min.y..pixel_bounds.p_max.y)
        {
            let film_tile_pixel = tile.get_pixel(&na::Point2::new(x, y));
            let avg = if film_tile_pixel.num_samples > 0 {
                film_tile_pixel.contrib_sum / film_tile_pixel.num_samples as f32
            } else {
                SampledSpectrum::new(0.0)
            };

            image.put_pixel(x as u32, y as u32, avg.to_rgb(tables).to_image_rgb());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::spectrum::{RgbSpectrum, SpectrumType};

    fn one_pixel_tile() -> FilmTile {
        FilmTile::new(Bounds2i {
            p_min: na::Point2::new(0, 0),
            p_max: na::Point2::new(1, 1),
        })
    }

    #[test]
    fn test_add_sample_scrubs_nan() {
        let mut tile = one_pixel_tile();
        let mut bad = SampledSpectrum::new(1.0);
        bad[5] = f32::NAN;
        tile.add_sample(&na::Point2::new(0.5, 0.5), &bad);
        tile.add_sample(&na::Point2::new(0.5, 0.5), &SampledSpectrum::new(1.0));

        let pixel = tile.get_pixel(&na::Point2::new(0, 0));
        assert_eq!(pixel.num_samples, 2);
        assert!(!pixel.contrib_sum.has_nans());
        approx::assert_relative_eq!(pixel.contrib_sum[0], 1.0);
    }

    #[test]
    fn test_add_sample_clamps_negative() {
        let mut tile = one_pixel_tile();
        tile.add_sample(&na::Point2::new(0.5, 0.5), &SampledSpectrum::new(-2.0));

        let pixel = tile.get_pixel(&na::Point2::new(0, 0));
        assert!(pixel.contrib_sum.is_black());
        assert_eq!(pixel.num_samples, 1);
    }

    #[test]
    fn test_merge_averages_samples() {
        let tables = ColorTables::new();
        let film = Film::new(&glm::vec2(1, 1));
        let mut tile = film.get_film_tile(&film.get_sample_bounds());
        let white = SampledSpectrum::from_rgb(
            &RgbSpectrum::new(1.0),
            SpectrumType::Reflectance,
            &tables,
        );
        tile.add_sample(&na::Point2::new(0.5, 0.5), &white);
        tile.add_sample(&na::Point2::new(0.5, 0.5), &SampledSpectrum::new(0.0));
        film.merge_film_tile(tile, &tables);

        // average of white and black, gamma corrected
        let expected = (crate::common::math::gamma_correct(0.5) * 255.0 + 0.5) as u8;
        let got = film.get_pixel(&na::Point2::new(0, 0));
        assert!((got[0] as i32 - expected as i32).abs() <= 1);
    }
}
