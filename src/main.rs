#[macro_use]
extern crate slog;

extern crate nalgebra as na;
extern crate nalgebra_glm as glm;

use anyhow::{bail, Context};
use clap::clap_app;
use slog::Drain;
use spectray::common::spectrum::{RgbSpectrum, SampledSpectrum, SpectrumType, COLOR_TABLES};
use spectray::common::{importer::load_obj, Camera, DEFAULT_RESOLUTION};
use spectray::pathtracer::accelerator::{Device, TriangleMesh};
use spectray::pathtracer::integrator::{Integrator, RadianceEstimator};
use spectray::pathtracer::light::{PointLight, SyncLight};
use spectray::pathtracer::material::{MatteMaterial, SyncMaterial};
use spectray::pathtracer::sampler::SamplerBuilder;
use spectray::pathtracer::RenderScene;
use std::path::Path;
use std::sync::Arc;

fn count_arg_legal(val: String) -> Result<(), String> {
    match val.parse::<u32>() {
        Ok(0) => Err(String::from("arg must be at least 1")),
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("could not parse arg as integer")),
    }
}

fn depth_arg_legal(val: String) -> Result<(), String> {
    val.parse::<u32>()
        .map(|_| ())
        .map_err(|_| String::from("could not parse arg as integer"))
}

fn new_drain(level: slog::Level) -> slog::Fuse<slog::LevelFilter<slog::Fuse<slog_async::Async>>> {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    drain.filter_level(level).fuse()
}

fn white_light(scale: f32) -> SampledSpectrum {
    SampledSpectrum::from_rgb(
        &RgbSpectrum::from_floats(1.0, 1.0, 1.0),
        SpectrumType::Illuminant,
        &COLOR_TABLES,
    ) * scale
}

fn default_lights() -> Vec<Box<dyn SyncLight>> {
    let light_to_world: na::Projective3<f32> = na::convert(na::Translation3::new(0.0, 4.0, 2.0));
    vec![Box::new(PointLight::new(
        &light_to_world,
        white_light(1000.0),
    ))]
}

fn quad(half_extent: f32) -> TriangleMesh {
    TriangleMesh {
        indices: vec![0, 1, 2, 0, 2, 3],
        pos: vec![
            na::Point3::new(-half_extent, 0.0, -half_extent),
            na::Point3::new(-half_extent, 0.0, half_extent),
            na::Point3::new(half_extent, 0.0, half_extent),
            na::Point3::new(half_extent, 0.0, -half_extent),
        ],
        normal: vec![na::Vector3::new(0.0, 1.0, 0.0); 4],
        uv: vec![],
    }
}

fn scene_from_obj(log: &slog::Logger, path: &str) -> anyhow::Result<RenderScene> {
    let meshes = load_obj(log, path)?;

    let device = Device::new(log);
    let mut blas = device.create_bottom_level();
    for mesh in meshes {
        blas.add_geometry(mesh);
    }
    blas.generate();

    let mut tlas = device.create_top_level();
    tlas.add_instance(Arc::new(blas), &na::Projective3::identity());
    tlas.generate();

    let materials: Vec<Arc<dyn SyncMaterial>> = vec![Arc::new(MatteMaterial::new(
        log,
        SampledSpectrum::new(0.5),
    ))];

    Ok(RenderScene::new(log, tlas, materials, default_lights()))
}

// floor plus two instances of the same quad standing in for props
fn demo_scene(log: &slog::Logger) -> RenderScene {
    let device = Device::new(log);

    let mut floor_blas = device.create_bottom_level();
    floor_blas.add_geometry(quad(10.0));
    floor_blas.generate();

    let mut prop_blas = device.create_bottom_level();
    prop_blas.add_geometry(quad(0.5));
    prop_blas.generate();
    let prop_blas = Arc::new(prop_blas);

    let left: na::Projective3<f32> = na::convert(na::Translation3::new(-1.0, 1.0, 0.0));
    let right: na::Projective3<f32> = na::convert(na::Translation3::new(1.0, 0.5, 0.0));

    let mut tlas = device.create_top_level();
    tlas.add_instance(Arc::new(floor_blas), &na::Projective3::identity());
    tlas.add_instance(Arc::clone(&prop_blas), &left);
    tlas.add_instance(prop_blas, &right);
    tlas.generate();

    let gray: Arc<dyn SyncMaterial> =
        Arc::new(MatteMaterial::new(log, SampledSpectrum::new(0.5)));
    let red: Arc<dyn SyncMaterial> = Arc::new(MatteMaterial::new(
        log,
        SampledSpectrum::from_rgb(
            &RgbSpectrum::from_floats(0.6, 0.2, 0.2),
            SpectrumType::Reflectance,
            &COLOR_TABLES,
        ),
    ));

    RenderScene::new(
        log,
        tlas,
        vec![gray, Arc::clone(&red), red],
        default_lights(),
    )
}

fn main() -> anyhow::Result<()> {
    let matches = clap_app!(spectray =>
        (version: "0.1.0")
        (about: "Spectral offline renderer")
        (@arg SCENE: "Wavefront obj scene to render, defaults to a builtin scene")
        (@arg output: -o --output +takes_value +required "File path to save the render at")
        (@arg samples: -s --samples default_value("8") validator(count_arg_legal) "Samples per pixel")
        (@arg depth: -d --("max-depth") default_value("5") validator(depth_arg_legal) "Maximum path depth")
        (@arg integrator: -i --integrator default_value("path") possible_value("path") possible_value("normal") possible_value("ao") "Radiance estimator to use")
        (@arg ao_samples: --("ao-samples") default_value("64") validator(count_arg_legal) "Hemisphere samples for the ao estimator")
        (@arg shadow_rays: --("shadow-rays") "Trace shadow rays for direct lighting")
        (@arg seed: --seed default_value("0") "Sampler seed")
        (@arg verbose: -v --verbose "Print debug information verbosely")
    )
    .get_matches();

    let level = if matches.is_present("verbose") {
        slog::Level::Debug
    } else {
        slog::Level::Info
    };
    let log = slog::Logger::root(new_drain(level), o!());

    let output_path = Path::new(matches.value_of("output").context("missing output path")?);
    let samples = matches
        .value_of("samples")
        .context("missing samples")?
        .parse::<usize>()?;
    let max_depth = matches
        .value_of("depth")
        .context("missing depth")?
        .parse::<u32>()?;
    let ao_samples = matches
        .value_of("ao_samples")
        .context("missing ao samples")?
        .parse::<u32>()?;
    let seed = matches
        .value_of("seed")
        .context("missing seed")?
        .parse::<u64>()
        .context("could not parse seed")?;

    let scene = match matches.value_of("SCENE") {
        Some(path) => scene_from_obj(&log, path)?,
        None => demo_scene(&log),
    };

    let camera = Camera::look_at(
        &na::Point3::new(0.0, 2.0, 5.0),
        &na::Point3::origin(),
        &na::Vector3::new(0.0, 1.0, 0.0),
        std::f32::consts::FRAC_PI_2,
        &DEFAULT_RESOLUTION,
    );

    let estimator = match matches.value_of("integrator").context("missing integrator")? {
        "normal" => RadianceEstimator::Normal,
        "ao" => RadianceEstimator::AmbientOcclusion {
            num_samples: ao_samples,
        },
        "path" => RadianceEstimator::Path {
            max_depth,
            shadow_rays: matches.is_present("shadow_rays"),
        },
        other => bail!("unknown integrator {}", other),
    };

    let mut sampler_builder = SamplerBuilder::new(&log, samples);
    sampler_builder.with_seed(seed);
    let mut integrator = Integrator::new(&log, sampler_builder, estimator);

    integrator.initialize().context("invalid render settings")?;
    integrator.render(&camera, &scene)?;

    info!(log, "saving image to {:?}", output_path);
    camera.film.save(output_path)?;

    Ok(())
}
