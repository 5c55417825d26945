use std::path::PathBuf;
use std::time::Duration;

use log::{error, info, LevelFilter};
use minifb::{Key, Window, WindowOptions};
use rand::Rng;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use structopt::StructOpt;

use rust_raytracer::geometry::{Plane, PrimitiveEnum, Sphere};
use rust_raytracer::math::{Color, Point3, Vec3};
use rust_raytracer::parsing::load_scene;
use rust_raytracer::shading::DEFAULT_ALBEDO;
use rust_raytracer::{render, Camera, PointLight, RenderOptions, Scene, Shading};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// JSON scene description; a random sphere field is generated when omitted
    #[structopt(long)]
    pub scene_file: Option<PathBuf>,
    #[structopt(long, default_value = "1080")]
    pub width: usize,
    #[structopt(long, default_value = "720")]
    pub height: usize,
    /// flat | facing-ratio | lambertian
    #[structopt(long, default_value = "lambertian")]
    pub shading: String,
    /// Diffuse reflectance for lambertian shading
    #[structopt(long)]
    pub albedo: Option<f32>,
    #[structopt(short = "o", long, default_value = "output.png")]
    pub output: PathBuf,
    /// Show the frame in a window after rendering (escape closes it)
    #[structopt(long)]
    pub preview: bool,
    #[structopt(long)]
    pub threads: Option<usize>,
    /// Sphere count for the generated scene
    #[structopt(long, default_value = "12")]
    pub spheres: usize,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => default,
    }
}

fn parse_shading(name: &str, albedo: Option<f32>) -> Option<Shading> {
    match name {
        "flat" => Some(Shading::Flat),
        "facing-ratio" => Some(Shading::FacingRatio),
        "lambertian" => Some(Shading::Lambertian {
            albedo: albedo.unwrap_or(DEFAULT_ALBEDO),
        }),
        _ => None,
    }
}

/// A random sphere field in front of the camera, plus a ground plane and a
/// single point light off to the left.
fn generate_scene(n: usize) -> Scene {
    let mut rng = rand::thread_rng();
    let mut primitives: Vec<PrimitiveEnum> = Vec::with_capacity(n + 1);
    for _ in 0..n {
        let center = Point3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            -(rng.gen_range(1..=9) as f32),
        );
        let radius = rng.gen_range(0.05..1.0);
        let color = Color::new(
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
        );
        primitives.push(PrimitiveEnum::Sphere(Sphere::new(center, radius, color)));
    }
    primitives.push(PrimitiveEnum::Plane(Plane::new(
        Point3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Color::new(20.0, 20.0, 20.0),
    )));

    let lights = vec![PointLight::new(
        Point3::new(-2.0, 2.0, 1.0),
        Color::new(1.0, 1.0, 1.0),
        20.0,
    )];

    Scene::new(primitives, lights, Color::new(60.0, 40.0, 190.0))
}

fn show_preview(bytes: &[u8], width: usize, height: usize) {
    // minifb wants packed 0RGB u32 pixels
    let pixels: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|px| (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
        .collect();

    let mut window = match Window::new(
        "rust_raytracer",
        width,
        height,
        WindowOptions::default(),
    ) {
        Ok(window) => window,
        Err(e) => {
            error!("failed to open preview window: {}", e);
            return;
        }
    };
    window.limit_update_rate(Some(Duration::from_micros(16600)));

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.update_with_buffer(&pixels, width, height).is_err() {
            break;
        }
    }
}

fn main() {
    let opts = Opt::from_args();

    TermLogger::init(
        parse_log_level(&opts.log_level, LevelFilter::Info),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let threads = opts.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap();

    let shading = match parse_shading(&opts.shading, opts.albedo) {
        Some(shading) => shading,
        None => {
            error!("unknown shading policy {:?}", opts.shading);
            return;
        }
    };

    let (scene, camera) = match &opts.scene_file {
        Some(path) => match load_scene(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("failed to load scene {}: {}", path.display(), e);
                return;
            }
        },
        None => {
            info!("no scene file given, generating {} random spheres", opts.spheres);
            (generate_scene(opts.spheres), Camera::default())
        }
    };

    let bytes = match render(
        &scene,
        &camera,
        shading,
        opts.width,
        opts.height,
        RenderOptions { show_progress: true },
    ) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("render failed: {}", e);
            return;
        }
    };

    let image =
        image::RgbaImage::from_raw(opts.width as u32, opts.height as u32, bytes)
            .expect("buffer length matches the requested resolution");
    match image.save(&opts.output) {
        Ok(()) => info!("wrote {}", opts.output.display()),
        Err(e) => error!("failed to write {}: {}", opts.output.display(), e),
    }

    if opts.preview {
        show_preview(image.as_raw(), opts.width, opts.height);
    }
}
