use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use sphere_tracer::config::load_scene;
use sphere_tracer::output::{sink_for_path, ImageSink};
use sphere_tracer::{Camera, Scene, Tracer};

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level);

    // Log application startup with version information
    info!("sphere_tracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if args.threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global() {
            error!("Failed to configure {} worker threads: {}", args.threads, e);
            std::process::exit(1);
        }
    }

    // Resolve the sink first so a bad extension fails before any tracing
    let mut sink = match sink_for_path(&args.output) {
        Ok(sink) => sink,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut reflection = args.reflection;
    let scene = match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            load_scene(path)
                .and_then(|config| {
                    if let Some(mode) = config.reflection {
                        reflection = mode;
                    }
                    config.into_scene()
                })
                .map_err(|e| e.to_string())
        }
        None => Scene::reference().map_err(|e| e.to_string()),
    };
    let scene = match scene {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Scene: {} spheres, {} lights; {}x{}, fov {}, max depth {}, {:?} reflections",
        scene.spheres.len(),
        scene.lights.len(),
        args.width,
        args.height,
        args.fov,
        args.max_depth,
        reflection
    );

    let (mut camera, tracer) = match (
        Camera::new(args.width, args.height, args.fov),
        Tracer::new(args.max_depth, reflection),
    ) {
        (Ok(camera), Ok(tracer)) => (camera, tracer),
        (Err(e), _) | (_, Err(e)) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    camera.show_progress = !args.no_progress;

    let image = camera.render(&scene, &tracer);

    if let Err(e) = sink.write(&image) {
        error!("{}", e);
        std::process::exit(1);
    }
}
