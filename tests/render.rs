use glam::Vec3A;
use sphere_tracer::output::{encode_ppm, ImageSink, PpmFile};
use sphere_tracer::ray::Ray;
use sphere_tracer::vector::Color;
use sphere_tracer::{Camera, ReflectionMode, Scene, Tracer};

fn render_reference(tracer: &Tracer) -> sphere_tracer::Framebuffer {
    let scene = Scene::reference().unwrap();
    Camera::default().render(&scene, tracer)
}

#[test]
fn test_reference_render_is_deterministic() {
    let first = render_reference(&Tracer::default());
    let second = render_reference(&Tracer::default());

    assert_eq!(first.dimensions(), (640, 480));
    // Bitwise comparison, NaN-safe
    let bits = |img: &sphere_tracer::Framebuffer| img.as_raw().iter().map(|c| c.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_reference_render_contents() {
    let tracer = Tracer::default();
    let image = render_reference(&tracer);

    // Sky above the spheres is the white background
    assert_eq!(image.get_pixel(0, 0).0, [1.0, 1.0, 1.0]);

    // The red sphere sits in the middle of the frame
    let center = image.get_pixel(320, 240).0;
    assert_ne!(center, [1.0, 1.0, 1.0]);
    assert!(center[0] >= center[1]);
    assert!(center.iter().all(|c| c.is_finite() && *c >= 0.0));

    let counts = tracer.stats().snapshot();
    assert_eq!(counts.primary, 640 * 480);
    assert!(counts.deepest <= 1);
    assert!(counts.reflection <= counts.primary);
}

#[test]
fn test_rays_away_from_scene_see_background() {
    let scene = Scene::reference().unwrap();
    let tracer = Tracer::default();

    // Level or upward and away from the camera's view: the ground sphere is
    // huge, so any downward ray would still reach it.
    for x in [-0.5, 0.0, 0.5] {
        for y in [0.0, 0.25, 0.5] {
            let ray = Ray::new(Vec3A::ZERO, Vec3A::new(x, y, 1.0)).unwrap();
            assert_eq!(tracer.trace(&ray, &scene, 0), scene.background);
        }
    }
}

#[test]
fn test_mirror_mode_is_also_deterministic() {
    let scene = Scene::reference().unwrap();
    let camera = Camera::new(64, 48, 30.0).unwrap();
    let a = camera.render(&scene, &Tracer::new(2, ReflectionMode::Mirror).unwrap());
    let b = camera.render(&scene, &Tracer::new(2, ReflectionMode::Mirror).unwrap());
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_ppm_file_output() {
    let image = Camera::new(32, 24, 30.0).unwrap().render(&Scene::reference().unwrap(), &Tracer::default());
    let path = std::env::temp_dir().join(format!("sphere_tracer_it_render_{}.ppm", std::process::id()));

    PpmFile::new(&path).write(&image).unwrap();
    let written = std::fs::read(&path).unwrap();

    let mut expected = Vec::new();
    encode_ppm(&image, &mut expected).unwrap();
    assert_eq!(written, expected);
    assert!(written.starts_with(b"P6\n32 24\n255\n"));
    assert_eq!(written.len(), b"P6\n32 24\n255\n".len() + 32 * 24 * 3);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_overbright_pixels_saturate() {
    // Many lights on one sphere push channels well past 1.0
    let mut scene = Scene::new(Color::ZERO);
    scene.add_sphere(sphere_tracer::Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 3.0, Color::ONE).unwrap());
    for _ in 0..8 {
        scene.add_light(sphere_tracer::Light::new(Vec3A::new(0.0, 0.0, 10.0)));
    }

    let image = Camera::new(3, 3, 30.0).unwrap().render(&scene, &Tracer::default());
    assert!(image.get_pixel(1, 1)[0] > 1.0);

    let mut bytes = Vec::new();
    encode_ppm(&image, &mut bytes).unwrap();
    let header_len = b"P6\n3 3\n255\n".len();
    let center = header_len + (3 + 1) * 3;
    assert_eq!(&bytes[center..center + 3], &[255, 255, 255]);
}
