//! Print a summary of a COLLADA document
//!
//! Usage: `cargo run --example collada_info -- scene.dae`
//!
//! Zipped `.zae` archives are accepted as well. Set `RUST_LOG=debug` to see
//! what the reader assembles, or `RUST_LOG=trace` to follow every element.

use collada::{ColorOrTexture, Document, LightSource, Projection};
use std::env;
use std::fs::File;
use std::path::Path;
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <scene.dae|scene.zae>", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let is_zae = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zae"));
    let document = if is_zae {
        Document::from_zae(File::open(path)?)?
    } else {
        Document::from_path(path)?
    };

    println!("=== {} ===", path.display());
    println!("Libraries: {}\n", document.library_count());

    print_images(&document);
    print_materials(&document);
    print_geometries(&document);
    print_cameras(&document);
    print_lights(&document);

    Ok(())
}

fn label(id: &Option<String>) -> &str {
    id.as_deref().unwrap_or("<unnamed>")
}

fn print_images(document: &Document) {
    println!("Images: {}", document.images().count());
    for image in document.images() {
        let reference = image
            .source
            .as_ref()
            .and_then(|source| source.reference.as_ref())
            .map(|uri| uri.as_str())
            .unwrap_or("-");
        println!("  {} -> {}", label(&image.id), reference);
    }
}

fn print_materials(document: &Document) {
    println!("Materials: {}", document.materials().count());
    for material in document.materials() {
        let effect = material
            .effect_instance
            .as_ref()
            .and_then(|instance| instance.url.fragment())
            .and_then(|id| document.effect(id));
        let Some(profile) = effect.and_then(|effect| effect.common_profile()) else {
            println!("  {} (no common profile)", label(&material.id));
            continue;
        };
        let shader = &profile.technique.shader;
        let diffuse = match &shader.diffuse {
            Some(ColorOrTexture::Color(c)) => format!("rgba({}, {}, {}, {})", c.red, c.green, c.blue, c.alpha),
            Some(ColorOrTexture::Texture(t)) => format!("texture '{}'", t.texture),
            None => "-".to_string(),
        };
        println!("  {} [{}] diffuse {}", label(&material.id), shader.model.tag_name(), diffuse);
    }
}

fn print_geometries(document: &Document) {
    println!("Geometries: {}", document.geometries().count());
    for geometry in document.geometries() {
        let Some(mesh) = &geometry.mesh else {
            println!("  {} (not a mesh)", label(&geometry.id));
            continue;
        };
        let floats: usize = mesh
            .sources
            .iter()
            .filter_map(|source| source.float_array())
            .map(|array| array.values.len())
            .sum();
        let triangles: usize = mesh.triangles().map(|t| t.count).sum();
        println!(
            "  {}: {} sources, {} floats, {} triangles",
            label(&geometry.id),
            mesh.sources.len(),
            floats,
            triangles
        );
    }
}

fn print_cameras(document: &Document) {
    println!("Cameras: {}", document.cameras().count());
    for camera in document.cameras() {
        let kind = match camera.projection {
            Projection::Perspective(_) => "perspective",
            Projection::Orthographic(_) => "orthographic",
        };
        println!(
            "  {} {} near {} far {}",
            label(&camera.id),
            kind,
            camera.projection.znear().value,
            camera.projection.zfar().value
        );
    }
}

fn print_lights(document: &Document) {
    println!("Lights: {}", document.lights().count());
    for light in document.lights() {
        let color = light.source.color();
        let extra = match &light.source {
            LightSource::Spot(spot) => format!(" falloff {}", spot.falloff_angle.value),
            _ => String::new(),
        };
        println!(
            "  {} {} rgb({}, {}, {}){}",
            label(&light.id),
            light.source.kind().tag_name(),
            color.red,
            color.green,
            color.blue,
            extra
        );
    }
}
