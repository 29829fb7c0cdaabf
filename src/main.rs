//! Cowscene CLI - command-line tool for cowscene 3D scene files.
//!
//! This is the main entry point for the cowscene command-line application.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use cowscene::{
    camera, material, scene_object, Camera, Material, MeshedObject, PerspectiveCamera, Scene,
    SceneObject, SolidMaterial, Transform, Vector3,
};

/// Cowscene - create, convert and inspect cowscene 3D scene files
#[derive(Parser)]
#[command(name = "cowscene")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the demonstration scene and round-trip it through both encodings
    Example {
        /// Directory to write the example files into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Convert a scene file between the binary and JSON encodings
    Convert {
        /// Input scene file (either encoding)
        #[arg(short, long)]
        input: PathBuf,

        /// Output scene file
        #[arg(short, long)]
        output: PathBuf,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print a summary of a scene file
    Info {
        /// Input scene file (either encoding)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Binary,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Example { dir } => run_example(&dir),
        Commands::Convert {
            input,
            output,
            format,
        } => run_convert(&input, &output, format),
        Commands::Info { input } => run_info(&input),
    }
}

fn run_example(dir: &Path) -> Result<()> {
    let scene = example_scene();

    let binary_path = dir.join("example_binary.cowscene");
    let json_path = dir.join("example_json.cowscene");

    cowscene::save_file(&scene, &binary_path)
        .with_context(|| format!("failed to save {}", binary_path.display()))?;
    cowscene::save_json_file(&scene, &json_path)
        .with_context(|| format!("failed to save {}", json_path.display()))?;

    let read_result_binary = cowscene::read_file(&binary_path)
        .with_context(|| format!("failed to read {}", binary_path.display()))?;
    println!(
        "Camera X is {} when reading binary",
        camera_x(&read_result_binary)?
    );

    let read_result_json = cowscene::read_file(&json_path)
        .with_context(|| format!("failed to read {}", json_path.display()))?;
    println!(
        "Camera X is {} when reading json",
        camera_x(&read_result_json)?
    );

    Ok(())
}

fn run_convert(input: &Path, output: &Path, format: Format) -> Result<()> {
    let scene = cowscene::read_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    match format {
        Format::Binary => cowscene::save_file(&scene, output),
        Format::Json => cowscene::save_json_file(&scene, output),
    }
    .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}

fn run_info(input: &Path) -> Result<()> {
    let scene = cowscene::read_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    println!("version:       {}", scene.version);
    println!("scene objects: {}", scene.scene_objects.len());
    println!("cameras:       {}", scene.cameras.len());
    println!("lights:        {}", scene.lights.len());
    println!("materials:     {}", scene.materials.len());
    if let Some(options) = &scene.render_options {
        println!(
            "render:        {}x{} from camera {}",
            options.width, options.height, options.camera_id
        );
    }

    Ok(())
}

/// The demonstration scene: one solid-material object at (1, 1, 1) and one
/// perspective camera at (1.01, 2.76, 3.0).
fn example_scene() -> Scene {
    Scene {
        version: 1,
        scene_objects: vec![SceneObject {
            id: 0,
            transform: Some(Transform {
                position: Some(Vector3 { x: 1.0, y: 1.0, z: 1.0 }),
                ..Default::default()
            }),
            object_material: Some(scene_object::ObjectMaterial::Material(Material {
                id: String::new(),
                material: Some(material::Material::Solid(SolidMaterial::default())),
            })),
            mesh: Some(scene_object::Mesh::MeshedObject(MeshedObject::default())),
        }],
        cameras: vec![Camera {
            id: 0,
            transform: Some(Transform {
                position: Some(Vector3 { x: 1.01, y: 2.76, z: 3.0 }),
                ..Default::default()
            }),
            camera: Some(camera::Camera::Perspective(PerspectiveCamera { fov: 60.0 })),
        }],
        ..Default::default()
    }
}

fn camera_x(scene: &Scene) -> Result<f64> {
    scene
        .cameras
        .first()
        .and_then(|camera| camera.transform.as_ref())
        .and_then(|transform| transform.position.as_ref())
        .map(|position| position.x)
        .context("scene has no camera position")
}
