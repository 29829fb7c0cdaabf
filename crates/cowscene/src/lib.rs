//! Reader and writer for the cowscene 3D scene interchange format.
//!
//! A cowscene document describes a renderable scene: a version number,
//! scene objects (each with a transform, a material and a geometry
//! variant), cameras, lights and a shared material table. The schema is
//! protobuf-defined; documents exist in two encodings that share the
//! `.cowscene` extension:
//!
//! - **binary** - the compact protobuf wire format
//! - **JSON** - the human-readable text form with stable field names
//!
//! Readers never need to know which encoding they are given: [`decode`]
//! tries the text form first and falls back to binary.
//!
//! # Example
//!
//! ```no_run
//! use cowscene::{camera, Camera, PerspectiveCamera, Scene, Transform, Vector3};
//!
//! let scene = Scene {
//!     version: 1,
//!     cameras: vec![Camera {
//!         id: 0,
//!         transform: Some(Transform {
//!             position: Some(Vector3 { x: 1.01, y: 2.76, z: 3.0 }),
//!             ..Default::default()
//!         }),
//!         camera: Some(camera::Camera::Perspective(PerspectiveCamera { fov: 60.0 })),
//!     }],
//!     ..Default::default()
//! };
//!
//! cowscene::save_file(&scene, "example_binary.cowscene")?;
//! cowscene::save_json_file(&scene, "example_json.cowscene")?;
//!
//! // Either file reads back identically; the format is detected from the
//! // content, not the name.
//! let loaded = cowscene::read_file("example_json.cowscene")?;
//! assert_eq!(scene, loaded);
//! # Ok::<(), cowscene::Error>(())
//! ```

mod error;
mod io;
mod json;
mod resolve;

pub mod obj;
pub mod schema;

pub use error::{Error, Result};
pub use io::{
    decode, decode_str, decode_with_context, encode, encode_json, read, read_file, save,
    save_file, save_json, save_json_file,
};

// Schema types are re-exported at the crate root, oneof modules included.
pub use schema::*;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
