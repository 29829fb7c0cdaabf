//! Reading and writing scene documents.
//!
//! A cowscene document is either the protobuf wire encoding of [`Scene`] or
//! its JSON text encoding. Both conventionally use the `.cowscene`
//! extension, so readers detect the format from the content: try JSON
//! first, fall back to binary.
//!
//! The detection is the same heuristic every implementation of the format
//! uses, and it is fragile by design: a binary payload that happened to be
//! well-formed JSON would be misread as the text encoding. The wire
//! encoding of this schema never starts with `{`, so the two sets do not
//! overlap in practice, but keep the policy in mind when extending the
//! schema.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use prost::Message;

use crate::schema::Scene;
use crate::{json, resolve, Error, Result};

/// Decode a scene from bytes of unknown encoding.
///
/// Mesh references are left unresolved; use [`read_file`] or
/// [`decode_with_context`] to load referenced OBJ geometry.
pub fn decode(data: &[u8]) -> Result<Scene> {
    decode_with_context(data, None)
}

/// Decode a scene from text. The text is treated as its UTF-8 byte
/// encoding, so binary fallback still applies.
pub fn decode_str(text: &str) -> Result<Scene> {
    decode(text.as_bytes())
}

/// Decode a scene from bytes, resolving mesh references against `base_dir`
/// if one is given.
///
/// Input that parses as JSON but does not describe a scene document is a
/// decode error; the binary fallback is only taken when the bytes are not
/// well-formed JSON at all. If both interpretations fail, the returned
/// error carries both causes.
pub fn decode_with_context(data: &[u8], base_dir: Option<&Path>) -> Result<Scene> {
    let mut scene = match serde_json::from_slice::<serde_json::Value>(data) {
        Ok(mut document) => {
            json::normalize_document(&mut document)?;
            serde_json::from_value(document)?
        }
        Err(json_error) => {
            debug!("input is not valid JSON ({json_error}), trying binary");
            Scene::decode(data).map_err(|binary_error| Error::MalformedInput {
                json: json_error.to_string(),
                binary: binary_error.to_string(),
            })?
        }
    };

    if let Some(base_dir) = base_dir {
        resolve::resolve_references(&mut scene, base_dir)?;
    }

    Ok(scene)
}

/// Read a scene from a caller-supplied reader, consuming it to exhaustion.
/// The reader is borrowed and never closed by this function.
pub fn read<R: Read>(reader: &mut R) -> Result<Scene> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data)
}

/// Read a scene file from disk. Mesh references are resolved relative to
/// the file's parent directory; the file handle is owned by this function
/// and released on every exit path.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    decode_with_context(&data, path.parent())
}

/// Encode a scene to the binary wire format. No framing, header or magic is
/// added.
pub fn encode(scene: &Scene) -> Vec<u8> {
    scene.encode_to_vec()
}

/// Encode a scene to the JSON text encoding (pretty-printed, stable
/// camelCase field names).
pub fn encode_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}

/// Write the binary encoding into a caller-supplied writer. The writer is
/// borrowed; it is neither flushed nor closed.
pub fn save<W: Write>(scene: &Scene, writer: &mut W) -> Result<()> {
    writer.write_all(&encode(scene))?;
    Ok(())
}

/// Save the binary encoding to a file, creating or truncating it.
pub fn save_file<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    save(scene, &mut file)
}

/// Write the JSON text encoding into a caller-supplied writer as UTF-8.
/// The writer is borrowed; it is neither flushed nor closed.
pub fn save_json<W: Write>(scene: &Scene, writer: &mut W) -> Result<()> {
    writer.write_all(encode_json(scene)?.as_bytes())?;
    Ok(())
}

/// Save the JSON text encoding to a file, creating or truncating it.
pub fn save_json_file<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    save_json(scene, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        camera, light, material, scene_object, Camera, Color, Cube, CustomProperty,
        DirectionalLight, Disk, LambertReflectionMaterial, Light, Material, MeshedObject,
        PerspectiveCamera, Plane, PointLight, RenderOptions, SceneObject, SolidMaterial,
        SpecularReflectionMaterial, Sphere, SphereLight, Transform, Vector3,
    };

    fn position(x: f64, y: f64, z: f64) -> Option<Transform> {
        Some(Transform {
            position: Some(Vector3 { x, y, z }),
            ..Default::default()
        })
    }

    /// The demonstration scene every implementation of the format ships.
    fn example_scene() -> Scene {
        Scene {
            version: 1,
            scene_objects: vec![SceneObject {
                id: 0,
                transform: position(1.0, 1.0, 1.0),
                object_material: Some(scene_object::ObjectMaterial::Material(Material {
                    id: String::new(),
                    material: Some(material::Material::Solid(SolidMaterial::default())),
                })),
                mesh: Some(scene_object::Mesh::MeshedObject(MeshedObject::default())),
            }],
            cameras: vec![Camera {
                id: 0,
                transform: position(1.01, 2.76, 3.0),
                camera: Some(camera::Camera::Perspective(PerspectiveCamera { fov: 60.0 })),
            }],
            ..Default::default()
        }
    }

    /// A scene exercising every variant in the schema.
    fn full_scene() -> Scene {
        Scene {
            version: 1,
            render_options: Some(RenderOptions {
                camera_id: 10,
                width: 1920,
                height: 1080,
                custom_properties: vec![CustomProperty {
                    name: "samples".to_string(),
                    value: "256".to_string(),
                }],
            }),
            scene_objects: vec![
                SceneObject {
                    id: 1,
                    transform: position(0.0, 1.0, 0.0),
                    object_material: Some(scene_object::ObjectMaterial::MaterialId(
                        "mirror".to_string(),
                    )),
                    mesh: Some(scene_object::Mesh::Sphere(Sphere { radius: 0.5 })),
                },
                SceneObject {
                    id: 2,
                    mesh: Some(scene_object::Mesh::Cube(Cube {
                        size: Some(Vector3 { x: 1.0, y: 2.0, z: 3.0 }),
                    })),
                    ..Default::default()
                },
                SceneObject {
                    id: 3,
                    mesh: Some(scene_object::Mesh::Plane(Plane {})),
                    ..Default::default()
                },
                SceneObject {
                    id: 4,
                    mesh: Some(scene_object::Mesh::Disk(Disk { radius: 2.5 })),
                    ..Default::default()
                },
            ],
            cameras: vec![Camera {
                id: 10,
                transform: position(0.0, 1.5, -4.0),
                camera: Some(camera::Camera::Perspective(PerspectiveCamera { fov: 45.0 })),
            }],
            lights: vec![
                Light {
                    id: 20,
                    transform: position(0.0, 5.0, 0.0),
                    color: Some(Color { r: 1.0, g: 0.9, b: 0.8 }),
                    light: Some(light::Light::Point(PointLight {})),
                },
                Light {
                    id: 21,
                    light: Some(light::Light::Directional(DirectionalLight {})),
                    ..Default::default()
                },
                Light {
                    id: 22,
                    light: Some(light::Light::Sphere(SphereLight { radius: 0.25 })),
                    ..Default::default()
                },
            ],
            materials: vec![
                Material {
                    id: "mirror".to_string(),
                    material: Some(material::Material::SpecularReflection(
                        SpecularReflectionMaterial { eta: 1.5 },
                    )),
                },
                Material {
                    id: "wall".to_string(),
                    material: Some(material::Material::LambertReflection(
                        LambertReflectionMaterial {
                            color: Some(Color { r: 0.8, g: 0.8, b: 0.8 }),
                        },
                    )),
                },
            ],
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let scene = full_scene();
        assert_eq!(scene, decode(&encode(&scene)).unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let scene = full_scene();
        assert_eq!(scene, decode_str(&encode_json(&scene).unwrap()).unwrap());
    }

    #[test]
    fn test_binary_fallback_on_non_utf8_input() {
        let scene = example_scene();
        let data = encode(&scene);

        // The double 1.01 alone guarantees invalid UTF-8 in the wire bytes,
        // so this decode must go through the binary fallback.
        assert!(std::str::from_utf8(&data).is_err());
        assert_eq!(scene, decode(&data).unwrap());
    }

    #[test]
    fn test_garbage_is_malformed_input() {
        let result = decode(b"\xff\xff\xffnot a scene");
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_json_that_is_not_a_scene_is_rejected() {
        assert!(matches!(
            decode_str("[1, 2, 3]"),
            Err(Error::InvalidDocument(_))
        ));
        assert!(matches!(
            decode_str(r#"{"version": "one"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            decode_str(r#"{"cameras": 7}"#),
            Err(Error::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_stream_round_trip_borrows_the_stream() {
        let scene = full_scene();

        let mut buffer = Vec::new();
        save(&scene, &mut buffer).unwrap();
        let mut cursor = std::io::Cursor::new(&buffer);
        assert_eq!(scene, read(&mut cursor).unwrap());

        let mut text = Vec::new();
        save_json(&scene, &mut text).unwrap();
        let mut cursor = std::io::Cursor::new(&text);
        assert_eq!(scene, read(&mut cursor).unwrap());
    }

    #[test]
    fn test_save_file_then_read_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let scene = full_scene();

        let binary_path = dir.path().join("scene_binary.cowscene");
        save_file(&scene, &binary_path).unwrap();
        assert_eq!(scene, read_file(&binary_path).unwrap());

        let json_path = dir.path().join("scene_json.cowscene");
        save_json_file(&scene, &json_path).unwrap();
        assert_eq!(scene, read_file(&json_path).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(dir.path().join("does-not-exist.cowscene"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_example_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let scene = example_scene();

        save_file(&scene, dir.path().join("example_binary.cowscene")).unwrap();
        save_json_file(&scene, dir.path().join("example_json.cowscene")).unwrap();

        for name in ["example_binary.cowscene", "example_json.cowscene"] {
            let loaded = read_file(dir.path().join(name)).unwrap();
            assert_eq!(scene, loaded);

            let camera_x = loaded.cameras[0]
                .transform
                .as_ref()
                .unwrap()
                .position
                .as_ref()
                .unwrap()
                .x;
            assert_eq!(camera_x, 1.01);
        }
    }
}
