//! JSON text-encoding support.
//!
//! The serde representation of the schema nests oneof members under the
//! oneof field name (`{"mesh": {"sphere": {...}}}`), while canonical
//! protobuf JSON written by other scene-format implementations flattens them
//! into the containing message (`{"sphere": {...}}`). Before the typed
//! decode we normalize documents to the nested form, so both spellings are
//! accepted. Encoding always produces the nested form.

use serde_json::{Map, Value};

use crate::{Error, Result};

const MESH_MEMBERS: &[&str] = &["sphere", "cube", "plane", "disk", "meshedObject"];
const OBJECT_MATERIAL_MEMBERS: &[&str] = &["material", "materialId"];
const MATERIAL_MEMBERS: &[&str] = &["solid", "lambertReflection", "specularReflection"];
const CAMERA_MEMBERS: &[&str] = &["perspective"];
const LIGHT_MEMBERS: &[&str] = &["point", "directional", "sphere", "environment"];

/// Normalize a parsed JSON document into the nested-oneof form expected by
/// the typed decode.
pub(crate) fn normalize_document(value: &mut Value) -> Result<()> {
    let scene = as_object_mut(value, "scene")?;

    for_each_element(scene, "sceneObjects", |object| {
        lift_oneof(object, "objectMaterial", OBJECT_MATERIAL_MEMBERS);
        lift_oneof(object, "mesh", MESH_MEMBERS);

        if let Some(Value::Object(object_material)) = object.get_mut("objectMaterial") {
            if let Some(material) = object_material.get_mut("material") {
                normalize_material(material)?;
            }
        }
        Ok(())
    })?;

    for_each_element(scene, "cameras", |camera| {
        lift_oneof(camera, "camera", CAMERA_MEMBERS);
        Ok(())
    })?;

    for_each_element(scene, "lights", |light| {
        lift_oneof(light, "light", LIGHT_MEMBERS);
        Ok(())
    })?;

    for_each_element(scene, "materials", normalize_material_object)?;

    Ok(())
}

fn normalize_material(material: &mut Value) -> Result<()> {
    let material = as_object_mut(material, "material")?;
    normalize_material_object(material)
}

fn normalize_material_object(material: &mut Map<String, Value>) -> Result<()> {
    lift_oneof(material, "material", MATERIAL_MEMBERS);
    Ok(())
}

/// Move a flattened oneof member under its oneof field name. Documents
/// already in nested form (or with no member set) are left untouched.
fn lift_oneof(object: &mut Map<String, Value>, field: &str, members: &[&str]) {
    if object.contains_key(field) {
        return;
    }

    for member in members {
        if let Some(value) = object.remove(*member) {
            let mut wrapped = Map::new();
            wrapped.insert((*member).to_string(), value);
            object.insert(field.to_string(), Value::Object(wrapped));
            return;
        }
    }
}

fn for_each_element<F>(scene: &mut Map<String, Value>, field: &str, mut normalize: F) -> Result<()>
where
    F: FnMut(&mut Map<String, Value>) -> Result<()>,
{
    let Some(value) = scene.get_mut(field) else {
        return Ok(());
    };

    let Value::Array(elements) = value else {
        return Err(Error::InvalidDocument(format!(
            "expected \"{field}\" to be an array"
        )));
    };

    for element in elements {
        let element = as_object_mut(element, field)?;
        normalize(element)?;
    }

    Ok(())
}

fn as_object_mut<'a>(value: &'a mut Value, what: &str) -> Result<&'a mut Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(Error::InvalidDocument(format!(
            "expected \"{what}\" to be an object"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{camera, material, scene_object, Scene};

    // Flattened protobuf-JSON spelling, as written by the C#/Java/C++
    // implementations of the format.
    const FLATTENED: &str = r#"{
        "version": 1,
        "sceneObjects": [
            {
                "id": 1,
                "material": { "solid": { "color": { "r": 1.0, "g": 0.5, "b": 0.0 } } },
                "sphere": { "radius": 2.0 }
            },
            {
                "id": 2,
                "materialId": "floor",
                "plane": {}
            }
        ],
        "cameras": [
            { "id": 3, "perspective": { "fov": 60.0 } }
        ],
        "lights": [
            { "id": 4, "directional": {} }
        ],
        "materials": [
            { "id": "floor", "lambertReflection": { "color": { "r": 1.0, "g": 1.0, "b": 1.0 } } }
        ]
    }"#;

    #[test]
    fn test_flattened_oneofs_are_lifted() {
        let scene = crate::decode_str(FLATTENED).unwrap();

        assert!(matches!(
            scene.scene_objects[0].mesh,
            Some(scene_object::Mesh::Sphere(ref sphere)) if sphere.radius == 2.0
        ));
        assert!(matches!(
            scene.scene_objects[0].object_material,
            Some(scene_object::ObjectMaterial::Material(ref m))
                if matches!(m.material, Some(material::Material::Solid(_)))
        ));
        assert!(matches!(
            scene.scene_objects[1].object_material,
            Some(scene_object::ObjectMaterial::MaterialId(ref id)) if id == "floor"
        ));
        assert!(matches!(
            scene.cameras[0].camera,
            Some(camera::Camera::Perspective(ref p)) if p.fov == 60.0
        ));
        assert!(scene.lights[0].light.is_some());
        assert!(matches!(
            scene.materials[0].material,
            Some(material::Material::LambertReflection(_))
        ));
    }

    #[test]
    fn test_flattened_and_nested_decode_equal() {
        let scene = crate::decode_str(FLATTENED).unwrap();
        let nested = crate::encode_json(&scene).unwrap();

        assert_eq!(scene, crate::decode_str(&nested).unwrap());
    }

    #[test]
    fn test_nested_form_passes_through() {
        let scene = Scene {
            version: 1,
            ..Default::default()
        };
        let json = crate::encode_json(&scene).unwrap();

        assert_eq!(scene, crate::decode_str(&json).unwrap());
    }
}
