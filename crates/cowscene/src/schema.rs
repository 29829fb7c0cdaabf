//! Message types for the cowscene schema.
//!
//! These are hand-maintained prost types mirroring `scene.proto`, kept in
//! source form so the crate builds without a protoc toolchain. Field tags are
//! part of the wire contract and must never be renumbered. Every message also
//! derives serde with camelCase field names, which is what drives the JSON
//! text encoding.

/// Root scene document: version, render options, objects, cameras, lights
/// and the shared material table.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_options: ::core::option::Option<RenderOptions>,
    #[prost(message, repeated, tag = "3")]
    pub scene_objects: ::prost::alloc::vec::Vec<SceneObject>,
    #[prost(message, repeated, tag = "4")]
    pub cameras: ::prost::alloc::vec::Vec<Camera>,
    #[prost(message, repeated, tag = "5")]
    pub lights: ::prost::alloc::vec::Vec<Light>,
    #[prost(message, repeated, tag = "6")]
    pub materials: ::prost::alloc::vec::Vec<Material>,
}

/// Rendering parameters attached to a scene: which camera to render from and
/// the output dimensions.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    #[prost(int32, tag = "1")]
    pub camera_id: i32,
    #[prost(int32, tag = "2")]
    pub width: i32,
    #[prost(int32, tag = "3")]
    pub height: i32,
    #[prost(message, repeated, tag = "4")]
    pub custom_properties: ::prost::alloc::vec::Vec<CustomProperty>,
}

/// Free-form renderer-specific setting.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomProperty {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vector3 {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

/// RGB color with unbounded non-negative channels (values above 1.0 are
/// meaningful for emissive use).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Color {
    #[prost(double, tag = "1")]
    pub r: f64,
    #[prost(double, tag = "2")]
    pub g: f64,
    #[prost(double, tag = "3")]
    pub b: f64,
}

/// Placement of an entity in 3D space. `parent_id` of 0 means no parent.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transform {
    #[prost(int32, tag = "1")]
    pub parent_id: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: ::core::option::Option<Vector3>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: ::core::option::Option<Vector3>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: ::core::option::Option<Vector3>,
}

/// A renderable entity: identity, placement, a material (inline or by
/// reference into the scene's material table) and a geometry variant.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneObject {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: ::core::option::Option<Transform>,
    #[prost(oneof = "scene_object::ObjectMaterial", tags = "3, 4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_material: ::core::option::Option<scene_object::ObjectMaterial>,
    #[prost(oneof = "scene_object::Mesh", tags = "5, 6, 7, 8, 9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: ::core::option::Option<scene_object::Mesh>,
}

/// Nested oneof types for [`SceneObject`].
pub mod scene_object {
    /// Either an inline material or a reference into `Scene::materials`.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum ObjectMaterial {
        #[prost(message, tag = "3")]
        Material(super::Material),
        #[prost(string, tag = "4")]
        MaterialId(::prost::alloc::string::String),
    }

    /// Geometry variant of a scene object.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Mesh {
        #[prost(message, tag = "5")]
        Sphere(super::Sphere),
        #[prost(message, tag = "6")]
        Cube(super::Cube),
        #[prost(message, tag = "7")]
        Plane(super::Plane),
        #[prost(message, tag = "8")]
        Disk(super::Disk),
        #[prost(message, tag = "9")]
        MeshedObject(super::MeshedObject),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sphere {
    #[prost(double, tag = "1")]
    pub radius: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cube {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: ::core::option::Option<Vector3>,
}

/// Infinite plane through the object's transform, facing its local up axis.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plane {}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disk {
    #[prost(double, tag = "1")]
    pub radius: f64,
}

/// Mesh geometry loaded from an external OBJ file. `reference` is the path
/// to the OBJ as written in the document; `obj` holds the loaded geometry
/// once the reference has been resolved.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshedObject {
    #[prost(string, tag = "1")]
    pub reference: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj: ::core::option::Option<MeshGeometry>,
}

/// Triangle-soup geometry in the OBJ model: positions, normals, texture
/// coordinates and faces indexing into them (1-based, 0 = absent).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshGeometry {
    #[prost(message, repeated, tag = "1")]
    pub vertices: ::prost::alloc::vec::Vec<Vertex>,
    #[prost(message, repeated, tag = "2")]
    pub vertex_normals: ::prost::alloc::vec::Vec<VertexNormal>,
    #[prost(message, repeated, tag = "3")]
    pub texture_coordinates: ::prost::alloc::vec::Vec<TextureCoordinate>,
    #[prost(message, repeated, tag = "4")]
    pub faces: ::prost::alloc::vec::Vec<Face>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vertex {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
    #[prost(double, tag = "4")]
    pub w: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VertexNormal {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextureCoordinate {
    #[prost(double, tag = "1")]
    pub u: f64,
    #[prost(double, tag = "2")]
    pub v: f64,
    #[prost(double, tag = "3")]
    pub w: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Face {
    #[prost(message, repeated, tag = "1")]
    pub elements: ::prost::alloc::vec::Vec<FaceElement>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceElement {
    #[prost(int32, tag = "1")]
    pub vertex_index: i32,
    #[prost(int32, tag = "2")]
    pub texture_index: i32,
    #[prost(int32, tag = "3")]
    pub normal_index: i32,
}

/// Surface material. `id` is only meaningful for entries in the scene's
/// material table; inline materials leave it empty.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Material {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(oneof = "material::Material", tags = "2, 3, 4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: ::core::option::Option<material::Material>,
}

/// Nested oneof types for [`Material`].
pub mod material {
    /// Material variant.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Material {
        #[prost(message, tag = "2")]
        Solid(super::SolidMaterial),
        #[prost(message, tag = "3")]
        LambertReflection(super::LambertReflectionMaterial),
        #[prost(message, tag = "4")]
        SpecularReflection(super::SpecularReflectionMaterial),
    }
}

/// Flat unlit color.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolidMaterial {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: ::core::option::Option<Color>,
}

/// Ideal diffuse reflector.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LambertReflectionMaterial {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: ::core::option::Option<Color>,
}

/// Perfect mirror with index of refraction `eta`.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecularReflectionMaterial {
    #[prost(double, tag = "1")]
    pub eta: f64,
}

/// Viewpoint with identity, placement and a projection variant.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Camera {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: ::core::option::Option<Transform>,
    #[prost(oneof = "camera::Camera", tags = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: ::core::option::Option<camera::Camera>,
}

/// Nested oneof types for [`Camera`].
pub mod camera {
    /// Projection variant.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Camera {
        #[prost(message, tag = "3")]
        Perspective(super::PerspectiveCamera),
    }
}

/// Perspective projection; `fov` is the vertical field of view in degrees.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerspectiveCamera {
    #[prost(double, tag = "1")]
    pub fov: f64,
}

/// Light source. Direction and placement come from the transform; `color`
/// applies to every variant.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Light {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: ::core::option::Option<Transform>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: ::core::option::Option<Color>,
    #[prost(oneof = "light::Light", tags = "4, 5, 6, 7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: ::core::option::Option<light::Light>,
}

/// Nested oneof types for [`Light`].
pub mod light {
    /// Light variant.
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Light {
        #[prost(message, tag = "4")]
        Point(super::PointLight),
        #[prost(message, tag = "5")]
        Directional(super::DirectionalLight),
        #[prost(message, tag = "6")]
        Sphere(super::SphereLight),
        #[prost(message, tag = "7")]
        Environment(super::EnvironmentLight),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointLight {}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectionalLight {}

/// Spherical area light.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SphereLight {
    #[prost(double, tag = "1")]
    pub radius: f64,
}

/// Image-based environment light surrounding the scene.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentLight {}
