//! Resolution of external mesh references.
//!
//! Scene documents may point at Wavefront OBJ files instead of embedding
//! geometry. After a path-based read the references are joined onto the
//! scene file's directory and the geometry is loaded in place.

use std::path::Path;

use crate::schema::{scene_object, Scene};
use crate::{obj, Error, Result};

/// Load every referenced OBJ mesh in the scene, resolving references
/// relative to `base_dir`. References are rewritten to the joined path so
/// the caller sees where the geometry actually came from. Objects with an
/// empty reference (or geometry that is already embedded) are left alone.
pub(crate) fn resolve_references(scene: &mut Scene, base_dir: &Path) -> Result<()> {
    for object in &mut scene.scene_objects {
        let Some(scene_object::Mesh::MeshedObject(meshed)) = &mut object.mesh else {
            continue;
        };
        if meshed.reference.is_empty() {
            continue;
        }

        let path = base_dir.join(&meshed.reference);
        meshed.reference = path
            .to_str()
            .ok_or_else(|| {
                Error::InvalidDocument(format!(
                    "mesh reference {:?} is not valid UTF-8 once joined with the scene directory",
                    meshed.reference
                ))
            })?
            .to_string();
        meshed.obj = Some(obj::read_obj_file(&path)?);
    }

    Ok(())
}
