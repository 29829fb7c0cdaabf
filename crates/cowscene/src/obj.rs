//! Wavefront OBJ mesh loading.
//!
//! Only the statements the scene format can represent are parsed: vertices,
//! vertex normals, texture coordinates and faces. Grouping and material
//! statements are skipped (materials come from the scene document, not from
//! MTL files). Anything else is logged and ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::schema::{Face, FaceElement, MeshGeometry, TextureCoordinate, Vertex, VertexNormal};
use crate::{Error, Result};

/// Read an OBJ file from disk. The file handle is owned by this function and
/// released before it returns.
pub fn read_obj_file<P: AsRef<Path>>(path: P) -> Result<MeshGeometry> {
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Parse OBJ data from a reader.
///
/// Face elements follow the `v/vt/vn` convention; empty or missing
/// components are stored as index 0 (OBJ indices are 1-based, so 0 means
/// absent).
pub fn read_obj<R: BufRead>(reader: R) -> Result<MeshGeometry> {
    let mut geometry = MeshGeometry::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match keyword {
            "#" => {}
            "v" => geometry.vertices.push(parse_vertex(&args, line_number)?),
            "vn" => geometry
                .vertex_normals
                .push(parse_vertex_normal(&args, line_number)?),
            "vt" => geometry
                .texture_coordinates
                .push(parse_texture_coordinate(&args, line_number)?),
            "f" => geometry.faces.push(parse_face(&args, line_number)?),
            // Grouping is not represented in the schema.
            "g" | "o" | "s" => {}
            // Materials come from the scene document.
            "usemtl" | "mtllib" => {}
            other => {
                warn!("unknown OBJ statement {other:?} at line {line_number}, ignoring");
            }
        }
    }

    Ok(geometry)
}

fn parse_vertex(args: &[&str], line: usize) -> Result<Vertex> {
    if args.len() < 3 {
        return Err(Error::InvalidObj {
            line,
            reason: format!("vertex needs at least 3 coordinates, got {}", args.len()),
        });
    }

    Ok(Vertex {
        x: parse_float(args[0], line)?,
        y: parse_float(args[1], line)?,
        z: parse_float(args[2], line)?,
        w: match args.get(3) {
            Some(w) => parse_float(w, line)?,
            None => 1.0,
        },
    })
}

fn parse_vertex_normal(args: &[&str], line: usize) -> Result<VertexNormal> {
    if args.len() < 3 {
        return Err(Error::InvalidObj {
            line,
            reason: format!("vertex normal needs 3 components, got {}", args.len()),
        });
    }

    Ok(VertexNormal {
        x: parse_float(args[0], line)?,
        y: parse_float(args[1], line)?,
        z: parse_float(args[2], line)?,
    })
}

fn parse_texture_coordinate(args: &[&str], line: usize) -> Result<TextureCoordinate> {
    if args.is_empty() {
        return Err(Error::InvalidObj {
            line,
            reason: "texture coordinate needs at least 1 component".to_string(),
        });
    }

    Ok(TextureCoordinate {
        u: parse_float(args[0], line)?,
        v: match args.get(1) {
            Some(v) => parse_float(v, line)?,
            None => 0.0,
        },
        w: match args.get(2) {
            Some(w) => parse_float(w, line)?,
            None => 0.0,
        },
    })
}

fn parse_face(args: &[&str], line: usize) -> Result<Face> {
    let elements = args
        .iter()
        .map(|element| parse_face_element(element, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(Face { elements })
}

fn parse_face_element(element: &str, line: usize) -> Result<FaceElement> {
    let mut indices = element.split('/');

    Ok(FaceElement {
        vertex_index: parse_index(indices.next(), line)?,
        texture_index: parse_index(indices.next(), line)?,
        normal_index: parse_index(indices.next(), line)?,
    })
}

fn parse_index(component: Option<&str>, line: usize) -> Result<i32> {
    match component {
        None | Some("") => Ok(0),
        Some(index) => index.parse().map_err(|_| Error::InvalidObj {
            line,
            reason: format!("invalid index {index:?}"),
        }),
    }
}

fn parse_float(value: &str, line: usize) -> Result<f64> {
    value.parse().map_err(|_| Error::InvalidObj {
        line,
        reason: format!("invalid number {value:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triangle() {
        let obj = b"# a triangle\n\
                    v 0 0 0\n\
                    v 1 0 0 0.5\n\
                    v 0 1 0\n\
                    vn 0 0 1\n\
                    vt 0.25 0.75\n\
                    f 1/1/1 2//1 3\n" as &[u8];

        let geometry = read_obj(obj).unwrap();

        assert_eq!(geometry.vertices.len(), 3);
        assert_eq!(geometry.vertices[0].w, 1.0);
        assert_eq!(geometry.vertices[1].w, 0.5);
        assert_eq!(geometry.vertex_normals.len(), 1);
        assert_eq!(geometry.texture_coordinates[0].u, 0.25);

        let face = &geometry.faces[0];
        assert_eq!(face.elements.len(), 3);
        assert_eq!(face.elements[0].vertex_index, 1);
        assert_eq!(face.elements[0].texture_index, 1);
        assert_eq!(face.elements[0].normal_index, 1);
        assert_eq!(face.elements[1].texture_index, 0);
        assert_eq!(face.elements[1].normal_index, 1);
        assert_eq!(face.elements[2].texture_index, 0);
        assert_eq!(face.elements[2].normal_index, 0);
    }

    #[test]
    fn test_ignores_grouping_and_materials() {
        let obj = b"mtllib cow.mtl\no cow\ng body\ns off\nusemtl hide\nv 1 2 3\n" as &[u8];

        let geometry = read_obj(obj).unwrap();
        assert_eq!(geometry.vertices.len(), 1);
        assert_eq!(geometry.vertices[0].y, 2.0);
    }

    #[test]
    fn test_short_vertex_reports_line() {
        let obj = b"v 0 0 0\nv 1 2\n" as &[u8];

        let result = read_obj(obj);
        assert!(matches!(result, Err(Error::InvalidObj { line: 2, .. })));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let obj = b"v one two three\n" as &[u8];

        assert!(matches!(read_obj(obj), Err(Error::InvalidObj { line: 1, .. })));
    }
}
