use crate::pathtracer::accelerator::TriangleMesh;
use anyhow::Context;
use std::collections::HashMap;
use wavefront_obj::obj;

/// Loads every object of a wavefront OBJ file as a triangle mesh, one mesh
/// per object. Non-triangle primitives (points, lines) are skipped. Vertex
/// position/uv/normal index triples are flattened into a single index buffer.
pub fn load_obj(log: &slog::Logger, path: &str) -> anyhow::Result<Vec<TriangleMesh>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read OBJ file {:?}", path))?;
    let obj_set = obj::parse(contents).map_err(|e| {
        anyhow::anyhow!("could not parse OBJ file {:?} at line {}: {}", path, e.line_number, e.message)
    })?;

    let mut meshes = Vec::new();
    for object in &obj_set.objects {
        if object.geometry.is_empty() {
            continue;
        }

        let mut indices: Vec<u32> = Vec::new();
        let mut pos: Vec<na::Point3<f32>> = Vec::new();
        let mut normal: Vec<na::Vector3<f32>> = Vec::new();
        let mut uv: Vec<na::Point2<f32>> = Vec::new();
        let mut corner_map: HashMap<obj::VTNIndex, u32> = HashMap::new();

        let mut resolve = |vtn: obj::VTNIndex| -> u32 {
            if let Some(&idx) = corner_map.get(&vtn) {
                return idx;
            }
            let (vi, ti, ni) = vtn;
            let v = &object.vertices[vi];
            pos.push(na::Point3::new(v.x as f32, v.y as f32, v.z as f32));
            if let Some(ni) = ni {
                let n = &object.normals[ni];
                normal.push(na::Vector3::new(n.x as f32, n.y as f32, n.z as f32));
            }
            if let Some(ti) = ti {
                let t = &object.tex_vertices[ti];
                uv.push(na::Point2::new(t.u as f32, t.v as f32));
            }
            let idx = (pos.len() - 1) as u32;
            corner_map.insert(vtn, idx);
            idx
        };

        for geometry in &object.geometry {
            for shape in &geometry.shapes {
                if let obj::Primitive::Triangle(a, b, c) = shape.primitive {
                    indices.push(resolve(a));
                    indices.push(resolve(b));
                    indices.push(resolve(c));
                }
            }
        }

        if indices.is_empty() {
            continue;
        }

        // partially supplied attributes are worse than none
        if normal.len() != pos.len() {
            normal.clear();
        }
        if uv.len() != pos.len() {
            uv.clear();
        }

        debug!(
            log,
            "loaded obj object";
            "name" => object.name.as_str(),
            "triangles" => indices.len() / 3,
            "vertices" => pos.len(),
            "has_normals" => !normal.is_empty(),
        );

        meshes.push(TriangleMesh {
            indices,
            pos,
            normal,
            uv,
        });
    }

    if meshes.is_empty() {
        anyhow::bail!("OBJ file {:?} contains no triangle geometry", path);
    }

    Ok(meshes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_log() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    fn write_temp_obj(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "spectray_importer_test_{}.obj",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_simple_quad() {
        let path = write_temp_obj(
            "o quad\n\
             v -1.0 0.0 -1.0\n\
             v 1.0 0.0 -1.0\n\
             v 1.0 0.0 1.0\n\
             v -1.0 0.0 1.0\n\
             vn 0.0 1.0 0.0\n\
             f 1//1 2//1 3//1\n\
             f 1//1 3//1 4//1\n",
        );
        let meshes = load_obj(&test_log(), path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(meshes.len(), 1);
        let mesh = &meshes[0];
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.pos.len(), 4);
        assert_eq!(mesh.normal.len(), 4);
        assert_eq!(mesh.normal[0], na::Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_obj(&test_log(), "/nonexistent/missing.obj").is_err());
    }
}
