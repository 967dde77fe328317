use crate::common::bounds::Bounds3;
use crate::common::math::*;
use crate::common::ray::Ray;
use std::sync::Arc;

/// Indexed triangle soup with optional per-vertex shading attributes.
pub struct TriangleMesh {
    pub indices: Vec<u32>,
    pub pos: Vec<na::Point3<f32>>,
    pub normal: Vec<na::Vector3<f32>>,
    pub uv: Vec<na::Point2<f32>>,
}

impl TriangleMesh {
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn world_bound(&self, obj_to_world: &na::Projective3<f32>) -> Bounds3 {
        let mut bound = Bounds3::empty();
        for p in &self.pos {
            bound = Bounds3::union_p(&bound, &(obj_to_world * p));
        }
        bound
    }
}

/// Closest-hit query result. Ids identify the instance, the geometry within
/// its bottom level structure, and the triangle within that geometry;
/// `barycentric` holds the (b1, b2) weights of the second and third vertices.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub t: f32,
    pub barycentric: na::Point2<f32>,
    pub instance_id: u32,
    pub geometry_id: u32,
    pub primitive_id: u32,
}

/// Factory for acceleration structures, mirroring a device-centric
/// ray tracing API. The in-crate traversal is deliberately brute force;
/// the structures exist for their commit-then-intersect contract.
pub struct Device {
    log: slog::Logger,
}

impl Device {
    pub fn new(log: &slog::Logger) -> Self {
        let log = log.new(o!("module" => "accelerator"));
        Self { log }
    }

    pub fn create_bottom_level(&self) -> BottomLevelAccelerationStructure {
        BottomLevelAccelerationStructure {
            geometries: vec![],
            generated: false,
            log: self.log.clone(),
        }
    }

    pub fn create_top_level(&self) -> TopLevelAccelerationStructure {
        TopLevelAccelerationStructure {
            instances: vec![],
            generated: false,
            log: self.log.clone(),
        }
    }
}

pub struct BottomLevelAccelerationStructure {
    geometries: Vec<Arc<TriangleMesh>>,
    generated: bool,
    log: slog::Logger,
}

impl BottomLevelAccelerationStructure {
    pub fn add_geometry(&mut self, mesh: TriangleMesh) -> u32 {
        assert!(
            !self.generated,
            "cannot add geometry to a generated bottom level structure"
        );
        self.geometries.push(Arc::new(mesh));
        (self.geometries.len() - 1) as u32
    }

    pub fn generate(&mut self) {
        let num_triangles: usize = self.geometries.iter().map(|g| g.num_triangles()).sum();
        debug!(
            self.log,
            "generated bottom level structure";
            "geometries" => self.geometries.len(),
            "triangles" => num_triangles
        );
        self.generated = true;
    }

    pub fn geometry(&self, geometry_id: u32) -> &TriangleMesh {
        &self.geometries[geometry_id as usize]
    }

    pub fn geometries(&self) -> &[Arc<TriangleMesh>] {
        &self.geometries
    }

    fn intersect(&self, r: &Ray, t_max: f32) -> Option<(f32, na::Point2<f32>, u32, u32)> {
        assert!(
            self.generated,
            "bottom level structure queried before generate"
        );
        let mut closest_t = t_max;
        let mut closest = None;
        for (geometry_id, mesh) in self.geometries.iter().enumerate() {
            for (primitive_id, tri) in mesh.indices.chunks_exact(3).enumerate() {
                let p0 = mesh.pos[tri[0] as usize];
                let p1 = mesh.pos[tri[1] as usize];
                let p2 = mesh.pos[tri[2] as usize];
                if let Some((t, b1, b2)) = intersect_triangle(&p0, &p1, &p2, r, closest_t) {
                    closest_t = t;
                    closest = Some((
                        t,
                        na::Point2::new(b1, b2),
                        geometry_id as u32,
                        primitive_id as u32,
                    ));
                }
            }
        }
        closest
    }
}

struct InstanceDesc {
    local_to_world: na::Projective3<f32>,
    world_to_local: na::Projective3<f32>,
    blas: Arc<BottomLevelAccelerationStructure>,
}

pub struct TopLevelAccelerationStructure {
    instances: Vec<InstanceDesc>,
    generated: bool,
    log: slog::Logger,
}

impl TopLevelAccelerationStructure {
    pub fn add_instance(
        &mut self,
        blas: Arc<BottomLevelAccelerationStructure>,
        transform: &na::Projective3<f32>,
    ) -> u32 {
        assert!(
            !self.generated,
            "cannot add instance to a generated top level structure"
        );
        assert!(blas.generated, "instanced bottom level structure not generated");
        self.instances.push(InstanceDesc {
            local_to_world: *transform,
            world_to_local: transform.inverse(),
            blas,
        });
        (self.instances.len() - 1) as u32
    }

    pub fn generate(&mut self) {
        debug!(
            self.log,
            "generated top level structure";
            "instances" => self.instances.len()
        );
        self.generated = true;
    }

    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    pub fn instance_transform(&self, instance_id: u32) -> &na::Projective3<f32> {
        &self.instances[instance_id as usize].local_to_world
    }

    pub fn instance_inverse_transform(&self, instance_id: u32) -> &na::Projective3<f32> {
        &self.instances[instance_id as usize].world_to_local
    }

    pub fn instance_blas(&self, instance_id: u32) -> &BottomLevelAccelerationStructure {
        &self.instances[instance_id as usize].blas
    }

    pub fn world_bound(&self) -> Bounds3 {
        let mut bound = Bounds3::empty();
        for instance in &self.instances {
            for mesh in instance.blas.geometries() {
                bound = Bounds3::union(&bound, &mesh.world_bound(&instance.local_to_world));
            }
        }
        bound
    }

    /// Closest hit over all instances in `[0, r.t_max]`. Affine instance
    /// transforms preserve the ray parameter, so local hit distances compare
    /// directly across instances.
    pub fn intersect(&self, r: &Ray) -> Option<RayHit> {
        assert!(self.generated, "top level structure queried before generate");
        let mut closest_t = *r.t_max.borrow();
        let mut closest = None;
        for (instance_id, instance) in self.instances.iter().enumerate() {
            let local_ray = Ray {
                o: instance.world_to_local * r.o,
                d: instance.world_to_local * r.d,
                t_max: r.t_max.clone(),
            };
            if let Some((t, barycentric, geometry_id, primitive_id)) =
                instance.blas.intersect(&local_ray, closest_t)
            {
                closest_t = t;
                closest = Some(RayHit {
                    t,
                    barycentric,
                    instance_id: instance_id as u32,
                    geometry_id,
                    primitive_id,
                });
            }
        }

        if let Some(ref hit) = closest {
            *r.t_max.borrow_mut() = hit.t;
        }
        closest
    }

    /// Any-hit occlusion query, early out on the first intersection.
    pub fn intersect_p(&self, r: &Ray) -> bool {
        assert!(self.generated, "top level structure queried before generate");
        let t_max = *r.t_max.borrow();
        for instance in &self.instances {
            let local_ray = Ray {
                o: instance.world_to_local * r.o,
                d: instance.world_to_local * r.d,
                t_max: r.t_max.clone(),
            };
            for mesh in instance.blas.geometries() {
                for tri in mesh.indices.chunks_exact(3) {
                    let p0 = mesh.pos[tri[0] as usize];
                    let p1 = mesh.pos[tri[1] as usize];
                    let p2 = mesh.pos[tri[2] as usize];
                    if intersect_triangle(&p0, &p1, &p2, &local_ray, t_max).is_some() {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Watertight ray/triangle test. Returns the hit distance and the
/// barycentric weights of `p1` and `p2` when the ray hits within
/// `(0, t_max]`.
fn intersect_triangle(
    p0: &na::Point3<f32>,
    p1: &na::Point3<f32>,
    p2: &na::Point3<f32>,
    r: &Ray,
    t_max: f32,
) -> Option<(f32, f32, f32)> {
    // transform triangle vertices to ray coordinate space
    let mut p0t = p0 - r.o;
    let mut p1t = p1 - r.o;
    let mut p2t = p2 - r.o;

    // permute components so the dominant direction lands on z
    let kz = max_dimension(&glm::abs(&r.d));
    let mut kx = kz + 1;
    if kx == 3 {
        kx = 0;
    }
    let mut ky = kx + 1;
    if ky == 3 {
        ky = 0;
    }
    let d = permute(&r.d, kx, ky, kz);
    p0t = permute(&p0t, kx, ky, kz);
    p1t = permute(&p1t, kx, ky, kz);
    p2t = permute(&p2t, kx, ky, kz);

    // shear so the ray points down +z
    let sx = -d.x / d.z;
    let sy = -d.y / d.z;
    let sz = 1.0f32 / d.z;

    p0t.x += sx * p0t.z;
    p0t.y += sy * p0t.z;
    p1t.x += sx * p1t.z;
    p1t.y += sy * p1t.z;
    p2t.x += sx * p2t.z;
    p2t.y += sy * p2t.z;

    let mut e0 = p1t.x * p2t.y - p1t.y * p2t.x;
    let mut e1 = p2t.x * p0t.y - p2t.y * p0t.x;
    let mut e2 = p0t.x * p1t.y - p0t.y * p1t.x;

    // fall back to double precision on exact edge hits
    if e0 == 0.0 || e1 == 0.0 || e2 == 0.0 {
        let p2txp1ty = p2t.x as f64 * p1t.y as f64;
        let p2typ1tx = p2t.y as f64 * p1t.x as f64;
        e0 = (p2typ1tx - p2txp1ty) as f32;
        let p0txp2ty = p0t.x as f64 * p2t.y as f64;
        let p0typ2tx = p0t.y as f64 * p2t.x as f64;
        e1 = (p0typ2tx - p0txp2ty) as f32;
        let p1txp0ty = p1t.x as f64 * p0t.y as f64;
        let p1typ0tx = p1t.y as f64 * p0t.x as f64;
        e2 = (p1typ0tx - p1txp0ty) as f32;
    }

    if (e0 < 0.0 || e1 < 0.0 || e2 < 0.0) && (e0 > 0.0 || e1 > 0.0 || e2 > 0.0) {
        return None;
    }
    let det = e0 + e1 + e2;
    if det == 0.0 {
        return None;
    }

    // scaled hit distance against the ray t range
    p0t.z *= sz;
    p1t.z *= sz;
    p2t.z *= sz;
    let t_scaled = e0 * p0t.z + e1 * p1t.z + e2 * p2t.z;
    if det < 0.0 && (t_scaled >= 0.0 || t_scaled < t_max * det) {
        return None;
    } else if det > 0.0 && (t_scaled <= 0.0 || t_scaled > t_max * det) {
        return None;
    }

    let inv_det = 1.0 / det;
    let b1 = e1 * inv_det;
    let b2 = e2 * inv_det;
    let t = t_scaled * inv_det;

    // conservative error bounds keep t strictly positive
    let max_z_t = glm::comp_max(&glm::abs(&glm::vec3(p0t.z, p1t.z, p2t.z)));
    let delta_z = gamma(3) * max_z_t;

    let max_x_t = glm::comp_max(&glm::abs(&glm::vec3(p0t.x, p1t.x, p2t.x)));
    let max_y_t = glm::comp_max(&glm::abs(&glm::vec3(p0t.y, p1t.y, p2t.y)));
    let delta_x = gamma(5) * (max_x_t + max_z_t);
    let delta_y = gamma(5) * (max_y_t + max_z_t);

    let delta_e = 2.0 * (gamma(2) * max_x_t * max_y_t + delta_y * max_x_t + delta_x * max_y_t);

    let max_e = glm::comp_max(&glm::abs(&glm::vec3(e0, e1, e2)));
    let delta_t =
        3.0 * (gamma(3) * max_e * max_z_t + delta_e * max_z_t + delta_z * max_e) * inv_det.abs();
    if t <= delta_t {
        return None;
    }

    Some((t, b1, b2))
}
