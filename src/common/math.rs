const MACHINE_EPSILON: f32 = f32::EPSILON * 0.5;

pub fn gamma(n: u32) -> f32 {
    (n as f32 * MACHINE_EPSILON) / (1.0 - n as f32 * MACHINE_EPSILON)
}

pub fn max_dimension<N: glm::Scalar + std::cmp::PartialOrd>(v: &glm::TVec3<N>) -> usize {
    if v.x > v.y {
        if v.x > v.z {
            0
        } else {
            2
        }
    } else {
        if v.y > v.z {
            1
        } else {
            2
        }
    }
}

pub fn permute<N: glm::Scalar + std::marker::Copy>(
    p: &glm::TVec3<N>,
    x: usize,
    y: usize,
    z: usize,
) -> glm::TVec3<N> {
    glm::vec3(p[x], p[y], p[z])
}

pub fn face_forward(n: &na::Vector3<f32>, v: &na::Vector3<f32>) -> na::Vector3<f32> {
    if n.dot(v) < 0.0 {
        -n
    } else {
        *n
    }
}

pub fn coordinate_system(
    v1: &na::Vector3<f32>,
    v2: &mut na::Vector3<f32>,
    v3: &mut na::Vector3<f32>,
) {
    if v1.x.abs() > v1.y.abs() {
        *v2 = na::Vector3::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt();
    } else {
        *v2 = na::Vector3::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt();
    }
    *v3 = v1.cross(v2);
}

pub fn float_to_bits(f: f32) -> u32 {
    f.to_bits()
}

pub fn bits_to_float(f: u32) -> f32 {
    f32::from_bits(f)
}

pub fn next_float_up(mut v: f32) -> f32 {
    if v.is_infinite() && v > 0. {
        return v;
    }
    if v == -0.0 {
        v = 0.0;
    }

    let mut ui = float_to_bits(v);
    if v >= 0.0 {
        ui += 1;
    } else {
        ui -= 1;
    }
    bits_to_float(ui)
}

pub fn next_float_down(mut v: f32) -> f32 {
    if v.is_infinite() && v < 0.0 {
        return v;
    }
    if v == 0.0 {
        v = -0.0;
    }
    let mut ui = float_to_bits(v);
    if v > 0.0 {
        ui -= 1;
    } else {
        ui += 1;
    }
    bits_to_float(ui)
}

pub fn offset_ray_origin(
    p: &na::Point3<f32>,
    p_error: &na::Vector3<f32>,
    n: &na::Vector3<f32>,
    w: &na::Vector3<f32>,
) -> na::Point3<f32> {
    let d = n.abs().dot(p_error);
    let mut offset = d * n;

    if w.dot(n) < 0.0 {
        offset = -offset;
    }

    let mut po = p + offset;

    for i in 0..3 {
        if offset[i] > 0.0 {
            po[i] = next_float_up(po[i]);
        } else if offset[i] < 0.0 {
            po[i] = next_float_down(po[i]);
        }
    }

    po
}

pub fn gamma_correct(value: f32) -> f32 {
    if value <= 0.0031308f32 {
        return 12.92 * value;
    }

    1.055 * value.powf(1.0 / 2.4) - 0.055
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_system_orthonormal() {
        let v1 = na::Vector3::new(0.3f32, -0.7, 0.648074).normalize();
        let mut v2 = na::Vector3::zeros();
        let mut v3 = na::Vector3::zeros();
        coordinate_system(&v1, &mut v2, &mut v3);

        approx::assert_abs_diff_eq!(v1.dot(&v2), 0.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(v1.dot(&v3), 0.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(v2.dot(&v3), 0.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(v2.norm(), 1.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(v3.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_face_forward() {
        let n = na::Vector3::new(0.0, 0.0, 1.0);
        let w = na::Vector3::new(0.0, 0.5, -0.5);
        assert_eq!(face_forward(&n, &w), -n);
        assert_eq!(face_forward(&n, &-w), n);
    }

    #[test]
    fn test_next_float_adjacent() {
        let v = 1.0f32;
        assert!(next_float_up(v) > v);
        assert!(next_float_down(v) < v);
        assert_eq!(next_float_down(next_float_up(v)), v);
    }
}
