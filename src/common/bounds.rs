#[derive(Debug, Clone, Copy)]
pub struct TBounds2<T: na::Scalar> {
    pub p_min: na::Point2<T>,
    pub p_max: na::Point2<T>,
}

pub type Bounds2i = TBounds2<i32>;

impl<T: na::Scalar + na::ClosedSub + na::ClosedMul + Copy> TBounds2<T> {
    pub fn diagonal(&self) -> na::Vector2<T> {
        self.p_max.coords - self.p_min.coords
    }

    pub fn area(&self) -> T {
        let d = self.p_max.coords - self.p_min.coords;
        d.x * d.y
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Bounds3 {
    pub p_min: na::Point3<f32>,
    pub p_max: na::Point3<f32>,
}

fn min_p(p1: &na::Point3<f32>, p2: &na::Point3<f32>) -> na::Point3<f32> {
    na::Point3::new(p1.x.min(p2.x), p1.y.min(p2.y), p1.z.min(p2.z))
}

fn max_p(p1: &na::Point3<f32>, p2: &na::Point3<f32>) -> na::Point3<f32> {
    na::Point3::new(p1.x.max(p2.x), p1.y.max(p2.y), p1.z.max(p2.z))
}

impl Bounds3 {
    pub fn new(p1: na::Point3<f32>, p2: na::Point3<f32>) -> Self {
        Bounds3 {
            p_min: min_p(&p1, &p2),
            p_max: max_p(&p1, &p2),
        }
    }

    pub fn empty() -> Self {
        Bounds3 {
            p_min: na::Point3::new(f32::MAX, f32::MAX, f32::MAX),
            p_max: na::Point3::new(f32::MIN, f32::MIN, f32::MIN),
        }
    }

    pub fn diagonal(&self) -> na::Vector3<f32> {
        self.p_max.coords - self.p_min.coords
    }

    pub fn union(b1: &Bounds3, b2: &Bounds3) -> Bounds3 {
        Bounds3 {
            p_min: min_p(&b1.p_min, &b2.p_min),
            p_max: max_p(&b1.p_max, &b2.p_max),
        }
    }

    pub fn union_p(b: &Bounds3, p: &na::Point3<f32>) -> Bounds3 {
        Bounds3 {
            p_min: min_p(&b.p_min, p),
            p_max: max_p(&b.p_max, p),
        }
    }

    pub fn bounding_sphere(&self, center: &mut na::Point3<f32>, radius: &mut f32) {
        *center = na::center(&self.p_min, &self.p_max);
        *radius = if self.inside(center) {
            na::distance(center, &self.p_max)
        } else {
            0.0
        };
    }

    fn inside(&self, p: &na::Point3<f32>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }
}
