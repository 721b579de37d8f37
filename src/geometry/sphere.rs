use super::{forward_hit, Surface};
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    // assumed positive, not checked
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }
}

impl Surface for Sphere {
    // the direction is unit length, so the quadratic's `a` term is 1
    fn intersect(&self, r: Ray) -> Option<f32> {
        let oc: Vec3 = r.origin - self.center;
        let b = 2.0 * (r.direction * oc);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t0 = (-b - discriminant_sqrt) / 2.0;
        let t1 = (-b + discriminant_sqrt) / 2.0;
        // nearer root first. falling through to the far root means the origin is inside
        forward_hit(t0).or_else(|| forward_hit(t1))
    }
}
