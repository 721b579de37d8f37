use super::{forward_hit, Surface, PARALLEL_EPSILON};
use crate::math::Ray;

/// Horizontal plane with normal (0, 1, 0) at height `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub y: f32,
}

impl Plane {
    pub fn new(y: f32) -> Plane {
        Plane { y }
    }
}

impl Surface for Plane {
    fn intersect(&self, r: Ray) -> Option<f32> {
        let dy = r.direction.y();
        // parallel, including rays lying in the plane
        if dy.abs() < PARALLEL_EPSILON {
            return None;
        }
        forward_hit((self.y - r.origin.y()) / dy)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::INTERSECTION_EPSILON;
    use crate::math::{Point3, Vec3};

    #[test]
    fn test_hit_from_above() {
        let plane = Plane::new(-2.0);
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(ray), Some(2.0));

        let slanted = Ray::new(Point3::ORIGIN, Vec3::new(0.0, -1.0, -1.0));
        let t = plane.intersect(slanted).expect("slanted ray should hit");
        let p = slanted.point_at_parameter(t);
        assert!((p.y() + 2.0).abs() < 0.00001, "{:?}", p);
    }

    #[test]
    fn test_hit_from_below() {
        let plane = Plane::new(-2.0);
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(plane.intersect(ray), Some(3.0));
    }

    #[test]
    fn test_pointing_away_misses() {
        let plane = Plane::new(-2.0);
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.3, 1.0, -1.0));
        assert_eq!(plane.intersect(ray), None);
    }

    #[test]
    fn test_parallel_never_hits() {
        let plane = Plane::new(-2.0);
        for origin in [
            Point3::ORIGIN,
            Point3::new(5.0, -2.0, 1.0),
            Point3::new(0.0, -7.0, 0.0),
            Point3::new(-1.0, 100.0, 3.0),
        ] {
            for direction in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, -1.0)] {
                let ray = Ray::new(origin, direction);
                assert_eq!(plane.intersect(ray), None, "{:?}", ray);
            }
        }
    }

    #[test]
    fn test_parameter_exactly_at_epsilon_is_rejected() {
        let plane = Plane::new(-INTERSECTION_EPSILON);
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.intersect(ray), None);

        let lower = Plane::new(-0.0015);
        assert_eq!(lower.intersect(ray), Some(0.0015));
    }
}
