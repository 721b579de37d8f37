use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Builds a ray from an origin and a direction of any length.
    /// The direction is normalized here, once, and never again.
    ///
    /// A zero length direction is not rejected. It normalizes to NaN components,
    /// and such a ray compares false against every epsilon, so no surface reports a hit for it.
    /// Use [`Ray::is_degenerate`] to detect it up front.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !self.direction.is_finite()
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
