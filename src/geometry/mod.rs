use crate::math::Ray;

mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

/// Hits at or below this parameter are discarded, so a ray never hits the surface it starts on.
pub const INTERSECTION_EPSILON: f32 = 0.001;
/// Rays whose vertical component is smaller than this are treated as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Accepts `t` only if it lies strictly in front of the ray origin.
#[inline]
pub fn forward_hit(t: f32) -> Option<f32> {
    if t > INTERSECTION_EPSILON {
        Some(t)
    } else {
        None
    }
}

pub trait Surface {
    /// Ray parameter of the nearest forward intersection, or `None` if there is none.
    fn intersect(&self, r: Ray) -> Option<f32>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceEnum {
    Sphere(Sphere),
    Plane(Plane),
}

impl Surface for SurfaceEnum {
    fn intersect(&self, r: Ray) -> Option<f32> {
        match self {
            SurfaceEnum::Sphere(inner) => inner.intersect(r),
            SurfaceEnum::Plane(inner) => inner.intersect(r),
        }
    }
}

impl From<Sphere> for SurfaceEnum {
    fn from(sphere: Sphere) -> Self {
        SurfaceEnum::Sphere(sphere)
    }
}

impl From<Plane> for SurfaceEnum {
    fn from(plane: Plane) -> Self {
        SurfaceEnum::Plane(plane)
    }
}
