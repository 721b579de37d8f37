use ordered_float::OrderedFloat;

use crate::geometry::{Plane, Sphere, Surface, SurfaceEnum};
use crate::math::{Point3, Ray};

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub surfaces: Vec<SurfaceEnum>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            surfaces: Vec::new(),
        }
    }

    /// Ground plane at y = -2 and three spheres lined up at z = -7.
    pub fn default_viewer() -> Scene {
        let mut scene = Scene::new();
        scene.push(Plane::new(-2.0));
        scene.push(Sphere::new(Point3::new(-4.0, 0.0, -7.0), 1.0));
        scene.push(Sphere::new(Point3::new(0.0, 0.0, -7.0), 2.0));
        scene.push(Sphere::new(Point3::new(4.0, 0.0, -7.0), 1.0));
        scene
    }

    pub fn push(&mut self, surface: impl Into<SurfaceEnum>) {
        self.surfaces.push(surface.into());
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Smallest positive hit parameter over every surface. Linear scan; on ties the
    /// surface added first wins.
    pub fn find_nearest(&self, ray: Ray) -> Option<f32> {
        self.surfaces
            .iter()
            .filter_map(|surface| surface.intersect(ray))
            .min_by_key(|&t| OrderedFloat(t))
    }
}
