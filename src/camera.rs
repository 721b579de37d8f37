use crate::math::{Point3, Ray};

/// Pinhole camera looking down -z, with the image plane at `z = -d`,
/// spanning `[l, r]` horizontally and `[b, t]` vertically.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Point3,
    pub l: f32,
    pub r: f32,
    pub b: f32,
    pub t: f32,
    pub d: f32,
}

impl Camera {
    pub fn new(eye: Point3, l: f32, r: f32, b: f32, t: f32, d: f32) -> Camera {
        Camera { eye, l, r, b, t, d }
    }

    pub fn default_viewer() -> Camera {
        Camera::new(Point3::ORIGIN, -0.1, 0.1, -0.1, 0.1, 0.1)
    }

    /// Ray through the center of pixel `(i, j)` of an `nx` by `ny` raster.
    ///
    /// Pixel (0, 0) is the lower left corner of the image plane; rows are not flipped.
    /// Coordinates outside the raster extrapolate linearly.
    pub fn generate_ray(&self, i: i32, j: i32, nx: usize, ny: usize) -> Ray {
        let u = self.l + (self.r - self.l) * ((i as f32 + 0.5) / nx as f32);
        let v = self.b + (self.t - self.b) * ((j as f32 + 0.5) / ny as f32);
        let image_point = Point3::new(u, v, -self.d);
        Ray::new(self.eye, image_point - self.eye)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_pixel_is_near_optical_axis() {
        let camera = Camera::default_viewer();
        let ray = camera.generate_ray(255, 255, 512, 512);
        assert!(ray.direction.x().abs() < 0.01, "{:?}", ray.direction);
        assert!(ray.direction.y().abs() < 0.01, "{:?}", ray.direction);
        assert!(ray.direction.z() < -0.99, "{:?}", ray.direction);
        assert_eq!(ray.origin, Point3::ORIGIN);
    }

    #[test]
    fn test_first_pixel_is_lower_left() {
        let camera = Camera::default_viewer();
        let ray = camera.generate_ray(0, 0, 512, 512);
        assert!(ray.direction.x() < 0.0 && ray.direction.y() < 0.0, "{:?}", ray.direction);

        let ray = camera.generate_ray(511, 511, 512, 512);
        assert!(ray.direction.x() > 0.0 && ray.direction.y() > 0.0, "{:?}", ray.direction);
    }

    #[test]
    fn test_symmetric_pixels_mirror() {
        let camera = Camera::default_viewer();
        let a = camera.generate_ray(10, 300, 512, 512).direction;
        let b = camera.generate_ray(501, 300, 512, 512).direction;
        assert!((a.x() + b.x()).abs() < 0.000001, "{:?} {:?}", a, b);
        assert!((a.y() - b.y()).abs() < 0.000001, "{:?} {:?}", a, b);
    }

    #[test]
    fn test_out_of_raster_extrapolates() {
        let camera = Camera::default_viewer();
        let ray = camera.generate_ray(-1, 0, 2, 2);
        // u = -0.1 + 0.2 * (-0.5 / 2) = -0.15
        let expected = (Point3::new(-0.15, -0.05, -0.1) - Point3::ORIGIN).normalized();
        assert!((ray.direction - expected).norm() < 0.000001, "{:?}", ray.direction);
    }

    #[test]
    fn test_rays_start_at_eye() {
        let camera = Camera::new(Point3::new(1.0, 2.0, 3.0), -1.0, 1.0, -1.0, 1.0, 1.0);
        let ray = camera.generate_ray(0, 0, 1, 1);
        assert_eq!(ray.origin, Point3::new(1.0, 2.0, 3.0));
        // single pixel raster maps to the middle of the rectangle, which sits at (0, 0, -1)
        let expected = (Point3::new(0.0, 0.0, -1.0) - Point3::new(1.0, 2.0, 3.0)).normalized();
        assert!((ray.direction - expected).norm() < 0.000001, "{:?}", ray.direction);
    }
}
