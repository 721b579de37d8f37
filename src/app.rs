use crate::camera::Camera;
use crate::image_buffer::ImageBuffer;
use crate::render::render_into;
use crate::scene::Scene;

/// What a framebuffer resize does to the render resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Keep rendering at the configured size; the window scales the image when presenting.
    Fixed,
    /// Render at whatever size the framebuffer was resized to.
    FollowWindow,
}

pub struct AppContext {
    pub camera: Camera,
    pub scene: Scene,
    pub image: ImageBuffer,
    pub render_size: (usize, usize),
    pub policy: ResolutionPolicy,
}

impl AppContext {
    pub fn new(
        camera: Camera,
        scene: Scene,
        render_size: (usize, usize),
        policy: ResolutionPolicy,
    ) -> AppContext {
        AppContext {
            camera,
            scene,
            image: ImageBuffer::new(0, 0),
            render_size,
            policy,
        }
    }

    pub fn default_viewer(render_size: (usize, usize), policy: ResolutionPolicy) -> AppContext {
        AppContext::new(
            Camera::default_viewer(),
            Scene::default_viewer(),
            render_size,
            policy,
        )
    }

    pub fn render(&mut self) {
        let (width, height) = self.render_size;
        render_into(&mut self.image, &self.camera, &self.scene, width, height);
    }

    /// Returns whether the image was re-rendered. Zero sized framebuffers (minimized windows)
    /// leave the current image alone.
    pub fn on_resize(&mut self, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 {
            debug!("ignoring resize to {}x{}", width, height);
            return false;
        }
        if self.policy == ResolutionPolicy::FollowWindow {
            self.render_size = (width, height);
        }
        info!(
            "framebuffer resized to {}x{}, rendering at {}x{}",
            width, height, self.render_size.0, self.render_size.1
        );
        self.render();
        true
    }
}
