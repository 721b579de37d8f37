use structopt::StructOpt;

use crate::app::ResolutionPolicy;
use crate::error::{Error, Result};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rust_rt_visibility",
    about = "Casts one ray per pixel into a fixed scene and shows which pixels hit something"
)]
pub struct Opt {
    /// Render width in pixels, independent of the window size
    #[structopt(long, default_value = "512")]
    pub width: usize,

    /// Render height in pixels, independent of the window size
    #[structopt(long, default_value = "512")]
    pub height: usize,

    /// Size of the render thread pool. Defaults to the number of logical cpus
    #[structopt(long)]
    pub threads: Option<usize>,

    /// Re-render at the window's framebuffer size on resize instead of the fixed resolution
    #[structopt(long)]
    pub follow_window: bool,

    /// Render once, write the image to disk and exit without opening a window
    #[structopt(long)]
    pub headless: bool,

    /// File stem for headless output, written under `output/`
    #[structopt(short, long)]
    pub output: Option<String>,
}

impl Opt {
    pub fn render_size(&self) -> Result<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok((self.width, self.height))
    }

    pub fn resolution_policy(&self) -> ResolutionPolicy {
        if self.follow_window {
            ResolutionPolicy::FollowWindow
        } else {
            ResolutionPolicy::Fixed
        }
    }

    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let opt = Opt::from_iter(vec!["rust_rt_visibility"]);
        assert_eq!(opt.render_size().unwrap(), (512, 512));
        assert_eq!(opt.resolution_policy(), ResolutionPolicy::Fixed);
        assert!(!opt.headless);
        assert!(opt.output.is_none());
        assert!(opt.thread_count() >= 1);
    }

    #[test]
    fn test_flags() {
        let opt = Opt::from_iter(vec![
            "rust_rt_visibility",
            "--width",
            "640",
            "--height",
            "480",
            "--threads",
            "2",
            "--follow-window",
            "--headless",
            "-o",
            "mask",
        ]);
        assert_eq!(opt.render_size().unwrap(), (640, 480));
        assert_eq!(opt.resolution_policy(), ResolutionPolicy::FollowWindow);
        assert_eq!(opt.thread_count(), 2);
        assert!(opt.headless);
        assert_eq!(opt.output.as_deref(), Some("mask"));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let opt = Opt::from_iter(vec!["rust_rt_visibility", "--width", "0"]);
        match opt.render_size() {
            Err(Error::InvalidResolution { width, height }) => {
                assert_eq!((width, height), (0, 512))
            }
            other => panic!("{:?}", other),
        }
    }
}
