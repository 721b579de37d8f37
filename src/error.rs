use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("window error: {0}")]
    Window(String),
    #[error("failed to write png: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write exr: {0}")]
    Exr(#[from] exr::error::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid render resolution {width}x{height}")]
    InvalidResolution { width: usize, height: usize },
}

impl From<minifb::Error> for Error {
    fn from(e: minifb::Error) -> Self {
        Error::Window(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
