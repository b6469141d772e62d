use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Error: unable to open directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No images found in {}.", dir.display())]
    EmptyCatalog { dir: PathBuf },

    #[error(
        "invalid dimensions: image {natural_width}x{natural_height}, frame {frame_width}x{frame_height}"
    )]
    InvalidDimensions {
        natural_width: u32,
        natural_height: u32,
        frame_width: u32,
        frame_height: u32,
    },

    #[error("could not decode {}: {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Error: unable to get primary monitor.")]
    DisplayQueryFailure,

    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

impl ViewerError {
    /// Process exit status for a failure that ends the program.
    pub fn exit_status(&self) -> u8 {
        match self {
            ViewerError::DirectoryUnreadable { .. } => 2,
            ViewerError::EmptyCatalog { .. } => 3,
            _ => 1,
        }
    }
}
