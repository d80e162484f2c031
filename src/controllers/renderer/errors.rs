use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::kernel::KernelCompileError;
use thiserror::Error;

/// Construction failures. The renderer never exists after one of these.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to start render threads: {0}")]
    Initialization(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Compile(#[from] KernelCompileError),
}

/// Failures local to one frame. The renderer stays usable afterwards.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("output must be at least 1x1 pixels, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("{samples} samples exceeds the per-frame limit of {limit}")]
    CanvasTooLarge { samples: u64, limit: u64 },
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

impl FrameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Render(RenderFrameError::Cancelled(_)))
    }
}
