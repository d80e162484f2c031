use crate::controllers::renderer::fractal_renderer::RenderQuality;
use crate::core::data::frame_snapshot::FrameSnapshot;

/// One frame to draw: an immutable snapshot plus the output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub snapshot: FrameSnapshot,
    pub width: u32,
    pub height: u32,
    pub quality: RenderQuality,
}
