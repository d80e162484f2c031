use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Writes binary PPM (P6). Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn write(buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);

        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(&rgba_to_rgb(buffer.buffer()))?;
        file.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        Self::write(buffer, filepath).map_err(|source| PresentError::Io {
            path: filepath.to_path_buf(),
            source,
        })
    }
}
