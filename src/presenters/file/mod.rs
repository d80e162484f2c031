pub mod png;
pub mod ppm;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use std::path::Path;

/// Picks a presenter from the file extension.
pub fn presenter_for_path(path: &Path) -> Result<Box<dyn FilePresenterPort>, PresentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => Ok(Box::new(png::PngFilePresenter::new())),
        Some("ppm") => Ok(Box::new(ppm::PpmFilePresenter::new())),
        _ => Err(PresentError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chooses_by_extension() {
        assert!(presenter_for_path(Path::new("out.png")).is_ok());
        assert!(presenter_for_path(Path::new("out.PPM")).is_ok());
        assert!(matches!(
            presenter_for_path(Path::new("out.jpg")),
            Err(PresentError::UnsupportedFormat { .. })
        ));
        assert!(presenter_for_path(Path::new("out")).is_err());
    }
}
