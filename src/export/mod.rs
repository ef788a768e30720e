// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Document and image export

pub mod pdf;
pub mod raster;
pub mod svg;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported image format `{0}` (use .png, .jpg or .jpeg)")]
    UnsupportedFormat(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raster formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(ExportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("map.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("map.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            ImageFormat::from_path(Path::new("map.gif")),
            Err(ExportError::UnsupportedFormat(ext)) if ext == "gif"
        ));
        assert!(ImageFormat::from_path(Path::new("map")).is_err());
    }
}
