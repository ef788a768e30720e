// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! PNG/JPEG export of the current view.
//!
//! The view is rendered to SVG first and rasterized with resvg, so the
//! image matches the canvas: zoom, pan, palette and search highlights.

use super::{ExportError, ImageFormat, svg};
use crate::editing::EditorSession;
use crate::render::Frame;
use image::{DynamicImage, RgbaImage};
use kurbo::Size;
use resvg::{tiny_skia, usvg};
use std::path::Path;

/// Rasterize what the canvas shows at `size` (screen pixels).
///
/// The selection ring and a line being drawn are left out.
pub fn render_view(session: &EditorSession, size: Size) -> Result<RgbaImage, ExportError> {
    let width = size.width.ceil().max(1.0) as u32;
    let height = size.height.ceil().max(1.0) as u32;

    let frame = Frame::view(session).without_overlays();
    let document = svg::render_frame(
        &frame,
        session.viewport.affine(),
        Size::new(f64::from(width), f64::from(height)),
        session.label_font_size,
    );
    let svg_text = document.to_string();

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg_text.as_bytes(), &options)
        .map_err(|e| ExportError::Render(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Render(format!("cannot allocate {width}x{height} image")))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let mut pixels = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| ExportError::Render("pixel buffer size mismatch".to_string()))
}

/// Save the current view; the format follows the file extension
pub fn export_view(path: &Path, session: &EditorSession, size: Size) -> Result<(), ExportError> {
    let format = ImageFormat::from_path(path)?;
    let image = render_view(session, size)?;
    match format {
        ImageFormat::Png => image.save_with_format(path, image::ImageFormat::Png)?,
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(path, image::ImageFormat::Jpeg)?,
    }
    tracing::info!("Exported {}x{} image to {}", size.width, size.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn session_with_node() -> EditorSession {
        let mut s = EditorSession::default();
        s.create_default_node(Point::new(50.0, 50.0));
        s
    }

    #[test]
    fn background_and_fill_land_in_pixels() {
        let s = session_with_node();
        let image = render_view(&s, Size::new(100.0, 100.0)).unwrap();
        assert_eq!(image.dimensions(), (100, 100));
        // Dark palette: #1e1e1e background, #00ff00 fill
        assert_eq!(image.get_pixel(2, 2).0, [0x1e, 0x1e, 0x1e, 0xff]);
        assert_eq!(image.get_pixel(50, 30).0, [0x00, 0xff, 0x00, 0xff]);
    }

    #[test]
    fn view_follows_zoom() {
        let mut s = session_with_node();
        s.zoom_in();
        let image = render_view(&s, Size::new(100.0, 100.0)).unwrap();
        // (50, 50) moved to (60, 60); (22, 22) is now outside the node box
        assert_eq!(image.get_pixel(60, 38).0, [0x00, 0xff, 0x00, 0xff]);
        assert_eq!(image.get_pixel(22, 22).0, [0x1e, 0x1e, 0x1e, 0xff]);
    }

    #[test]
    fn export_png_and_jpeg() {
        let s = session_with_node();
        let dir = tempfile::tempdir().unwrap();

        let png = dir.path().join("view.png");
        export_view(&png, &s, Size::new(120.0, 80.0)).unwrap();
        let decoded = image::open(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (120, 80));

        let jpeg = dir.path().join("view.jpg");
        export_view(&jpeg, &s, Size::new(120.0, 80.0)).unwrap();
        assert!(jpeg.exists());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let s = session_with_node();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.bmp");
        assert!(matches!(
            export_view(&path, &s, Size::new(10.0, 10.0)),
            Err(ExportError::UnsupportedFormat(_))
        ));
        assert!(!path.exists());
    }
}
