// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! File I/O operations for AppState (new, save, load, export)

use super::AppState;
use crate::export;
use crate::model::file_format;
use chrono::Local;
use std::path::{Path, PathBuf};

impl AppState {
    /// File > New. Recorded, so it can be undone.
    pub fn new_map(&mut self) {
        self.session.new_map();
        self.current_file = None;
        self.last_saved = None;
        self.dialog = None;
        self.context_menu = None;
        self.set_status("New mind map");
        self.touch();
    }

    /// Save to the current file, asking for one if there is none yet
    pub fn save(&mut self) {
        match self.current_file.clone() {
            Some(path) => self.save_to(&path),
            None => self.save_as_dialog(),
        }
    }

    /// File > Save: pick a JSON file and write the diagram
    pub fn save_as_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Save Mind Map")
            .add_filter("JSON files", &["json"])
            .set_file_name("mindmap.json")
            .save_file();

        if let Some(path) = path {
            self.save_to(&with_default_extension(path, "json"));
        }
    }

    pub fn save_to(&mut self, path: &Path) {
        match file_format::save(path, &self.session.diagram) {
            Ok(()) => {
                self.current_file = Some(path.to_path_buf());
                self.last_saved = Some(Local::now().format("%I:%M %p").to_string());
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(e) => self.set_error(format!("Failed to save: {e:#}")),
        }
    }

    /// File > Load: pick a JSON file and replace the diagram
    pub fn load_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Load Mind Map")
            .add_filter("JSON files", &["json"])
            .pick_file();

        if let Some(path) = path {
            self.load_from(&path);
        }
    }

    /// Replace the diagram with a file's contents. On failure the current
    /// diagram stays as it is.
    pub fn load_from(&mut self, path: &Path) {
        match file_format::load(path, &self.session.theme.outline_spec()) {
            Ok(diagram) => {
                self.session.replace_diagram(diagram);
                self.current_file = Some(path.to_path_buf());
                self.last_saved = None;
                self.dialog = None;
                self.context_menu = None;
                if !self.search_query.is_empty() {
                    self.session.search_highlight(&self.search_query);
                }
                self.set_status(format!("Loaded {}", path.display()));
                self.touch();
            }
            Err(e) => self.set_error(format!("Failed to load: {e:#}")),
        }
    }

    /// File > Export PDF
    pub fn export_pdf_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Export PDF")
            .add_filter("PDF files", &["pdf"])
            .set_file_name("mindmap.pdf")
            .save_file();

        if let Some(path) = path {
            self.export_pdf_to(&with_default_extension(path, "pdf"));
        }
    }

    pub fn export_pdf_to(&mut self, path: &Path) {
        match export::pdf::export(path, &self.session.diagram) {
            Ok(()) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_error(format!("PDF export failed: {e}")),
        }
    }

    /// File > Export Image (PNG or JPEG of the current view)
    pub fn export_image_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Export Image")
            .add_filter("PNG files", &["png"])
            .add_filter("JPEG files", &["jpg", "jpeg"])
            .set_file_name("mindmap.png")
            .save_file();

        if let Some(path) = path {
            self.export_image_to(&with_default_extension(path, "png"));
        }
    }

    pub fn export_image_to(&mut self, path: &Path) {
        match export::raster::export_view(path, &self.session, self.canvas_size) {
            Ok(()) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_error(format!("Image export failed: {e}")),
        }
    }

    /// File > Export SVG
    pub fn export_svg_dialog(&mut self) {
        let path = rfd::FileDialog::new()
            .set_title("Export SVG")
            .add_filter("SVG files", &["svg"])
            .set_file_name("mindmap.svg")
            .save_file();

        if let Some(path) = path {
            self.export_svg_to(&with_default_extension(path, "svg"));
        }
    }

    pub fn export_svg_to(&mut self, path: &Path) {
        let result = export::svg::export(
            path,
            &self.session.diagram,
            self.session.theme,
            self.session.label_font_size,
        );
        match result {
            Ok(()) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_error(format!("SVG export failed: {e}")),
        }
    }

    /// File > Quit
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Add `ext` when the chosen path has no extension
fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn save_then_load_restores_nodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");

        let mut state = AppState::default();
        state.session.create_default_node(Point::new(100.0, 100.0));
        state.session.create_default_node(Point::new(250.0, 80.0));
        state.save_to(&path);
        assert_eq!(state.current_file.as_deref(), Some(path.as_path()));
        assert!(state.last_saved.is_some());

        let mut other = AppState::default();
        other.load_from(&path);
        let centers: Vec<_> = other.session.diagram.nodes().iter().map(|n| n.center).collect();
        assert_eq!(centers, vec![Point::new(100.0, 100.0), Point::new(250.0, 80.0)]);
        assert_eq!(other.revision, 1);

        // Loading is undoable
        other.undo();
        assert!(other.session.diagram.nodes().is_empty());
    }

    #[test]
    fn failed_load_keeps_diagram_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut state = AppState::default();
        state.session.create_default_node(Point::ZERO);
        let before = state.session.diagram.clone();
        state.load_from(&path);
        assert_eq!(state.session.diagram, before);
        assert!(state.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn new_map_forgets_file() {
        let mut state = AppState::default();
        state.current_file = Some(PathBuf::from("old.json"));
        state.session.create_default_node(Point::ZERO);
        state.new_map();
        assert!(state.current_file.is_none());
        assert!(state.session.diagram.is_empty());
    }

    #[test]
    fn exports_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.canvas_size = kurbo::Size::new(200.0, 150.0);
        state.session.create_default_node(Point::new(60.0, 60.0));

        state.export_pdf_to(&dir.path().join("map.pdf"));
        state.export_svg_to(&dir.path().join("map.svg"));
        state.export_image_to(&dir.path().join("map.png"));
        for name in ["map.pdf", "map.svg", "map.png"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn default_extension_is_added() {
        assert_eq!(
            with_default_extension(PathBuf::from("a/map"), "json"),
            PathBuf::from("a/map.json")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("map.txt"), "json"),
            PathBuf::from("map.txt")
        );
    }
}
