// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! HackMap: a mind-map editor built with Xilem.
//!
//! The editing core ([`editing::EditorSession`] over a [`model::Diagram`])
//! has no UI dependencies and can be driven directly; the window, menus
//! and canvas widget are layered on top of it.

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod config;
mod data;
pub mod editing;
pub mod export;
pub mod model;
pub mod render;
pub mod settings;
pub mod theme;
mod views;

use config::EditorConfig;
use data::AppState;
use views::editor_view;

/// Entry point for the HackMap application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hackmap=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let mut initial_state = AppState::new(EditorConfig::discover());

    // Check for command-line argument (mind map JSON path)
    handle_command_line_args(&mut initial_state);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Handle command-line arguments to open a saved mind map
fn handle_command_line_args(initial_state: &mut AppState) {
    let args: Vec<String> = std::env::args().collect();
    if args.len() <= 1 {
        return;
    }

    let map_path = std::path::PathBuf::from(&args[1]);

    if map_path.exists() {
        tracing::info!("Loading mind map from: {}", map_path.display());
        initial_state.load_from(&map_path);
    } else {
        tracing::error!("Path does not exist: {}", map_path.display());
        tracing::error!("Usage: hackmap [path/to/mindmap.json]");
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(1280.0, 800.0);
    let window_view = window(state.main_window_id, state.title(), editor_view(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
