// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod gesture;
pub mod selection;
pub mod session;
pub mod undo;
pub mod viewport;

pub use gesture::{Gesture, PointerPress, PressOutcome};
pub use selection::Selection;
pub use session::EditorSession;
pub use undo::{ActionLog, ActionRecord};
pub use viewport::ViewPort;
