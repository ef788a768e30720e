// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Diagram data model

pub mod color;
pub mod diagram;
pub mod entity_id;
pub mod file_format;
pub mod node;

pub use color::{ColorError, ColorSpec};
pub use diagram::Diagram;
pub use entity_id::{GroupId, NodeId};
pub use node::{Group, Line, Node, TextStyle};
