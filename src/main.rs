// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! HackMap: a mind-map editor built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    hackmap::run(EventLoop::with_user_event())
}
