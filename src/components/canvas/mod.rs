// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Mind map canvas widget - draws the diagram and turns pointer and
//! keyboard input into session commands

mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::canvas_view;

use crate::editing::EditorSession;
use crate::model::NodeId;
use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerUpdate, PropertiesMut,
    PropertiesRef, RegisterCtx, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::time::Instant;

/// The mind map canvas
pub struct CanvasWidget {
    /// Working copy of the session; sent back to the app on every change
    pub session: EditorSession,

    /// Canvas size
    pub(super) size: Size,

    /// Last primary press, for double-press detection
    pub(super) last_click_time: Option<Instant>,
    pub(super) last_click_position: Option<Point>,
}

impl CanvasWidget {
    pub fn new(session: EditorSession) -> Self {
        Self {
            session,
            size: Size::new(800.0, 600.0),
            last_click_time: None,
            last_click_position: None,
        }
    }

    /// Emit a session update action
    pub(super) fn emit_session_update(
        &self,
        ctx: &mut EventCtx<'_>,
        request: Option<CanvasRequest>,
    ) {
        ctx.submit_action::<SessionUpdate>(SessionUpdate {
            session: self.session.clone(),
            canvas_size: self.size,
            request,
        });
    }
}

/// Something the canvas cannot do on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasRequest {
    /// Cmd/Ctrl+S
    Save,
    /// Open the label dialog for this node
    EditLabel(NodeId),
    /// Open the context menu at this canvas-local position
    ContextMenu(Point),
    /// Close the context menu
    DismissMenu,
}

/// Action emitted by the canvas when the session is updated
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub session: EditorSession,
    pub canvas_size: Size,
    pub request: Option<CanvasRequest>,
}

impl Widget for CanvasWidget {
    type Action = SessionUpdate;

    fn accepts_focus(&self) -> bool {
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.max();
        self.size = size;
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_canvas(scene, ctx.size());
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        ctx.request_focus();

        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Secondary),
                state,
                ..
            }) => {
                self.handle_context_click(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, state, .. }) => {
                self.handle_scroll_zoom(ctx, delta, state);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        use masonry::core::keyboard::KeyState;

        if let TextEvent::Keyboard(key_event) = event {
            if key_event.state != KeyState::Down {
                return;
            }
            let cmd = key_event.modifiers.meta() || key_event.modifiers.ctrl();
            let shift = key_event.modifiers.shift();
            self.handle_keyboard_shortcuts(ctx, &key_event.key, cmd, shift);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Mind map with {} nodes",
            self.session.diagram.nodes().len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
