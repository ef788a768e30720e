// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for CanvasWidget

use super::{CanvasWidget, SessionUpdate};
use crate::editing::EditorSession;
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view with a callback for session updates.
///
/// `revision` must change whenever the session was modified outside the
/// canvas (menus, dialogs, file loads); the widget then picks up the new
/// session. Updates that came from the canvas itself keep the revision.
pub fn canvas_view<State, F>(
    session: EditorSession,
    revision: u64,
    on_session_update: F,
) -> CanvasView<State, F>
where
    F: Fn(&mut State, SessionUpdate),
{
    CanvasView {
        session,
        revision,
        on_session_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for CanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CanvasView<State, F> {
    session: EditorSession,
    revision: u64,
    on_session_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for CanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, SessionUpdate) + 'static> View<State, (), ViewCtx>
    for CanvasView<State, F>
{
    type Element = Pod<CanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CanvasWidget::new(self.session.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.revision != prev.revision {
            tracing::debug!(
                "[CanvasView::rebuild] revision {} -> {}, updating widget",
                prev.revision,
                self.revision
            );
            let mut widget = element.downcast::<CanvasWidget>();
            widget.widget.session = self.session.clone();
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<SessionUpdate>() {
            Some(update) => {
                (self.on_session_update)(app_state, *update);
                // Propagate to the root so menus and the status line rebuild
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
