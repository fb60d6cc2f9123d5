use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

use crate::{Quit, components::TipForm, quit};

/// Top-level view of the main window. Quits the app once the last window closes.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    form: Entity<TipForm>,
}

impl AppWindow {
    pub fn new(
        form: Entity<TipForm>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            if cx.windows().is_empty() {
                quit(&Quit, cx);
            }
        });

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            form,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(self.form.clone())
    }
}
