use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState, MaskPattern},
    switch::Switch,
    v_flex,
};
use tip_core::TipCalculator;
use tracing::debug;

use crate::components::make_button;

/// The tip calculator screen: bill and percent inputs, round-up switch and
/// the resulting tip.
pub struct TipForm {
    calculator: TipCalculator,
    bill_amount: Entity<InputState>,
    tip_percent: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl TipForm {
    pub fn new(
        mut calculator: TipCalculator,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bill_amount = make_number_input("Bill Amount", window, cx);
        let tip_percent = make_number_input("Tip Percentage", window, cx);

        let initial_percent = calculator.percent_text().to_string();
        if !initial_percent.is_empty() {
            tip_percent.update(cx, |state, cx| state.set_value(initial_percent, window, cx));
            // The number mask may have dropped or reshaped part of the text.
            let shown = tip_percent.read(cx).value().to_string();
            if calculator.sync_percent_text(&shown) {
                debug!(calculator = %calculator, "default tip percent adjusted by input mask");
            }
        }

        let subscriptions = vec![
            cx.observe(&bill_amount, |this: &mut Self, state, cx| {
                let text = state.read(cx).value().to_string();
                if this.calculator.sync_amount_text(&text) {
                    debug!(calculator = %this.calculator, "bill amount changed");
                    cx.notify();
                }
            }),
            cx.observe(&tip_percent, |this: &mut Self, state, cx| {
                let text = state.read(cx).value().to_string();
                if this.calculator.sync_percent_text(&text) {
                    debug!(calculator = %this.calculator, "tip percent changed");
                    cx.notify();
                }
            }),
        ];

        Self {
            calculator,
            bill_amount,
            tip_percent,
            _subscriptions: subscriptions,
        }
    }

    fn set_round_up(
        &mut self,
        round_up: bool,
        cx: &mut Context<Self>,
    ) {
        self.calculator.set_round_up(round_up);
        debug!(calculator = %self.calculator, "round up toggled");
        cx.notify();
    }

    /// Empties both inputs and turns the round-up switch off.
    fn clear(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.calculator.reset();
        self.bill_amount
            .update(cx, |state, cx| state.set_value("", window, cx));
        self.tip_percent
            .update(cx, |state, cx| state.set_value("", window, cx));
        debug!("form cleared");
        cx.notify();
    }
}

impl Render for TipForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let symbol = self.calculator.currency().symbol;

        v_flex()
            .w_full()
            .px_10()
            .py_5()
            .gap_6()
            .child(div().text_lg().child("Calculate Tip"))
            .child(make_input_row(
                &self.bill_amount,
                format!("Bill Amount ({symbol})"),
            ))
            .child(make_input_row(&self.tip_percent, "Tip Percentage (%)"))
            .child(
                make_labeled_row("Round up tip?").justify_between().child(
                    Switch::new("round-up")
                        .checked(self.calculator.round_up())
                        .on_click(cx.listener(|this, checked: &bool, _, cx| {
                            this.set_round_up(*checked, cx);
                        })),
                ),
            )
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(format!("Tip Amount: {}", self.calculator.tip())),
            )
            .child(h_flex().justify_center().child(make_button(
                "clear",
                "Clear",
                cx.listener(|this, _: &ClickEvent, window, cx| this.clear(window, cx)),
            )))
    }
}

/// A single-line input that only accepts numbers.
fn make_number_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<TipForm>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(4),
    };

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into())
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_5().child(
        div()
            .w(px(150.))
            .flex_shrink_0()
            .child(label.into()),
    )
}
