use gpui::{IntoElement, ParentElement, Styled, div, relative};
use gpui_component::ActiveTheme;

/// A horizontal bar filled up to `percent`.
#[derive(IntoElement)]
pub struct ProgressBar {
    percent: u8,
}

impl ProgressBar {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }
}

impl gpui::RenderOnce for ProgressBar {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .flex_1()
                    .h_2()
                    .rounded_full()
                    .bg(cx.theme().muted)
                    .child(
                        div()
                            .h_full()
                            .rounded_full()
                            .bg(cx.theme().primary)
                            .w(relative(f32::from(self.percent) / 100.0)),
                    ),
            )
            .child(div().text_sm().child(format!("{}%", self.percent)))
    }
}
