use gpui::{
    IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder,
};
use gpui_component::{ActiveTheme, StyledExt};

/// A labelled form field or, with [`FieldItem::inline`], a label/value row.
#[derive(Default, IntoElement)]
pub struct FieldItem {
    label: SharedString,
    description: Option<SharedString>,
    inline: bool,
    child: Option<gpui::AnyElement>,
}

impl FieldItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Puts the label and the child on one line.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl gpui::RenderOnce for FieldItem {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let label = || div().child(self.label.clone()).font_semibold();

        div()
            .w_full()
            .flex()
            .when_else(
                self.inline,
                |this| this.items_center().gap_2().child(label()),
                |this| {
                    this.flex_col().gap_1().child(label()).when_some(
                        self.description,
                        |this, description| {
                            this.child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(description),
                            )
                        },
                    )
                },
            )
            .when_some(self.child, |this, child| this.child(child))
    }
}
