use gpui::{AnyElement, IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A bordered message box colored by its kind.
#[derive(IntoElement)]
pub struct Callout {
    kind: CalloutKind,
    title: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl Callout {
    pub fn new(kind: CalloutKind) -> Self {
        Self {
            kind,
            title: None,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl ParentElement for Callout {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl gpui::RenderOnce for Callout {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = match self.kind {
            CalloutKind::Info => cx.theme().info,
            CalloutKind::Success => cx.theme().success,
            CalloutKind::Warning => cx.theme().warning,
            CalloutKind::Error => cx.theme().danger,
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(color)
            .when_some(self.title, |this, title| {
                this.child(div().text_color(color).font_semibold().child(title))
            })
            .children(self.children)
    }
}
