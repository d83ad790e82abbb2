use adcraft_bridge::notification::{Notification, NotificationKind};
use gpui::{Entity, IntoElement, ParentElement, Styled, div, prelude::FluentBuilder};
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
};

use crate::entities::notifications_entity::NotificationsEntity;

/// Queued notifications in insertion order, each with its own dismiss button.
#[derive(IntoElement)]
pub struct NotificationBar {
    notifications: Entity<NotificationsEntity>,
}

impl NotificationBar {
    pub fn new(notifications: &Entity<NotificationsEntity>) -> Self {
        Self {
            notifications: notifications.clone(),
        }
    }
}

impl gpui::RenderOnce for NotificationBar {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let items: Vec<Notification> = self.notifications.read(cx).queue.iter().cloned().collect();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .when(!items.is_empty(), |this| this.mb_4())
            .children(items.into_iter().map(|notification| {
                let color = match notification.kind {
                    NotificationKind::Success => cx.theme().success,
                    NotificationKind::Error => cx.theme().danger,
                };
                let notifications = self.notifications.clone();
                let id = notification.id;

                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_3()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .border_1()
                    .border_color(color)
                    .child(div().text_color(color).child(notification.message))
                    .child(
                        Button::new(("dismiss_notification", id.value() as usize))
                            .ghost()
                            .small()
                            .icon(IconName::Close)
                            .on_click(move |_, _, cx| {
                                notifications.update(cx, |this, cx| this.dismiss(id, cx));
                            }),
                    )
            }))
    }
}
