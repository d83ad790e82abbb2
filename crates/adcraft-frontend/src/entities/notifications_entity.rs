use adcraft_bridge::notification::{NotificationId, NotificationMessage, NotificationQueue};

/// Notifications waiting for the user, shown above the active page.
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    pub queue: NotificationQueue,
}

impl NotificationsEntity {
    pub fn push(&mut self, message: NotificationMessage, cx: &mut gpui::Context<Self>) {
        self.queue.push(message);
        cx.notify();
    }

    pub fn dismiss(&mut self, id: NotificationId, cx: &mut gpui::Context<Self>) {
        if self.queue.dismiss(id) {
            cx.notify();
        }
    }
}
