mod campaign;
mod downloads_page;
mod metrics_page;
mod upload_page;

use gpui::{
    AnyView, AppContext, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, IconName, Side, StyledExt,
    sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem},
};

use crate::{
    BackendBridge,
    components::notification_bar::NotificationBar,
    entities::DataEntities,
    views::{
        campaign::CampaignPage, downloads_page::DownloadsPage, metrics_page::MetricsPage,
        upload_page::UploadPage,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PageUi {
    Upload,
    Campaign,
    Downloads,
    Metrics,
}

pub struct FrontendUi {
    data: DataEntities,
    active_page: PageUi,
    active_page_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.notifications, |_, _, cx| cx.notify())
            .detach();
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();

        let initial_view = cx.new(|cx| UploadPage::new(data, window, cx)).into();
        Self {
            data: data.clone(),
            active_page: PageUi::Upload,
            active_page_view: initial_view,
        }
    }

    /// Mounts `page` anew. Leaving the campaign page stops its status polling.
    pub fn change_page(&mut self, page: PageUi, window: &mut Window, cx: &mut Context<Self>) {
        if self.active_page == PageUi::Campaign && page != PageUi::Campaign {
            let bridge = cx.global::<BackendBridge>().clone();
            cx.spawn(async move |_, _| {
                bridge.stop_watching_campaign().await;
            })
            .detach();
        }

        let new_page = match page {
            PageUi::Upload => cx.new(|cx| UploadPage::new(&self.data, window, cx)).into(),
            PageUi::Campaign => cx
                .new(|cx| CampaignPage::new(&self.data, window, cx))
                .into(),
            PageUi::Downloads => cx
                .new(|cx| DownloadsPage::new(&self.data, window, cx))
                .into(),
            PageUi::Metrics => cx.new(|cx| MetricsPage::new(&self.data, cx)).into(),
        };
        self.active_page = page;
        self.active_page_view = new_page;
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let api_base_url = self.data.settings.read(cx).config.api_base_url.clone();
        let on_page_change = |page| {
            cx.listener(move |this, _, window, cx| {
                this.change_page(page, window, cx);
            })
        };

        div()
            .flex()
            .size_full()
            .child(
                Sidebar::new(Side::Left)
                    .header(
                        SidebarHeader::new().child(
                            div()
                                .flex()
                                .flex_col()
                                .child(div().child("adcraft").font_bold())
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(cx.theme().muted_foreground)
                                        .child(api_base_url),
                                ),
                        ),
                    )
                    .child(
                        SidebarGroup::new("Campaigns").child(
                            SidebarMenu::new()
                                .child(
                                    SidebarMenuItem::new("Upload Assets")
                                        .active(self.active_page == PageUi::Upload)
                                        .icon(IconName::ArrowUp)
                                        .on_click(on_page_change(PageUi::Upload)),
                                )
                                .child(
                                    SidebarMenuItem::new("Create Campaign")
                                        .active(self.active_page == PageUi::Campaign)
                                        .icon(IconName::Plus)
                                        .on_click(on_page_change(PageUi::Campaign)),
                                )
                                .child(
                                    SidebarMenuItem::new("Downloads")
                                        .active(self.active_page == PageUi::Downloads)
                                        .icon(IconName::ArrowDown)
                                        .on_click(on_page_change(PageUi::Downloads)),
                                )
                                .child(
                                    SidebarMenuItem::new("Metrics")
                                        .active(self.active_page == PageUi::Metrics)
                                        .icon(IconName::LayoutDashboard)
                                        .on_click(on_page_change(PageUi::Metrics)),
                                ),
                        ),
                    ),
            )
            .child(
                div()
                    .id("active_page")
                    .p_5()
                    .size_full()
                    .flex()
                    .flex_col()
                    .overflow_y_scroll()
                    .child(NotificationBar::new(&self.data.notifications))
                    .child(self.active_page_view.clone()),
            )
    }
}
