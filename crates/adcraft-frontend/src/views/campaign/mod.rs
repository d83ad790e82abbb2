mod brief_form;
mod results_view;

use gpui::{AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};

use crate::{
    BackendBridge,
    components::page_header::PageHeader,
    entities::{DataEntities, campaign_entity::CampaignEntity},
    views::campaign::{brief_form::BriefForm, results_view::ResultsView},
};

/// Brief form with the results of the submitted campaign underneath. While
/// mounted, the current campaign is polled until it is finished.
pub struct CampaignPage {
    brief_form: Entity<BriefForm>,
    results: Entity<ResultsView>,
    watched_campaign: Option<String>,
}

impl CampaignPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.campaign, |this, campaign, cx| {
            this.watch_current(&campaign, cx);
        })
        .detach();

        let mut page = Self {
            brief_form: cx.new(|cx| BriefForm::new(data, window, cx)),
            results: cx.new(|cx| ResultsView::new(data, cx)),
            watched_campaign: None,
        };
        page.watch_current(&data.campaign, cx);
        page
    }

    /// Asks the backend to poll the current campaign once it changes.
    fn watch_current(&mut self, campaign: &Entity<CampaignEntity>, cx: &mut Context<Self>) {
        let campaign_id = campaign.read(cx).campaign_id.clone();
        if campaign_id.is_none() || campaign_id == self.watched_campaign {
            return;
        }
        self.watched_campaign = campaign_id.clone();

        let bridge = cx.global::<BackendBridge>().clone();
        if let Some(campaign_id) = campaign_id {
            cx.spawn(async move |_, _| {
                bridge.watch_campaign(campaign_id).await;
            })
            .detach();
        }
    }
}

impl Render for CampaignPage {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                PageHeader::new("Create Campaign")
                    .description("Submit a brief and follow the generation of its creatives"),
            )
            .child(self.brief_form.clone())
            .child(self.results.clone())
    }
}
