use adcraft_bridge::campaign::{CampaignState, CampaignStatus};
use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{
    components::{
        callout::{Callout, CalloutKind},
        field_item::FieldItem,
        progress_bar::ProgressBar,
    },
    entities::{DataEntities, campaign_entity::CampaignEntity},
};

/// Read-only view of the submitted campaign's latest status.
pub struct ResultsView {
    campaign: Entity<CampaignEntity>,
}

impl ResultsView {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.campaign, |_, _, cx| cx.notify()).detach();
        Self {
            campaign: data.campaign.clone(),
        }
    }

    fn render_status(&self, status: CampaignStatus, cx: &Context<Self>) -> impl IntoElement {
        let state = status.status;
        let state_color = match state {
            CampaignState::Completed => cx.theme().success,
            CampaignState::Failed => cx.theme().danger,
            CampaignState::Pending | CampaignState::Processing => cx.theme().muted_foreground,
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                FieldItem::new()
                    .inline()
                    .label("Status:")
                    .child(div().text_color(state_color).child(state.label())),
            )
            .child(ProgressBar::new(state.progress()))
            .when(state == CampaignState::Processing, |this| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Generating creatives..."),
                )
            })
            .when_some(status.brief, |this, brief| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(div().font_semibold().child("Campaign Brief"))
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Products:")
                                .child(format!("{} products", brief.products.len())),
                        )
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Target Region:")
                                .child(brief.target_region),
                        )
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Target Audience:")
                                .child(brief.target_audience),
                        )
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Campaign Message:")
                                .child(brief.campaign_message),
                        ),
                )
            })
            .when(!status.logs.is_empty(), |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(div().font_semibold().child("Processing Logs"))
                        .children(
                            status
                                .logs
                                .into_iter()
                                .map(|line| div().text_sm().child(format!("• {line}"))),
                        ),
                )
            })
            .when(state == CampaignState::Failed, |this| {
                this.child(
                    Callout::new(CalloutKind::Error)
                        .child("Campaign generation failed. Check processing logs for details."),
                )
            })
            .when(state == CampaignState::Completed, |this| {
                this.child(
                    Callout::new(CalloutKind::Success).child("Campaign completed successfully!"),
                )
            })
    }
}

impl Render for ResultsView {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let campaign = self.campaign.read(cx);
        let Some(campaign_id) = campaign.campaign_id.clone() else {
            return div();
        };
        let status = campaign.status.clone();

        div().child(
            GroupBox::new()
                .outline()
                .child(div().child("Campaign Results").text_xl().font_bold())
                .child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child(format!("Campaign ID: {campaign_id}")),
                )
                .map(|this| match status {
                    Some(status) => this.child(self.render_status(status, cx)),
                    None => this.child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child("Loading campaign results..."),
                    ),
                }),
        )
    }
}
