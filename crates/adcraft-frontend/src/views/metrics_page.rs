use adcraft_bridge::campaign::{AssetStatus, CampaignMetric};
use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{
    BackendBridge,
    components::{
        callout::{Callout, CalloutKind},
        field_item::FieldItem,
        page_header::PageHeader,
    },
    entities::{DataEntities, metrics_entity::MetricsEntity},
    formatting::{format_timestamp, or_fallback},
};

pub struct MetricsPage {
    metrics: Entity<MetricsEntity>,
}

impl MetricsPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        data.metrics.update(cx, |metrics, cx| {
            metrics.metrics = None;
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_metrics().await;
        })
        .detach();

        cx.observe(&data.metrics, |_, _, cx| cx.notify()).detach();
        Self {
            metrics: data.metrics.clone(),
        }
    }
}

fn asset_status_label(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Reused => "Assets reused",
        AssetStatus::Generated => "AI generated",
    }
}

fn summary_count(value: u32, label: &'static str) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .child(div().text_xl().font_bold().child(value.to_string()))
        .child(div().text_sm().child(label))
}

fn render_metric(metric: CampaignMetric, cx: &App) -> impl IntoElement {
    let (status_label, status_color) = if metric.is_completed() {
        ("Completed", cx.theme().success)
    } else {
        ("Failed", cx.theme().danger)
    };
    let brief = metric.campaign_brief.as_ref();
    let products: Vec<_> = brief
        .map(|brief| brief.products.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|product| {
            let asset_status = metric
                .product_metrics
                .get(&product.name)
                .map(|product_metric| product_metric.asset_status);
            div()
                .flex()
                .gap_3()
                .child(div().font_semibold().child(product.name.clone()))
                .when_some(asset_status, |this, asset_status| {
                    this.child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child(asset_status_label(asset_status)),
                    )
                })
        })
        .collect();

    GroupBox::new()
        .outline()
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_lg()
                        .font_bold()
                        .child(format!("Campaign {}", metric.campaign_id)),
                )
                .child(
                    div()
                        .flex()
                        .gap_3()
                        .child(div().text_color(status_color).child(status_label))
                        .child(format!("{} products", metric.summary.total_products))
                        .child(format!(
                            "{} images",
                            metric.summary.total_creatives_generated
                        )),
                ),
        )
        .child(
            FieldItem::new()
                .inline()
                .label("Created:")
                .child(format_timestamp(&metric.timestamp)),
        )
        .child(
            FieldItem::new()
                .inline()
                .label("Status Reason:")
                .child(or_fallback(metric.reason.as_deref(), "No reason provided").to_owned()),
        )
        .child(
            FieldItem::new().inline().label("Target Region:").child(
                or_fallback(brief.map(|brief| brief.target_region.as_str()), "N/A").to_owned(),
            ),
        )
        .child(
            FieldItem::new().inline().label("Target Audience:").child(
                or_fallback(brief.map(|brief| brief.target_audience.as_str()), "N/A").to_owned(),
            ),
        )
        .child(
            FieldItem::new().inline().label("Campaign Message:").child(
                or_fallback(brief.map(|brief| brief.campaign_message.as_str()), "N/A")
                    .to_owned(),
            ),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(div().font_semibold().child("Products"))
                .children(products),
        )
        .child(
            div()
                .flex()
                .gap_8()
                .child(summary_count(
                    metric.summary.products_with_existing_assets,
                    "Assets Reused",
                ))
                .child(summary_count(
                    metric.summary.products_with_generated_assets,
                    "AI Generated",
                ))
                .child(summary_count(
                    metric.summary.total_creatives_generated,
                    "Total Creatives",
                )),
        )
}

impl Render for MetricsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let metrics = self.metrics.read(cx).metrics.clone();
        let tracked = metrics.as_ref().map_or(0, Vec::len);

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                PageHeader::new("Campaign Metrics")
                    .description("Analytics and performance metrics for all campaigns")
                    .action(format!("{tracked} campaigns tracked")),
            )
            .map(|this| match metrics {
                None => this.child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child("Loading metrics..."),
                ),
                Some(metrics) if metrics.is_empty() => this.child(
                    Callout::new(CalloutKind::Info).child(
                        "No campaign metrics available yet. Generate campaigns to see analytics here.",
                    ),
                ),
                Some(metrics) => this.children(
                    metrics
                        .into_iter()
                        .map(|metric| render_metric(metric, cx)),
                ),
            })
    }
}
