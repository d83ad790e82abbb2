use adcraft_bridge::campaign::{CampaignImageSet, ImageAsset};
use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    select::{Select, SelectEvent, SelectItem, SelectState},
};

use crate::{
    BackendBridge,
    components::{
        callout::{Callout, CalloutKind},
        page_header::PageHeader,
    },
    entities::{DataEntities, downloads_entity::DownloadsEntity},
    formatting::format_kilobytes,
};

#[derive(Debug, Clone)]
struct CampaignOption {
    id: SharedString,
}

impl SelectItem for CampaignOption {
    type Value = SharedString;

    fn title(&self) -> SharedString {
        self.id.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.id
    }
}

fn campaign_options(downloads: &DownloadsEntity) -> Vec<CampaignOption> {
    downloads
        .campaigns
        .iter()
        .flatten()
        .map(|id| CampaignOption {
            id: id.clone().into(),
        })
        .collect()
}

pub struct DownloadsPage {
    downloads: Entity<DownloadsEntity>,
    campaign_selector: Entity<SelectState<Vec<CampaignOption>>>,
    campaigns_listed: bool,
}

impl DownloadsPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        data.downloads.update(cx, |downloads, cx| {
            downloads.reset();
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_campaigns_list().await;
        })
        .detach();

        let campaign_selector = cx.new(|cx| SelectState::new(Vec::new(), None, window, cx));

        let downloads = data.downloads.clone();
        cx.observe_in(&downloads, window, |this, downloads, window, cx| {
            // the list is fetched once per mount
            if !this.campaigns_listed && downloads.read(cx).campaigns.is_some() {
                let options = campaign_options(downloads.read(cx));
                this.campaign_selector.update(cx, |state, cx| {
                    state.set_items(options, window, cx);
                });
                this.campaigns_listed = true;
            }
            cx.notify();
        })
        .detach();

        cx.subscribe_in(
            &campaign_selector,
            window,
            |this, _, event, _, cx| match event {
                SelectEvent::Confirm(value) => {
                    let Some(campaign_id) = value.as_ref().map(|id: &SharedString| id.to_string()) else {
                        return;
                    };
                    this.downloads.update(cx, |downloads, cx| {
                        downloads.select(campaign_id.clone());
                        cx.notify();
                    });

                    let bridge = cx.global::<BackendBridge>().clone();
                    cx.spawn(async move |_, _| {
                        bridge.request_campaign_images(campaign_id).await;
                    })
                    .detach();
                }
            },
        )
        .detach();

        Self {
            downloads,
            campaign_selector,
            campaigns_listed: false,
        }
    }

    fn render_image(
        campaign_id: &str,
        product_name: &str,
        image: &ImageAsset,
        cx: &App,
    ) -> impl IntoElement {
        let campaign_id = campaign_id.to_owned();
        let product_name = product_name.to_owned();
        let filename = image.filename.clone();
        let button_id: SharedString = format!("download_{product_name}_{filename}").into();

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .gap_3()
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(div().font_semibold().child(image.aspect_ratio.clone()))
                    .child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child(image.orientation()),
                    )
                    .child(div().text_sm().child(format_kilobytes(image.size))),
            )
            .child(
                Button::new(button_id)
                    .outline()
                    .small()
                    .icon(IconName::ArrowDown)
                    .label("Download")
                    .on_click(move |_, _, cx| {
                        let bridge = cx.global::<BackendBridge>().clone();
                        let (campaign_id, product_name, filename) =
                            (campaign_id.clone(), product_name.clone(), filename.clone());
                        cx.spawn(async move |_| {
                            bridge
                                .download_image(campaign_id, product_name, filename)
                                .await;
                        })
                        .detach();
                    }),
            )
    }

    fn render_images(images: CampaignImageSet, cx: &App) -> impl IntoElement {
        let products: Vec<_> = images
            .images
            .iter()
            .map(|(product_name, assets)| {
                GroupBox::new()
                    .outline()
                    .child(div().child(product_name.clone()).text_lg().font_bold())
                    .children(assets.iter().map(|image| {
                        Self::render_image(&images.campaign_id, product_name, image, cx)
                    }))
            })
            .collect();

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .child(
                        div()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("Campaign: {}", images.campaign_id)),
                    )
                    .child(format!("{} images", images.total_images)),
            )
            .when(products.is_empty(), |this| {
                this.child(
                    Callout::new(CalloutKind::Info)
                        .child("No images have been generated for this campaign yet."),
                )
            })
            .children(products)
    }
}

impl Render for DownloadsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let downloads = self.downloads.read(cx);
        let campaigns_loaded = downloads.campaigns.is_some();
        let has_campaigns = downloads
            .campaigns
            .as_ref()
            .is_some_and(|campaigns| !campaigns.is_empty());
        let is_loading_images = downloads.is_loading_images;
        let images = downloads.images.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                PageHeader::new("Campaign Downloads")
                    .description("Browse and download generated campaign images"),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Select Campaign").text_xl().font_bold())
                    .child(
                        Select::new(&self.campaign_selector)
                            .min_w_72()
                            .placeholder(if campaigns_loaded {
                                "Choose a campaign..."
                            } else {
                                "Loading campaigns..."
                            }),
                    )
                    .when(campaigns_loaded && !has_campaigns, |this| {
                        this.child(Callout::new(CalloutKind::Info).child(
                            "No campaigns found. Create a campaign first to see downloads here.",
                        ))
                    }),
            )
            .when(is_loading_images, |this| {
                this.child(
                    div()
                        .text_color(cx.theme().muted_foreground)
                        .child("Loading images..."),
                )
            })
            .when_some(images, |this, images| {
                this.child(Self::render_images(images, cx))
            })
    }
}
