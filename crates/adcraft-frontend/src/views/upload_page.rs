use std::path::PathBuf;

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    Disableable, IconName,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    input::{Input, InputState},
};

use crate::{
    BackendBridge,
    components::{
        callout::{Callout, CalloutKind},
        field_item::FieldItem,
        image_picker::{display_name, pick_image},
        page_header::PageHeader,
    },
    entities::{
        DataEntities,
        upload_entity::{UploadEntity, UploadEvent},
    },
    formatting::format_whole_kilobytes,
};

pub struct UploadPage {
    upload: Entity<UploadEntity>,
    product_name: Entity<InputState>,
    image: Option<PathBuf>,
}

impl UploadPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let product_name =
            cx.new(|cx| InputState::new(window, cx).placeholder("e.g., coca_cola, water, etc."));

        cx.observe(&data.upload, |_, _, cx| cx.notify()).detach();
        // a successful upload must not be resent with a stale file
        cx.subscribe_in(
            &data.upload,
            window,
            |this, _, event: &UploadEvent, window, cx| {
                if *event == UploadEvent::Uploaded {
                    this.product_name
                        .update(cx, |state, cx| state.set_value("", window, cx));
                    this.image = None;
                    cx.notify();
                }
            },
        )
        .detach();

        Self {
            upload: data.upload.clone(),
            product_name,
            image: None,
        }
    }

    fn choose_image(&mut self, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            if let Some(path) = pick_image().await {
                let _ = this.update(cx, |this, cx| {
                    this.image = Some(path);
                    this.upload.update(cx, |upload, cx| {
                        upload.file_changed();
                        cx.notify();
                    });
                    cx.notify();
                });
            }
        })
        .detach();
    }

    fn upload(&mut self, cx: &mut Context<Self>) {
        let bridge = cx.global::<BackendBridge>().clone();
        let product_name = self.product_name.read(cx).value().to_string();
        let image = self.image.clone();

        self.upload.update(cx, |upload, cx| {
            upload.start();
            cx.notify();
        });
        cx.spawn(async move |_, _| {
            bridge.upload_image(product_name, image).await;
        })
        .detach();
    }
}

impl Render for UploadPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let upload = self.upload.read(cx);
        let is_uploading = upload.is_uploading;
        let last_result = upload.last_result.clone();
        let chosen_file = self
            .image
            .as_deref()
            .map(display_name)
            .unwrap_or_else(|| "No file chosen".to_owned());

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                PageHeader::new("Upload Product Assets")
                    .description("Upload product images that will be used in campaign generation"),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(
                        FieldItem::new()
                            .label("Product Name")
                            .description("Enter the name of the product for this image")
                            .child(Input::new(&self.product_name).disabled(is_uploading)),
                    )
                    .child(
                        FieldItem::new()
                            .label("Product Image")
                            .description("Select an image file (JPG, PNG, WEBP, GIF, BMP)")
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(
                                        Button::new("choose_image")
                                            .outline()
                                            .label("Choose file")
                                            .disabled(is_uploading)
                                            .on_click(cx.listener(|this, _, _, cx| {
                                                this.choose_image(cx);
                                            })),
                                    )
                                    .child(div().text_sm().child(chosen_file)),
                            ),
                    )
                    .child(
                        div().child(
                            Button::new("upload_image")
                                .primary()
                                .icon(IconName::ArrowUp)
                                .loading(is_uploading)
                                .label("Upload Image")
                                .on_click(cx.listener(|this, _, _, cx| this.upload(cx))),
                        ),
                    ),
            )
            .when_some(last_result, |this, result| {
                this.child(
                    Callout::new(CalloutKind::Success)
                        .title("Upload successful")
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Product:")
                                .child(result.product_name),
                        )
                        .child(FieldItem::new().inline().label("File:").child(format!(
                            "{} ({})",
                            result.file_info.filename,
                            format_whole_kilobytes(result.file_info.size)
                        )))
                        .child(
                            FieldItem::new()
                                .inline()
                                .label("Stored in:")
                                .child(result.asset_directory),
                        ),
                )
            })
    }
}
