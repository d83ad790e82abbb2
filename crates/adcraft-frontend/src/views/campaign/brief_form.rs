use std::path::PathBuf;

use adcraft_bridge::brief::{BriefDraft, MIN_PRODUCTS, ProductDraft};
use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    Disableable, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    input::{Input, InputEvent, InputState},
};

use crate::{
    BackendBridge,
    components::{
        callout::{Callout, CalloutKind},
        field_item::FieldItem,
        image_picker::{display_name, pick_image},
    },
    entities::{DataEntities, campaign_entity::CampaignEntity},
};

/// Input fields of one product. `key` stays stable while products are added
/// and removed, so async image picks land on the right product.
struct ProductFields {
    key: usize,
    name: Entity<InputState>,
    description: Entity<InputState>,
    image: Option<PathBuf>,
}

pub struct BriefForm {
    campaign: Entity<CampaignEntity>,
    products: Vec<ProductFields>,
    next_product_key: usize,
    target_region: Entity<InputState>,
    target_audience: Entity<InputState>,
    campaign_message: Entity<InputState>,
}

/// Creates an input that re-renders the form on every edit, so the submit
/// button follows the validation state.
fn text_input(
    placeholder: &'static str,
    window: &mut Window,
    cx: &mut Context<BriefForm>,
) -> Entity<InputState> {
    let state = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));
    cx.subscribe(&state, |_, _, _: &InputEvent, cx| cx.notify())
        .detach();
    state
}

fn input_value(state: &Entity<InputState>, cx: &App) -> String {
    state.read(cx).value().to_string()
}

impl BriefForm {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.campaign, |_, _, cx| cx.notify()).detach();

        let mut form = Self {
            campaign: data.campaign.clone(),
            products: Vec::with_capacity(MIN_PRODUCTS),
            next_product_key: 0,
            target_region: text_input(
                "e.g., North America, Europe, Asia-Pacific...",
                window,
                cx,
            ),
            target_audience: text_input(
                "e.g., Environmentally conscious families with children, ages 25-45...",
                window,
                cx,
            ),
            campaign_message: text_input(
                "e.g., Clean your family's clothes the natural way...",
                window,
                cx,
            ),
        };
        for _ in 0..MIN_PRODUCTS {
            form.push_product(window, cx);
        }
        form
    }

    fn push_product(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let key = self.next_product_key;
        self.next_product_key += 1;
        self.products.push(ProductFields {
            key,
            name: text_input("Product name...", window, cx),
            description: text_input("Product description...", window, cx),
            image: None,
        });
    }

    fn add_product(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.push_product(window, cx);
        cx.notify();
    }

    fn remove_product(&mut self, key: usize, cx: &mut Context<Self>) {
        if self.products.len() > MIN_PRODUCTS {
            self.products.retain(|product| product.key != key);
            cx.notify();
        }
    }

    fn set_image(&mut self, key: usize, image: Option<PathBuf>, cx: &mut Context<Self>) {
        if let Some(product) = self.products.iter_mut().find(|product| product.key == key) {
            product.image = image;
            cx.notify();
        }
    }

    fn choose_image(&mut self, key: usize, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            if let Some(path) = pick_image().await {
                let _ = this.update(cx, |this, cx| this.set_image(key, Some(path), cx));
            }
        })
        .detach();
    }

    /// Current form contents.
    pub fn draft(&self, cx: &App) -> BriefDraft {
        BriefDraft {
            products: self
                .products
                .iter()
                .map(|product| ProductDraft {
                    name: input_value(&product.name, cx),
                    description: input_value(&product.description, cx),
                    image: product.image.clone(),
                })
                .collect(),
            target_region: input_value(&self.target_region, cx),
            target_audience: input_value(&self.target_audience, cx),
            campaign_message: input_value(&self.campaign_message, cx),
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let draft = self.draft(cx);
        if !draft.is_submittable() {
            return;
        }

        let bridge = cx.global::<BackendBridge>().clone();
        self.campaign.update(cx, |campaign, cx| {
            campaign.start_submission();
            cx.notify();
        });
        cx.spawn(async move |_, _| {
            bridge.submit_brief(draft).await;
        })
        .detach();
    }

    fn render_product(
        &self,
        index: usize,
        product: &ProductFields,
        is_submitting: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let key = product.key;
        let can_remove = self.products.len() > MIN_PRODUCTS;
        let chosen_file: SharedString = product
            .image
            .as_deref()
            .map(display_name)
            .unwrap_or_else(|| "No file chosen".to_owned())
            .into();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().font_semibold().child(format!("Product {}", index + 1)))
                    .when(can_remove, |this| {
                        this.child(
                            Button::new(("remove_product", key))
                                .ghost()
                                .small()
                                .icon(IconName::Close)
                                .on_click(cx.listener(move |this, _, _, cx| {
                                    this.remove_product(key, cx);
                                })),
                        )
                    }),
            )
            .child(Input::new(&product.name))
            .child(Input::new(&product.description))
            .child(
                FieldItem::new()
                    .label("Product Image (Optional)")
                    .description("Upload an image for this product (JPG, PNG, WEBP, GIF, BMP)")
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(
                                Button::new(("choose_product_image", key))
                                    .outline()
                                    .small()
                                    .label("Choose file")
                                    .disabled(is_submitting)
                                    .on_click(cx.listener(move |this, _, _, cx| {
                                        this.choose_image(key, cx);
                                    })),
                            )
                            .child(div().text_sm().child(chosen_file))
                            .when(product.image.is_some(), |this| {
                                this.child(
                                    Button::new(("clear_product_image", key))
                                        .ghost()
                                        .small()
                                        .icon(IconName::Close)
                                        .disabled(is_submitting)
                                        .on_click(cx.listener(move |this, _, _, cx| {
                                            this.set_image(key, None, cx);
                                        })),
                                )
                            }),
                    ),
            )
    }
}

impl Render for BriefForm {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_submitting = self.campaign.read(cx).is_submitting;
        let is_submittable = self.draft(cx).is_submittable();
        let products: Vec<_> = self
            .products
            .iter()
            .enumerate()
            .map(|(index, product)| self.render_product(index, product, is_submitting, cx))
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
                            .flex()
                            .flex_col()
                            .child(div().child("Campaign Brief").text_xl().font_bold())
                            .child("Create a campaign brief to generate creative assets"),
                    )
                    .child(
                        Button::new("submit_brief")
                            .primary()
                            .icon(IconName::ArrowUp)
                            .loading(is_submitting)
                            .disabled(!is_submittable)
                            .label("Generate Campaign")
                            .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                    ),
            )
            .child(
                FieldItem::new()
                    .label("Products")
                    .description("At least 2 products are required")
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(products)
                            .child(
                                div().child(
                                    Button::new("add_product")
                                        .outline()
                                        .icon(IconName::Plus)
                                        .label("Add Product")
                                        .on_click(cx.listener(|this, _, window, cx| {
                                            this.add_product(window, cx);
                                        })),
                                ),
                            ),
                    ),
            )
            .child(
                FieldItem::new()
                    .label("Target Region")
                    .description("Geographic market for the campaign")
                    .child(Input::new(&self.target_region)),
            )
            .child(
                FieldItem::new()
                    .label("Target Audience")
                    .description("Demographics and characteristics")
                    .child(Input::new(&self.target_audience)),
            )
            .child(
                FieldItem::new()
                    .label("Campaign Message")
                    .description("Main message to display on creatives")
                    .child(Input::new(&self.campaign_message)),
            )
            .when(!is_submittable, |this| {
                this.child(Callout::new(CalloutKind::Warning).child(
                    "Please fill in all required fields. At least 2 products are required.",
                ))
            })
    }
}
