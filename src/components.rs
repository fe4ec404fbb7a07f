use std::collections::HashMap;

use anyhow::{anyhow, Result};
use eframe::egui::{self, Align2, Color32, FontId, Label, RichText, Sense};
use egui_extras::RetainedImage;

use crate::models::Product;
use crate::state::{Modal, Page, Tab, ViewSnapshot};
use crate::{utils, Message, Store};

pub const PURPLE: Color32 = Color32::from_rgb(0x93, 0x33, 0xea);
pub const BRAND: Color32 = Color32::from_rgb(0x6b, 0x4f, 0xa0);
pub const LILAC: Color32 = Color32::from_rgb(0xf3, 0xe8, 0xff);
pub const DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const AMBER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const PLACEHOLDER: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);

const ICONS: [(&str, &[u8]); 15] = [
    ("back", include_bytes!("../icons/back.svg")),
    ("search", include_bytes!("../icons/search.svg")),
    ("bell", include_bytes!("../icons/bell.svg")),
    ("cart", include_bytes!("../icons/cart.svg")),
    ("heart", include_bytes!("../icons/heart.svg")),
    ("heart-filled", include_bytes!("../icons/heart-filled.svg")),
    ("home", include_bytes!("../icons/home.svg")),
    ("grid", include_bytes!("../icons/grid.svg")),
    ("bag", include_bytes!("../icons/bag.svg")),
    ("book", include_bytes!("../icons/book.svg")),
    ("user", include_bytes!("../icons/user.svg")),
    ("close", include_bytes!("../icons/close.svg")),
    ("package", include_bytes!("../icons/package.svg")),
    ("tag", include_bytes!("../icons/tag.svg")),
    ("gift", include_bytes!("../icons/gift.svg")),
];

pub struct Icons(HashMap<&'static str, RetainedImage>);

impl Icons {
    pub fn load() -> Result<Self> {
        let mut icons = HashMap::new();
        for (name, bytes) in ICONS {
            let image = RetainedImage::from_svg_bytes_with_size(
                name,
                bytes,
                egui_extras::image::FitTo::Size(24, 24),
            )
            .map_err(|e| anyhow!("icon {name}: {e}"))?;
            icons.insert(name, image);
        }
        Ok(Self(icons))
    }

    pub fn get(&self, name: &str) -> Option<&RetainedImage> {
        self.0.get(name)
    }
}

/// Everything a view needs to draw one frame.
pub struct Scope<'a> {
    pub ctx: &'a egui::Context,
    pub icons: &'a Icons,
    pub snapshot: &'a ViewSnapshot,
    pub store: &'a Store,
}

impl Scope<'_> {
    pub fn icon_button(&self, ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
        match self.icons.get(name) {
            Some(img) => ui.add(
                egui::ImageButton::new(img.texture_id(self.ctx), egui::vec2(size, size))
                    .frame(false),
            ),
            None => ui.button(name),
        }
    }

    pub fn icon(&self, ui: &mut egui::Ui, name: &str, size: f32) {
        if let Some(img) = self.icons.get(name) {
            ui.image(img.texture_id(self.ctx), egui::vec2(size, size));
        }
    }
}

pub fn count_badge(ui: &mut egui::Ui, count: usize, fill: Color32, text: Color32) {
    if count > 0 {
        ui.label(
            RichText::new(format!(" {count} "))
                .small()
                .strong()
                .color(text)
                .background_color(fill),
        );
    }
}

pub fn pill(ui: &mut egui::Ui, text: impl Into<String>, fill: Color32, color: Color32) {
    ui.label(
        RichText::new(format!(" {} ", text.into()))
            .small()
            .strong()
            .color(color)
            .background_color(fill),
    );
}

pub fn header(ui: &mut egui::Ui, scope: &Scope) {
    let snapshot = scope.snapshot;
    ui.horizontal_centered(|ui| {
        if let Page::ProductDetail(_) = snapshot.view.page {
            if scope
                .icon_button(ui, "back", 24.)
                .on_hover_text("Go back")
                .clicked()
            {
                scope.store.send(Message::Back);
            }
        }
        ui.label(RichText::new(snapshot.view.title()).heading().strong().color(DARK));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            count_badge(ui, snapshot.cart_count as usize, LILAC, DARK);
            if scope
                .icon_button(ui, "cart", 20.)
                .on_hover_text("Shopping Cart")
                .clicked()
            {
                tracing::info!("cart clicked with {} items", snapshot.cart_count);
            }

            count_badge(ui, snapshot.unread_count, RED, Color32::WHITE);
            if scope
                .icon_button(ui, "bell", 20.)
                .on_hover_text("Notifications")
                .clicked()
            {
                scope.store.send(Message::OpenModal(Modal::Notifications));
            }

            // the profile tab lists favorites
            if scope
                .icon_button(ui, "heart", 20.)
                .on_hover_text("Wishlist")
                .clicked()
            {
                scope.store.send(Message::SelectTab(Tab::Profile));
            }

            if scope
                .icon_button(ui, "search", 20.)
                .on_hover_text("Search")
                .clicked()
            {
                scope.store.send(Message::OpenModal(Modal::Search));
            }
        });
    });
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "home",
        Tab::Shop => "grid",
        Tab::Orders => "bag",
        Tab::Learn => "book",
        Tab::Profile => "user",
    }
}

pub fn bottom_nav(ui: &mut egui::Ui, scope: &Scope) {
    let active = scope.snapshot.tab;
    ui.columns(Tab::ALL.len(), |columns| {
        for (ui, tab) in columns.iter_mut().zip(Tab::ALL) {
            ui.vertical_centered(|ui| {
                let color = if tab == active { PURPLE } else { MUTED };
                let icon = scope.icon_button(ui, tab_icon(tab), 24.);
                let label = ui.add(
                    Label::new(RichText::new(tab.label()).small().color(color))
                        .sense(Sense::click()),
                );
                if icon.clicked() || label.clicked() {
                    scope.store.send(Message::SelectTab(tab));
                }
            });
        }
    });
}

/// Placeholder artwork for products, remote images are not fetched.
pub fn product_image(ui: &mut egui::Ui, product: &Product, height: f32) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click());
    ui.painter().rect_filled(rect, 8.0, PLACEHOLDER);
    let initial = product.name.chars().next().unwrap_or('?').to_string();
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(height * 0.4),
        BRAND,
    );
    response
}

/// `favorite` is `None` when the card has no heart button.
pub fn product_card(ui: &mut egui::Ui, scope: &Scope, product: &Product, favorite: Option<bool>) {
    egui::Frame::none()
        .fill(Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, PLACEHOLDER))
        .rounding(12.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            let mut clicked = product_image(ui, product, 110.).clicked();

            ui.horizontal_wrapped(|ui| {
                if let Some(discount) = product.discount() {
                    pill(ui, format!("-{discount}%"), RED, Color32::WHITE);
                }
                if product.is_new {
                    pill(ui, "NEW", PURPLE, Color32::WHITE);
                } else if product.is_best_seller {
                    pill(ui, "BEST SELLER", AMBER, Color32::WHITE);
                }
                if product.is_low_stock() {
                    pill(ui, format!("Only {} left", product.stock), DARK, Color32::WHITE);
                }
                if let Some(is_favorite) = favorite {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if is_favorite { "heart-filled" } else { "heart" };
                        if scope.icon_button(ui, icon, 18.).clicked() {
                            scope.store.send(Message::ToggleFavorite(product.id));
                        }
                    });
                }
            });

            ui.label(RichText::new(&product.category).small().color(MUTED));
            clicked |= ui
                .add(Label::new(RichText::new(&product.name).strong().color(DARK)).sense(Sense::click()))
                .clicked();
            ui.horizontal(|ui| {
                ui.label(RichText::new("★").color(AMBER));
                ui.label(format!("{:.1}", product.rating));
                ui.label(RichText::new(format!("({})", product.review_count)).color(MUTED));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new(utils::format_price(product.price)).strong());
                if let Some(original) = product.original_price {
                    ui.label(
                        RichText::new(utils::format_price(original))
                            .small()
                            .strikethrough()
                            .color(MUTED),
                    );
                }
            });

            if clicked {
                scope.store.send(Message::OpenProduct(product.id));
            }
        });
}
