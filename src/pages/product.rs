use eframe::egui::{self, Color32, Label, RichText, Sense};

use crate::components::{pill, product_image, AMBER, DARK, LILAC, MUTED, PURPLE, RED};
use crate::models::{Product, ProductId};
use crate::windows::View;
use crate::{utils, Message, Scope};

const RELATED_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Details,
    Ingredients,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [Self::Details, Self::Ingredients, Self::Reviews];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Ingredients => "Ingredients",
            Self::Reviews => "Reviews",
        }
    }
}

/// Next stepper value, kept within `1..=stock`.
pub fn step_quantity(quantity: u32, delta: i32, stock: u32) -> u32 {
    let max = stock.max(1) as i64;
    (quantity as i64 + delta as i64).clamp(1, max) as u32
}

/// Local state of the detail screen, reset whenever another product is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDetailPage {
    product: Option<ProductId>,
    quantity: u32,
    tab: DetailTab,
}

impl Default for ProductDetailPage {
    fn default() -> Self {
        Self {
            product: None,
            quantity: 1,
            tab: DetailTab::default(),
        }
    }
}

impl ProductDetailPage {
    fn sync(&mut self, id: ProductId) {
        if self.product != Some(id) {
            *self = Self {
                product: Some(id),
                ..Self::default()
            };
        }
    }

    /// Shown when the selected product cannot be resolved.
    fn missing(&self, ui: &mut egui::Ui, scope: &Scope) {
        ui.vertical_centered(|ui| {
            ui.add_space(48.);
            ui.label(RichText::new("This product is no longer available.").color(MUTED));
            if ui.button("Back to Home").clicked() {
                scope.store.send(Message::Back);
            }
        });
    }

    fn summary(&self, ui: &mut egui::Ui, scope: &Scope, product: &Product) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&product.category).small().color(MUTED));
                ui.label(RichText::new(&product.name).heading().strong().color(DARK));
                ui.label(RichText::new(&product.size).color(MUTED));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let favorite = scope.snapshot.is_favorite(product.id);
                let icon = if favorite { "heart-filled" } else { "heart" };
                if scope.icon_button(ui, icon, 24.).clicked() {
                    scope.store.send(Message::ToggleFavorite(product.id));
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new(utils::star_row(product.rating)).color(AMBER));
            ui.label(RichText::new(format!("{:.1}", product.rating)).strong());
            ui.label(RichText::new(format!("({} reviews)", product.review_count)).color(MUTED));
        });

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(utils::format_price(product.price))
                    .heading()
                    .strong()
                    .color(DARK),
            );
            if let Some(original) = product.original_price {
                ui.label(
                    RichText::new(utils::format_price(original))
                        .strikethrough()
                        .color(MUTED),
                );
            }
            if let Some(discount) = product.discount() {
                pill(ui, format!("{discount}% OFF"), RED, Color32::WHITE);
            }
        });

        if product.stock == 0 {
            ui.label(RichText::new("Out of stock").strong().color(RED));
        } else if product.stock < 50 {
            ui.label(
                RichText::new(format!(
                    "🔥 Only {} left in stock - Order soon!",
                    product.stock
                ))
                .color(RED),
            );
        }

        if !product.skin_types.is_empty() {
            ui.label(RichText::new("Suitable for").strong());
            ui.horizontal_wrapped(|ui| {
                for skin in &product.skin_types {
                    pill(ui, skin, LILAC, PURPLE);
                }
            });
        }
        if !product.concerns.is_empty() {
            ui.label(RichText::new("Targets").strong());
            ui.horizontal_wrapped(|ui| {
                for concern in &product.concerns {
                    pill(ui, concern, Color32::from_gray(240), DARK);
                }
            });
        }
    }

    fn tabs(&mut self, ui: &mut egui::Ui, scope: &Scope, product: &Product) {
        ui.horizontal(|ui| {
            for tab in DetailTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
        ui.separator();

        match self.tab {
            DetailTab::Details => {
                ui.label(product.description.as_str());
                ui.add_space(8.);
                ui.label(RichText::new("How to Use").strong());
                ui.label(product.how_to_use.as_str());
            }
            DetailTab::Ingredients => {
                ui.label(RichText::new("Key Ingredients").strong());
                for ingredient in &product.ingredients {
                    ui.label(format!("• {ingredient}"));
                }
            }
            DetailTab::Reviews => {
                let mut any = false;
                for review in scope.snapshot.catalog.reviews_for(product.id) {
                    any = true;
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&review.user_name).strong());
                            if review.verified {
                                pill(ui, "Verified", LILAC, PURPLE);
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(utils::short_date(review.date))
                                            .small()
                                            .color(MUTED),
                                    );
                                },
                            );
                        });
                        ui.label(RichText::new(utils::star_row(review.rating)).color(AMBER));
                        ui.label(review.comment.as_str());
                    });
                }
                if !any {
                    ui.label(RichText::new("No reviews yet").color(MUTED));
                }
            }
        }
    }

    fn related(&self, ui: &mut egui::Ui, scope: &Scope, product: &Product) {
        let catalog = &scope.snapshot.catalog;
        if catalog.related(product, RELATED_LIMIT).next().is_none() {
            return;
        }
        ui.add_space(12.);
        ui.label(RichText::new("You May Also Like").heading().strong().color(DARK));
        egui::ScrollArea::horizontal()
            .id_source("related")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for related in catalog.related(product, RELATED_LIMIT) {
                        ui.allocate_ui(egui::vec2(120., 170.), |ui| {
                            ui.vertical(|ui| {
                                let mut clicked = product_image(ui, related, 100.).clicked();
                                clicked |= ui
                                    .add(
                                        Label::new(RichText::new(&related.name).small().color(DARK))
                                            .sense(Sense::click()),
                                    )
                                    .clicked();
                                ui.label(RichText::new(utils::format_price(related.price)).strong());
                                if clicked {
                                    scope.store.send(Message::OpenProduct(related.id));
                                }
                            });
                        });
                    }
                });
            });
    }

    /// Quantity stepper and add-to-cart, drawn in the bottom panel.
    pub fn checkout_bar(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        let Some(product) = scope.snapshot.selected_product() else {
            return;
        };
        self.sync(product.id);
        ui.horizontal_centered(|ui| {
            if ui.button(" − ").clicked() {
                self.quantity = step_quantity(self.quantity, -1, product.stock);
            }
            ui.label(RichText::new(self.quantity.to_string()).strong());
            if ui.button(" + ").clicked() {
                self.quantity = step_quantity(self.quantity, 1, product.stock);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = egui::Button::new(RichText::new("🛒 Add to Cart").color(Color32::WHITE))
                    .fill(PURPLE);
                if ui.add_enabled(product.stock > 0, add).clicked() {
                    scope
                        .store
                        .send(Message::AddToCart(product.id, self.quantity));
                }
            });
        });
    }
}

impl View for ProductDetailPage {
    fn ui(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        let Some(product) = scope.snapshot.selected_product() else {
            self.missing(ui, scope);
            return;
        };
        self.sync(product.id);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                product_image(ui, product, 240.);
                ui.add_space(8.);
                self.summary(ui, scope, product);
                ui.separator();
                self.tabs(ui, scope, product);
                self.related(ui, scope, product);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepper_stays_within_stock() {
        assert_eq!(step_quantity(1, -1, 10), 1);
        assert_eq!(step_quantity(1, 1, 10), 2);
        assert_eq!(step_quantity(10, 1, 10), 10);
        assert_eq!(step_quantity(1, 1, 0), 1);
    }
}
