use eframe::egui::{self, Color32, RichText};

use crate::components::{pill, BRAND, DARK, LILAC, MUTED, PURPLE};
use crate::models::OrderStatus;
use crate::state::Tab;
use crate::windows::View;
use crate::{utils, Message, Scope};

use super::{product_grid, section_title};

const SECTION_LIMIT: usize = 4;

pub const CATEGORIES: [(&str, &str, Color32); 6] = [
    ("Cleansers", "🧼", Color32::from_rgb(0xe3, 0xf2, 0xfd)),
    ("Serums", "💧", Color32::from_rgb(0xf3, 0xe5, 0xf5)),
    ("Moisturizers", "✨", Color32::from_rgb(0xff, 0xf9, 0xc4)),
    ("Sunscreen", "☀", Color32::from_rgb(0xff, 0xe0, 0xb2)),
    ("Masks", "🎭", Color32::from_rgb(0xe1, 0xf5, 0xfe)),
    ("Treatments", "⚡", Color32::from_rgb(0xf1, 0xf8, 0xe9)),
];

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HomePage;

impl HomePage {
    fn storefront(&self, ui: &mut egui::Ui, scope: &Scope) {
        let catalog = &scope.snapshot.catalog;
        let user = &catalog.user;

        egui::Frame::none()
            .fill(BRAND)
            .rounding(16.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Welcome back,").color(Color32::WHITE));
                        ui.label(RichText::new(&user.name).heading().strong().color(Color32::WHITE));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        pill(ui, format!("🏆 {} Points", user.points), Color32::WHITE, DARK);
                    });
                });
                ui.add_space(8.);
                egui::Frame::none()
                    .fill(Color32::WHITE)
                    .rounding(12.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new("Get Your Perfect Routine").strong().color(DARK));
                                ui.label(RichText::new("Take our skin quiz").small().color(MUTED));
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui
                                    .add(egui::Button::new(RichText::new("Start").color(BRAND)).fill(LILAC))
                                    .clicked()
                                {
                                    tracing::info!("skin quiz requested");
                                }
                            });
                        });
                    });
            });
        ui.add_space(12.);

        egui::Frame::none()
            .fill(PURPLE)
            .rounding(16.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Limited Time Offer").strong().color(Color32::WHITE));
                        ui.label(
                            RichText::new("Free Gift with\nPurchase Over $50")
                                .heading()
                                .strong()
                                .color(Color32::WHITE),
                        );
                        if ui
                            .add(egui::Button::new(RichText::new("Shop Now ›").color(PURPLE)).fill(Color32::WHITE))
                            .clicked()
                        {
                            scope.store.send(Message::SelectTab(Tab::Shop));
                        }
                    });
                    ui.label(RichText::new("🎁").size(48.));
                });
            });
        ui.add_space(12.);

        ui.label(RichText::new("Shop by Category").heading().strong().color(DARK));
        egui::Grid::new("categories")
            .num_columns(3)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, (name, emoji, color)) in CATEGORIES.into_iter().enumerate() {
                    let text = RichText::new(format!("{emoji}\n{name}")).color(DARK);
                    if ui
                        .add_sized([104., 72.], egui::Button::new(text).fill(color))
                        .clicked()
                    {
                        scope.store.send(Message::ViewCategory(name.to_owned()));
                    }
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.);

        if section_title(ui, "Best Sellers") {
            scope.store.send(Message::ViewCategory("Best Sellers".to_owned()));
        }
        product_grid(ui, scope, catalog.best_sellers(SECTION_LIMIT), true);

        if catalog.new_arrivals(SECTION_LIMIT).next().is_some() {
            ui.add_space(12.);
            if section_title(ui, "New Arrivals") {
                scope.store.send(Message::ViewCategory("New Arrivals".to_owned()));
            }
            product_grid(ui, scope, catalog.new_arrivals(SECTION_LIMIT), false);
        }
    }

    fn shop(&self, ui: &mut egui::Ui, scope: &Scope) {
        ui.label(RichText::new("All Products").heading().strong().color(DARK));
        ui.add_space(8.);
        product_grid(ui, scope, &scope.snapshot.catalog.products, true);
    }

    fn orders(&self, ui: &mut egui::Ui, scope: &Scope) {
        let catalog = &scope.snapshot.catalog;
        ui.label(RichText::new("My Orders").heading().strong().color(DARK));
        if catalog.orders.is_empty() {
            ui.label(RichText::new("No orders yet").color(MUTED));
            return;
        }
        for order in &catalog.orders {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&order.id).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let color = match order.status {
                            OrderStatus::Delivered => crate::GREEN,
                            OrderStatus::Cancelled => crate::RED,
                            OrderStatus::Processing | OrderStatus::Shipped => PURPLE,
                        };
                        pill(ui, order.status.label(), color, Color32::WHITE);
                    });
                });
                ui.label(RichText::new(utils::short_date(order.date)).small().color(MUTED));
                for item in &order.items {
                    let name = catalog
                        .product(item.product_id)
                        .map(|product| product.name.as_str())
                        .unwrap_or("Unavailable product");
                    if ui
                        .add(
                            egui::Label::new(format!("{} × {name}", item.quantity))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        scope.store.send(Message::OpenProduct(item.product_id));
                    }
                }
                ui.label(RichText::new(format!("Total {}", utils::format_price(order.total))).strong());
            });
            ui.add_space(8.);
        }
    }

    fn learn(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Learn").heading().strong().color(DARK));
        ui.label(RichText::new("Skincare guides are on the way.").color(MUTED));
    }

    fn profile(&self, ui: &mut egui::Ui, scope: &Scope) {
        let snapshot = scope.snapshot;
        let user = &snapshot.catalog.user;
        ui.label(RichText::new(&user.name).heading().strong().color(DARK));
        if !user.email.is_empty() {
            ui.label(RichText::new(&user.email).color(MUTED));
        }
        ui.horizontal(|ui| {
            if !user.tier.is_empty() {
                pill(ui, format!("{} Member", user.tier), LILAC, BRAND);
            }
            pill(ui, format!("🏆 {} Points", user.points), LILAC, BRAND);
        });
        ui.add_space(12.);

        ui.label(
            RichText::new(format!("Favorites ({})", snapshot.favorites.len()))
                .heading()
                .strong()
                .color(DARK),
        );
        let favorites = snapshot
            .favorites
            .iter()
            .filter_map(|id| snapshot.catalog.product(*id));
        product_grid(ui, scope, favorites, true);
    }
}

impl View for HomePage {
    fn ui(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| match scope.snapshot.tab {
                Tab::Home => self.storefront(ui, scope),
                Tab::Shop => self.shop(ui, scope),
                Tab::Orders => self.orders(ui, scope),
                Tab::Learn => self.learn(ui),
                Tab::Profile => self.profile(ui, scope),
            });
    }
}
