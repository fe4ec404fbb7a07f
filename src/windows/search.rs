use eframe::egui::{self, Label, RichText, Sense};

use crate::components::{pill, DARK, LILAC, MUTED, PURPLE};
use crate::state::Modal;
use crate::{utils, Message, Scope};

use super::{View, Window};

pub const TRENDING: [&str; 6] = [
    "Hyaluronic Acid",
    "Vitamin C Serum",
    "Retinol Cream",
    "Niacinamide",
    "AHA BHA Toner",
    "Sunscreen SPF 50",
];

pub const RECENT: [&str; 3] = [
    "Moisturizer for dry skin",
    "Anti-aging serum",
    "Gentle cleanser",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    query: String,
    closed: bool,
    autofocus: bool,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            query: String::new(),
            closed: false,
            autofocus: true,
        }
    }
}

impl SearchWindow {
    pub const NAME: &'static str = "Search";

    fn suggestions(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        ui.label(RichText::new("🕘 Recent Searches").strong().color(DARK));
        for term in RECENT {
            if ui
                .add(Label::new(RichText::new(term).color(MUTED)).sense(Sense::click()))
                .clicked()
            {
                self.query = term.to_owned();
            }
        }
        ui.separator();

        ui.label(RichText::new("📈 Trending Searches").strong().color(DARK));
        ui.horizontal_wrapped(|ui| {
            for term in TRENDING {
                if ui
                    .add(egui::Button::new(RichText::new(term).color(PURPLE)).fill(LILAC))
                    .clicked()
                {
                    self.query = term.to_owned();
                }
            }
        });

        if !scope.snapshot.favorites.is_empty() {
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Favorites:").small().color(MUTED));
                scope
                    .snapshot
                    .favorites
                    .iter()
                    .filter_map(|id| scope.snapshot.catalog.product(*id))
                    .for_each(|product| pill(ui, &product.name, LILAC, PURPLE));
            });
        }
    }

    fn results(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        let catalog = &scope.snapshot.catalog;
        let mut found = false;
        egui::ScrollArea::vertical()
            .max_height(420.)
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                    for product in catalog.search(&self.query) {
                        found = true;
                        let text = format!(
                            "{}  ·  {}  ·  {}",
                            product.name,
                            product.category,
                            utils::format_price(product.price)
                        );
                        if ui.selectable_label(false, text).clicked() {
                            // leave the modal before the page changes underneath it
                            scope.store.send(Message::CloseModal);
                            scope.store.send(Message::OpenProduct(product.id));
                            self.closed = true;
                        }
                    }
                });
            });
        if !found {
            ui.label(
                RichText::new(format!("No products found for “{}”", self.query.trim()))
                    .color(MUTED),
            );
        }
    }
}

impl Window for SearchWindow {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn modal(&self) -> Modal {
        Modal::Search
    }

    fn show(&mut self, scope: &Scope, open: &mut bool, size: egui::Vec2) {
        self.closed = false;
        egui::Window::new(self.name())
            .resizable(false)
            .collapsible(false)
            .default_width(size.x - 32.0)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .open(open)
            .show(scope.ctx, |ui| self.ui(ui, scope));
    }

    fn reset(&mut self) {
        self.autofocus = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl View for SearchWindow {
    fn ui(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        ui.horizontal(|ui| {
            scope.icon(ui, "search", 18.);
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.query).hint_text("Search for products..."),
            );
            if self.autofocus {
                self.autofocus = false;
                ui.memory_mut(|memory| {
                    memory.request_focus(resp.id);
                });
            }
            if !self.query.is_empty() && ui.small_button("✕").clicked() {
                self.query.clear();
            }
        });
        ui.separator();

        if self.query.trim().is_empty() {
            self.suggestions(ui, scope);
        } else {
            self.results(ui, scope);
        }
    }
}
