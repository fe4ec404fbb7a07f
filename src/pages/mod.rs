use eframe::egui;

use crate::models::Product;
use crate::{product_card, Scope};

pub mod home;
pub mod product;

pub use home::HomePage;
pub use product::ProductDetailPage;

/// Two column card grid.
pub(crate) fn product_grid<'a>(
    ui: &mut egui::Ui,
    scope: &Scope,
    products: impl IntoIterator<Item = &'a Product>,
    with_favorites: bool,
) {
    ui.columns(2, |columns| {
        for (i, product) in products.into_iter().enumerate() {
            let favorite = with_favorites.then(|| scope.snapshot.is_favorite(product.id));
            let ui = &mut columns[i % 2];
            product_card(ui, scope, product, favorite);
            ui.add_space(8.);
        }
    });
}

pub(crate) fn section_title(ui: &mut egui::Ui, title: &str) -> bool {
    let mut view_all = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(title)
                .heading()
                .strong()
                .color(crate::DARK),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            view_all = ui
                .add(
                    egui::Label::new(egui::RichText::new("View All").color(crate::PURPLE))
                        .sense(egui::Sense::click()),
                )
                .clicked();
        });
    });
    view_all
}
