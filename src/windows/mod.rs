use eframe::egui;

use crate::state::Modal;
use crate::Scope;

pub mod notification;
pub mod search;

pub trait View {
    fn ui(&mut self, ui: &mut egui::Ui, scope: &Scope);
}

/// Something to view
pub trait Window {
    /// `&'static` so we can also use it as the window title.
    fn name(&self) -> &'static str;

    /// The modal slot this window occupies.
    fn modal(&self) -> Modal;

    /// Show windows, etc
    fn show(&mut self, scope: &Scope, open: &mut bool, size: egui::Vec2);

    /// Called every frame the window is hidden.
    fn reset(&mut self) {}

    /// status
    fn is_closed(&self) -> bool;
}
