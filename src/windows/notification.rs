use chrono::Utc;
use eframe::egui::{self, Color32, RichText, Sense};

use crate::components::{BRAND, DARK, LILAC, MUTED, RED};
use crate::models::{Notification, NotificationKind};
use crate::state::Modal;
use crate::{utils, Message, Scope};

use super::{View, Window};

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Order => "package",
        NotificationKind::Promotion => "tag",
        NotificationKind::Product => "gift",
        NotificationKind::Points | NotificationKind::Other => "bell",
    }
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct NotificationWindow;

impl NotificationWindow {
    pub const NAME: &'static str = "Notifications";

    fn item(&self, ui: &mut egui::Ui, scope: &Scope, notification: &Notification) {
        let fill = if notification.read {
            Color32::WHITE
        } else {
            LILAC
        };
        let response = egui::Frame::none()
            .fill(fill)
            .rounding(8.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    scope.icon(ui, kind_icon(notification.kind), 20.);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&notification.title).strong().color(DARK));
                            if !notification.read {
                                ui.label(RichText::new("●").color(BRAND));
                            }
                        });
                        ui.label(notification.message.as_str());
                        if notification.image.is_some() {
                            ui.label(RichText::new("🖼 image attached").small().color(MUTED));
                        }
                        ui.label(
                            RichText::new(utils::relative_date(notification.date, Utc::now()))
                                .small()
                                .color(MUTED),
                        );
                    });
                });
            })
            .response
            .interact(Sense::click());
        if response.clicked() {
            scope
                .store
                .send(Message::MarkNotificationRead(notification.id));
        }
    }
}

impl Window for NotificationWindow {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn modal(&self) -> Modal {
        Modal::Notifications
    }

    fn show(&mut self, scope: &Scope, open: &mut bool, size: egui::Vec2) {
        egui::Window::new(self.name())
            .resizable(false)
            .collapsible(false)
            .default_width(size.x - 16.0)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -8.0))
            .open(open)
            .show(scope.ctx, |ui| self.ui(ui, scope));
    }

    fn is_closed(&self) -> bool {
        false
    }
}

impl View for NotificationWindow {
    fn ui(&mut self, ui: &mut egui::Ui, scope: &Scope) {
        let notifications = &scope.snapshot.notifications;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} unread", scope.snapshot.unread_count)).color(MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !notifications.is_empty()
                    && ui
                        .button(RichText::new("Clear All").color(RED))
                        .clicked()
                {
                    scope.store.send(Message::ClearNotifications);
                }
            });
        });
        ui.separator();

        if notifications.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.);
                scope.icon(ui, "bell", 40.);
                ui.label(RichText::new("No notifications yet").color(MUTED));
                ui.add_space(24.);
            });
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(size_hint(ui))
            .show(ui, |ui| {
                for notification in notifications {
                    self.item(ui, scope, notification);
                    ui.add_space(4.);
                }
            });
    }
}

fn size_hint(ui: &egui::Ui) -> f32 {
    (ui.ctx().screen_rect().height() * 0.7).max(200.)
}
