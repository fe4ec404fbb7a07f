use eframe::egui::{self, Color32};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::controller::ViewController;
use crate::pages::{HomePage, ProductDetailPage};
use crate::state::Page;
use crate::windows::{self, View};
use crate::*;

pub struct App {
    icons: Icons,

    windows: Vec<Box<dyn windows::Window>>,

    store: Store,
    intents: UnboundedReceiver<Message>,

    controller: ViewController,

    home: HomePage,
    detail: ProductDetailPage,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: ViewController,
        icons: Icons,
    ) -> Self {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Color32::from_rgb(0xfa, 0xfa, 0xfa);
        cc.egui_ctx.set_visuals(visuals);

        let (sender, intents) = tokio::sync::mpsc::unbounded_channel();
        let store = Store::new(sender, controller.subscribe());

        let windows: Vec<Box<dyn windows::Window>> = vec![
            Box::new(windows::search::SearchWindow::default()),
            Box::new(windows::notification::NotificationWindow),
        ];

        Self {
            icons,
            windows,
            store,
            intents,
            controller,
            home: HomePage,
            detail: ProductDetailPage::default(),
        }
    }

    /// Applies queued intents, returns how many were handled.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.intents.try_recv() {
            self.controller.dispatch(message);
            handled += 1;
        }
        handled
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.store.snapshot.borrow().clone();
        let scope = Scope {
            ctx,
            icons: &self.icons,
            snapshot: &snapshot,
            store: &self.store,
        };
        let size = ctx.screen_rect().size();

        egui::TopBottomPanel::top("Header")
            .exact_height(48.)
            .show(ctx, |ui| header(ui, &scope));

        match snapshot.view.page {
            Page::ProductDetail(_) => {
                egui::TopBottomPanel::bottom("Checkout")
                    .exact_height(56.)
                    .show(ctx, |ui| self.detail.checkout_bar(ui, &scope));
                egui::CentralPanel::default().show(ctx, |ui| self.detail.ui(ui, &scope));
            }
            Page::Home => {
                egui::TopBottomPanel::bottom("BottomNav")
                    .exact_height(60.)
                    .show(ctx, |ui| bottom_nav(ui, &scope));
                egui::CentralPanel::default().show(ctx, |ui| self.home.ui(ui, &scope));
            }
        }

        for window in &mut self.windows {
            let modal = window.modal();
            let mut is_open = snapshot.is_open(modal);
            if !is_open {
                window.reset();
                continue;
            }
            window.show(&scope, &mut is_open, size);
            if window.is_closed() {
                is_open = false;
            }
            if !is_open {
                scope.store.send(Message::CloseModal);
            }
        }

        if self.drain() > 0 {
            ctx.request_repaint();
        }
    }
}
