mod components;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch::Receiver;

pub use components::*;
pub mod config;
pub mod controller;
pub mod models;
pub mod pages;
pub mod seed;
pub mod state;
pub mod ui;
pub mod utils;
pub mod windows;

use models::{NotificationId, ProductId};
use state::{Modal, Tab, ViewSnapshot};

/// Intents sent by views, applied by [`controller::ViewController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// (product id)
    OpenProduct(ProductId),
    Back,
    /// (product id)
    ToggleFavorite(ProductId),
    OpenModal(Modal),
    CloseModal,
    /// (notification id)
    MarkNotificationRead(NotificationId),
    ClearNotifications,
    SelectTab(Tab),
    /// (product id, quantity)
    AddToCart(ProductId, u32),
    /// (category name)
    ViewCategory(String),
}

#[derive(Debug)]
pub struct Store {
    pub sender: UnboundedSender<Message>,
    pub snapshot: Receiver<ViewSnapshot>,
}

impl Store {
    pub fn new(sender: UnboundedSender<Message>, snapshot: Receiver<ViewSnapshot>) -> Self {
        Self { sender, snapshot }
    }

    pub fn send(&self, message: Message) {
        if let Err(e) = self.sender.send(message) {
            tracing::error!("{e}");
        }
    }
}
