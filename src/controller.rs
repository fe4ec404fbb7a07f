use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::models::{Notification, NotificationId, Product, ProductId};
use crate::seed::{Catalog, SeedData};
use crate::state::{Modal, Page, Tab, ViewSnapshot, ViewState};
use crate::Message;

/// Why an intent left the state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    #[error("product {0} is not in the catalog")]
    NotFound(ProductId),
    #[error("notification {0} does not exist")]
    UnknownNotification(NotificationId),
    #[error("quantity {quantity} of product {product} is outside 1..={stock}")]
    InvalidQuantity {
        product: ProductId,
        quantity: u32,
        stock: u32,
    },
}

/// Sole owner of the storefront state.
///
/// Every mutation publishes a fresh [`ViewSnapshot`] to subscribers.
#[derive(Debug)]
pub struct ViewController {
    view: ViewState,
    tab: Tab,
    catalog: Arc<Catalog>,
    favorites: BTreeSet<ProductId>,
    notifications: Vec<Notification>,
    cart_count: u32,
    publisher: watch::Sender<ViewSnapshot>,
}

impl ViewController {
    pub fn new(seed: SeedData) -> Self {
        let catalog = Arc::new(Catalog::from(&seed));
        let SeedData {
            notifications,
            favorites,
            cart_count,
            ..
        } = seed;

        let controller = Self {
            view: ViewState::default(),
            tab: Tab::default(),
            catalog,
            favorites: favorites.into_iter().collect(),
            notifications,
            cart_count,
            publisher: watch::channel(ViewSnapshot::default()).0,
        };
        controller.publish();
        controller
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.publisher.subscribe()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.view,
            tab: self.tab,
            catalog: Arc::clone(&self.catalog),
            favorites: self.favorites.clone(),
            notifications: self.notifications.clone(),
            unread_count: self.unread_count(),
            cart_count: self.cart_count,
        }
    }

    pub fn state(&self) -> ViewState {
        self.view
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &BTreeSet<ProductId> {
        &self.favorites
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn page_title(&self) -> &'static str {
        self.view.title()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.view
            .selected_product_id()
            .and_then(|id| self.catalog.product(id))
    }

    /// Applies an intent. Rejections are logged and absorbed.
    pub fn dispatch(&mut self, message: Message) {
        tracing::debug!("dispatch {message:?}");
        let result = match message {
            Message::OpenProduct(id) => self.navigate_to_product(id),
            Message::Back => {
                self.navigate_back();
                Ok(())
            }
            Message::ToggleFavorite(id) => {
                self.toggle_favorite(id);
                Ok(())
            }
            Message::OpenModal(modal) => {
                self.open_modal(modal);
                Ok(())
            }
            Message::CloseModal => {
                self.close_modal();
                Ok(())
            }
            Message::MarkNotificationRead(id) => self.mark_notification_read(id),
            Message::ClearNotifications => {
                self.clear_all_notifications();
                Ok(())
            }
            Message::SelectTab(tab) => {
                self.select_tab(tab);
                Ok(())
            }
            Message::AddToCart(id, quantity) => self.add_to_cart(id, quantity),
            Message::ViewCategory(name) => {
                self.view_category(&name);
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::warn!("{e}");
        }
    }

    pub fn navigate_to_product(&mut self, id: ProductId) -> Result<(), Rejected> {
        if !self.catalog.contains(id) {
            return Err(Rejected::NotFound(id));
        }
        self.view.page = Page::ProductDetail(id);
        tracing::debug!("page -> product {id}");
        self.publish();
        Ok(())
    }

    pub fn navigate_back(&mut self) {
        if self.view.page == Page::Home {
            return;
        }
        self.view.page = Page::Home;
        tracing::debug!("page -> home");
        self.publish();
    }

    pub fn toggle_favorite(&mut self, id: ProductId) {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
        self.publish();
    }

    /// Replaces whatever modal is open.
    pub fn open_modal(&mut self, modal: Modal) {
        if self.view.modal == Some(modal) {
            return;
        }
        self.view.modal = Some(modal);
        tracing::debug!("modal -> {modal:?}");
        self.publish();
    }

    pub fn close_modal(&mut self) {
        if self.view.modal.take().is_some() {
            tracing::debug!("modal closed");
            self.publish();
        }
    }

    pub fn mark_notification_read(&mut self, id: NotificationId) -> Result<(), Rejected> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Rejected::UnknownNotification(id))?;
        if !notification.read {
            notification.read = true;
            self.publish();
        }
        Ok(())
    }

    pub fn clear_all_notifications(&mut self) {
        self.notifications.clear();
        self.publish();
    }

    /// Tab bodies live on the home page, so leaving a product goes home.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.view.page = Page::Home;
        tracing::debug!("tab -> {tab:?}");
        self.publish();
    }

    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> Result<(), Rejected> {
        let product = self.catalog.product(id).ok_or(Rejected::NotFound(id))?;
        if quantity == 0 || quantity > product.stock {
            return Err(Rejected::InvalidQuantity {
                product: id,
                quantity,
                stock: product.stock,
            });
        }
        tracing::info!("added {quantity} x {} to cart", product.name);
        self.cart_count = self.cart_count.saturating_add(quantity);
        self.publish();
        Ok(())
    }

    pub fn view_category(&self, name: &str) {
        tracing::info!("view category {name}");
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}
