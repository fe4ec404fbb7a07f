use std::collections::BTreeSet;
use std::sync::Arc;

use crate::models::{Notification, Product, ProductId};
use crate::seed::Catalog;

pub const HOME_TITLE: &str = "Panahsc";
pub const DETAIL_TITLE: &str = "Product Details";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    ProductDetail(ProductId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modal {
    Search,
    Notifications,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Shop,
    Orders,
    Learn,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Shop, Tab::Orders, Tab::Learn, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Shop => "Shop",
            Self::Orders => "Orders",
            Self::Learn => "Learn",
            Self::Profile => "Profile",
        }
    }
}

/// What decides the screen: page and at most one modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub page: Page,
    pub modal: Option<Modal>,
}

impl ViewState {
    pub fn selected_product_id(&self) -> Option<ProductId> {
        match self.page {
            Page::ProductDetail(id) => Some(id),
            Page::Home => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.page {
            Page::ProductDetail(_) => DETAIL_TITLE,
            Page::Home => HOME_TITLE,
        }
    }
}

/// Read-only copy of the controller state handed to renderers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewSnapshot {
    pub view: ViewState,
    pub tab: Tab,
    pub catalog: Arc<Catalog>,
    pub favorites: BTreeSet<ProductId>,
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub cart_count: u32,
}

impl ViewSnapshot {
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.view
            .selected_product_id()
            .and_then(|id| self.catalog.product(id))
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.view.modal == Some(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_selection_has_no_product() {
        let snapshot = ViewSnapshot {
            view: ViewState {
                page: Page::ProductDetail(404),
                modal: None,
            },
            ..Default::default()
        };
        assert_eq!(snapshot.view.selected_product_id(), Some(404));
        assert!(snapshot.selected_product().is_none());
        assert_eq!(snapshot.view.title(), DETAIL_TITLE);
    }
}
