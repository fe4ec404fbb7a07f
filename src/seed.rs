use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{Notification, Order, Product, ProductId, Review, User};

const EMBEDDED: &str = include_str!("../data/seed.json");

/// Everything the store starts with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub user: User,
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub favorites: Vec<ProductId>,
    #[serde(default)]
    pub cart_count: u32,
}

impl SeedData {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED).context("embedded seed data")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid seed file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Use `path` when given, the built-in data otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("loading seed data from {}", path.display());
                Self::from_path(path)
            }
            None => Self::embedded(),
        }
    }

    /// Ids must be unique; dangling references are only reported.
    pub fn validate(&self) -> Result<()> {
        let mut products = HashSet::new();
        for product in &self.products {
            if !products.insert(product.id) {
                bail!("duplicate product id {}", product.id);
            }
        }

        let mut notifications = HashSet::new();
        for notification in &self.notifications {
            if !notifications.insert(notification.id) {
                bail!("duplicate notification id {}", notification.id);
            }
        }

        self.favorites
            .iter()
            .filter(|id| !products.contains(*id))
            .for_each(|id| tracing::warn!("favorite {id} is not in the catalog"));
        self.reviews
            .iter()
            .filter(|review| !products.contains(&review.product_id))
            .for_each(|review| {
                tracing::warn!(
                    "review {} points at unknown product {}",
                    review.id,
                    review.product_id
                )
            });
        self.orders
            .iter()
            .flat_map(|order| order.items.iter().map(move |item| (order, item)))
            .filter(|(_, item)| !products.contains(&item.product_id))
            .for_each(|(order, item)| {
                tracing::warn!(
                    "order {} points at unknown product {}",
                    order.id,
                    item.product_id
                )
            });

        Ok(())
    }
}

/// Read-only view over the seed records the pages render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub user: User,
    pub products: Vec<Product>,
    pub reviews: Vec<Review>,
    pub orders: Vec<Order>,
}

impl Catalog {
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.product(id).is_some()
    }

    pub fn best_sellers(&self, limit: usize) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|product| product.is_best_seller)
            .take(limit)
    }

    pub fn new_arrivals(&self, limit: usize) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|product| product.is_new)
            .take(limit)
    }

    pub fn reviews_for(&self, id: ProductId) -> impl Iterator<Item = &Review> {
        self.reviews
            .iter()
            .filter(move |review| review.product_id == id)
    }

    /// Same category, excluding `product` itself.
    pub fn related<'a>(
        &'a self,
        product: &'a Product,
        limit: usize,
    ) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category == product.category && p.id != product.id)
            .take(limit)
    }

    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |product| product.matches(query))
    }
}

impl From<&SeedData> for Catalog {
    fn from(seed: &SeedData) -> Self {
        Self {
            user: seed.user.clone(),
            products: seed.products.clone(),
            reviews: seed.reviews.clone(),
            orders: seed.orders.clone(),
        }
    }
}
