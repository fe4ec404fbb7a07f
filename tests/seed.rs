use std::fs;

use anyhow::Result;
use panahsc_store::models::NotificationKind;
use panahsc_store::seed::{Catalog, SeedData};

#[test]
fn embedded_seed_loads() -> Result<()> {
    let seed = SeedData::embedded()?;
    assert_eq!(seed.user.name, "Sarah Johnson");
    assert_eq!(seed.favorites, vec![1, 2, 9]);
    assert_eq!(seed.products.len(), 12);
    assert_eq!(seed.notifications.iter().filter(|n| !n.read).count(), 1);
    assert_eq!(seed.notifications[0].kind, NotificationKind::Order);
    Ok(())
}

#[test]
fn catalog_sections() -> Result<()> {
    let seed = SeedData::embedded()?;
    let catalog = Catalog::from(&seed);

    let best: Vec<u64> = catalog.best_sellers(4).map(|p| p.id).collect();
    assert_eq!(best, vec![1, 2, 3, 4]);

    let new: Vec<u64> = catalog.new_arrivals(4).map(|p| p.id).collect();
    assert_eq!(new, vec![5, 6, 7, 8]);

    let serum = catalog.product(1).expect("product 1");
    let related: Vec<u64> = catalog.related(serum, 5).map(|p| p.id).collect();
    assert_eq!(related, vec![2, 8]);

    assert_eq!(catalog.reviews_for(1).count(), 2);
    assert_eq!(catalog.reviews_for(12).count(), 0);
    Ok(())
}

#[test]
fn search_matches_name_and_category() -> Result<()> {
    let seed = SeedData::embedded()?;
    let catalog = Catalog::from(&seed);

    let serums: Vec<u64> = catalog.search("SERUM").map(|p| p.id).collect();
    assert_eq!(serums, vec![1, 2, 8]);

    let masks: Vec<u64> = catalog.search(" mask ").map(|p| p.id).collect();
    assert_eq!(masks, vec![7, 11]);

    assert_eq!(catalog.search("   ").count(), 0);
    assert_eq!(catalog.search("lipstick").count(), 0);
    Ok(())
}

#[test]
fn duplicate_product_ids_are_rejected() {
    let raw = r#"{
        "user": { "name": "A", "points": 0 },
        "products": [
            { "id": 1, "name": "X", "category": "Serums", "price": 1.0, "rating": 4.0, "reviewCount": 0, "stock": 1 },
            { "id": 1, "name": "Y", "category": "Serums", "price": 2.0, "rating": 4.0, "reviewCount": 0, "stock": 1 }
        ]
    }"#;
    let err = SeedData::from_json(raw).unwrap_err();
    assert!(err.to_string().contains("duplicate product id 1"));
}

#[test]
fn duplicate_notification_ids_are_rejected() {
    let raw = r#"{
        "user": { "name": "A", "points": 0 },
        "products": [],
        "notifications": [
            { "id": 7, "type": "order", "title": "a", "message": "b", "date": "2024-01-01T00:00:00Z" },
            { "id": 7, "type": "weird", "title": "c", "message": "d", "date": "2024-01-01T00:00:00Z" }
        ]
    }"#;
    assert!(SeedData::from_json(raw).is_err());
}

#[test]
fn unknown_notification_type_falls_back() -> Result<()> {
    let raw = r#"{
        "user": { "name": "A", "points": 0 },
        "products": [],
        "favorites": [42],
        "notifications": [
            { "id": 7, "type": "weird", "title": "a", "message": "b", "date": "2024-01-01T00:00:00Z" }
        ]
    }"#;
    let seed = SeedData::from_json(raw)?;
    assert_eq!(seed.notifications[0].kind, NotificationKind::Other);
    assert!(!seed.notifications[0].read);
    assert_eq!(seed.cart_count, 0);
    Ok(())
}

#[test]
fn load_reads_seed_file() -> Result<()> {
    let path = std::env::temp_dir().join(format!("panahsc-seed-{}.json", std::process::id()));
    fs::write(&path, include_str!("../data/seed.json"))?;
    let seed = SeedData::load(Some(path.as_path()))?;
    fs::remove_file(&path)?;
    assert_eq!(seed, SeedData::embedded()?);

    assert!(SeedData::load(Some(std::path::Path::new("/nonexistent/seed.json"))).is_err());
    Ok(())
}
