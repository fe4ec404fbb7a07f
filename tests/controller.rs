use std::collections::BTreeSet;

use anyhow::Result;
use panahsc_store::controller::{Rejected, ViewController};
use panahsc_store::seed::SeedData;
use panahsc_store::state::{Modal, Page, Tab, ViewState, DETAIL_TITLE, HOME_TITLE};
use panahsc_store::{Message, Store};
use proptest::prelude::*;
use tokio::sync::mpsc;

fn controller() -> Result<ViewController> {
    Ok(ViewController::new(SeedData::embedded()?))
}

fn set(ids: &[u64]) -> BTreeSet<u64> {
    ids.iter().copied().collect()
}

#[test]
fn starts_home_without_modal() -> Result<()> {
    let controller = controller()?;
    assert_eq!(controller.state(), ViewState::default());
    assert_eq!(controller.state().selected_product_id(), None);
    assert_eq!(controller.tab(), Tab::Home);
    assert_eq!(controller.page_title(), HOME_TITLE);
    assert_eq!(controller.favorites(), &set(&[1, 2, 9]));
    assert_eq!(controller.unread_count(), 1);
    assert_eq!(controller.cart_count(), 2);
    Ok(())
}

#[test]
fn navigate_and_back_restores_state() -> Result<()> {
    let mut controller = controller()?;
    let ids: Vec<u64> = controller.catalog().products.iter().map(|p| p.id).collect();
    for id in ids {
        let before = controller.state();
        controller.navigate_to_product(id)?;
        assert_eq!(controller.state().page, Page::ProductDetail(id));
        assert_eq!(controller.state().selected_product_id(), Some(id));
        assert_eq!(controller.selected_product().map(|p| p.id), Some(id));
        assert_eq!(controller.page_title(), DETAIL_TITLE);
        controller.navigate_back();
        assert_eq!(controller.state(), before);
    }
    Ok(())
}

#[test]
fn back_is_idempotent() -> Result<()> {
    let mut controller = controller()?;
    controller.navigate_back();
    assert_eq!(controller.state().page, Page::Home);
    controller.navigate_to_product(3)?;
    controller.navigate_back();
    controller.navigate_back();
    assert_eq!(controller.state().page, Page::Home);
    assert_eq!(controller.selected_product(), None);
    Ok(())
}

#[test]
fn unknown_product_is_rejected() -> Result<()> {
    let mut controller = controller()?;
    controller.navigate_to_product(1)?;
    let before = controller.snapshot();
    assert_eq!(
        controller.navigate_to_product(404),
        Err(Rejected::NotFound(404))
    );
    assert_eq!(controller.snapshot(), before);

    controller.dispatch(Message::OpenProduct(404));
    assert_eq!(controller.state().page, Page::ProductDetail(1));
    Ok(())
}

#[test]
fn related_product_replaces_selection() -> Result<()> {
    let mut controller = controller()?;
    controller.navigate_to_product(1)?;
    controller.navigate_to_product(2)?;
    assert_eq!(controller.state().page, Page::ProductDetail(2));
    controller.navigate_back();
    assert_eq!(controller.state().page, Page::Home);
    Ok(())
}

#[test]
fn favorite_toggle_scenario() -> Result<()> {
    let mut controller = controller()?;
    controller.toggle_favorite(2);
    assert_eq!(controller.favorites(), &set(&[1, 9]));
    assert!(!controller.is_favorite(2));
    controller.toggle_favorite(2);
    assert_eq!(controller.favorites(), &set(&[1, 2, 9]));
    assert!(controller.is_favorite(2));
    Ok(())
}

#[test]
fn only_one_modal_at_a_time() -> Result<()> {
    let mut controller = controller()?;
    controller.open_modal(Modal::Search);
    controller.open_modal(Modal::Notifications);
    assert_eq!(controller.state().modal, Some(Modal::Notifications));
    controller.close_modal();
    assert_eq!(controller.state().modal, None);
    controller.close_modal();
    assert_eq!(controller.state().modal, None);
    Ok(())
}

#[test]
fn mark_read_updates_unread_count() -> Result<()> {
    let mut controller = controller()?;
    let unread = controller
        .notifications()
        .iter()
        .find(|n| !n.read)
        .map(|n| n.id)
        .expect("seed has an unread notification");
    controller.mark_notification_read(unread)?;
    assert_eq!(controller.unread_count(), 0);
    assert!(controller.notifications().iter().all(|n| n.read));
    Ok(())
}

#[test]
fn mark_read_with_unknown_id_changes_nothing() -> Result<()> {
    let mut controller = controller()?;
    let before = controller.notifications().to_vec();
    assert_eq!(
        controller.mark_notification_read(999),
        Err(Rejected::UnknownNotification(999))
    );
    controller.dispatch(Message::MarkNotificationRead(999));
    assert_eq!(controller.notifications(), before.as_slice());
    Ok(())
}

#[test]
fn clear_all_empties_list() -> Result<()> {
    let mut controller = controller()?;
    controller.clear_all_notifications();
    assert_eq!(controller.unread_count(), 0);
    assert!(controller.notifications().is_empty());
    controller.clear_all_notifications();
    assert!(controller.notifications().is_empty());
    Ok(())
}

#[test]
fn selecting_a_tab_leaves_product_detail() -> Result<()> {
    let mut controller = controller()?;
    controller.navigate_to_product(5)?;
    controller.select_tab(Tab::Orders);
    assert_eq!(controller.tab(), Tab::Orders);
    assert_eq!(controller.state().page, Page::Home);
    Ok(())
}

#[test]
fn wishlist_shows_profile_favorites() -> Result<()> {
    let mut controller = controller()?;
    controller.navigate_to_product(4)?;
    controller.toggle_favorite(4);
    controller.dispatch(Message::SelectTab(Tab::Profile));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.view.page, Page::Home);
    assert_eq!(snapshot.tab, Tab::Profile);
    let favorites: Vec<u64> = snapshot
        .favorites
        .iter()
        .filter_map(|id| snapshot.catalog.product(*id))
        .map(|p| p.id)
        .collect();
    assert_eq!(favorites, vec![1, 2, 4, 9]);
    Ok(())
}

#[test]
fn add_to_cart_checks_quantity() -> Result<()> {
    let mut controller = controller()?;
    controller.add_to_cart(1, 3)?;
    assert_eq!(controller.cart_count(), 5);

    assert!(matches!(
        controller.add_to_cart(1, 0),
        Err(Rejected::InvalidQuantity { quantity: 0, .. })
    ));
    // product 6 has 5 in stock
    assert_eq!(
        controller.add_to_cart(6, 6),
        Err(Rejected::InvalidQuantity {
            product: 6,
            quantity: 6,
            stock: 5
        })
    );
    assert_eq!(controller.add_to_cart(404, 1), Err(Rejected::NotFound(404)));
    assert_eq!(controller.cart_count(), 5);
    Ok(())
}

#[test]
fn dispatch_routes_messages() -> Result<()> {
    let mut controller = controller()?;
    controller.dispatch(Message::OpenModal(Modal::Search));
    controller.dispatch(Message::CloseModal);
    controller.dispatch(Message::OpenProduct(4));
    controller.dispatch(Message::ToggleFavorite(4));
    controller.dispatch(Message::AddToCart(4, 1));
    controller.dispatch(Message::ViewCategory("Serums".to_owned()));
    assert_eq!(controller.state().modal, None);
    assert_eq!(controller.state().page, Page::ProductDetail(4));
    assert!(controller.is_favorite(4));
    assert_eq!(controller.cart_count(), 3);

    controller.dispatch(Message::Back);
    controller.dispatch(Message::ClearNotifications);
    controller.dispatch(Message::SelectTab(Tab::Profile));
    assert_eq!(controller.state().page, Page::Home);
    assert!(controller.notifications().is_empty());
    assert_eq!(controller.tab(), Tab::Profile);
    Ok(())
}

#[test]
fn subscribers_see_every_change() -> Result<()> {
    let mut controller = controller()?;
    let mut snapshots = controller.subscribe();
    assert_eq!(*snapshots.borrow_and_update(), controller.snapshot());

    controller.open_modal(Modal::Notifications);
    assert!(snapshots.has_changed()?);
    assert!(snapshots.borrow_and_update().is_open(Modal::Notifications));

    controller.clear_all_notifications();
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.unread_count, 0);
    assert!(snapshot.notifications.is_empty());

    controller.navigate_to_product(3)?;
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.selected_product().map(|p| p.id), Some(3));
    assert_eq!(snapshot.view.title(), DETAIL_TITLE);
    Ok(())
}

#[test]
fn sent_intents_reach_subscribers() -> Result<()> {
    let mut controller = controller()?;
    let (sender, mut intents) = mpsc::unbounded_channel();
    let mut store = Store::new(sender, controller.subscribe());
    store.snapshot.borrow_and_update();

    store.send(Message::OpenModal(Modal::Search));
    store.send(Message::ToggleFavorite(2));
    assert!(!store.snapshot.has_changed()?);

    let mut handled = 0;
    while let Ok(message) = intents.try_recv() {
        controller.dispatch(message);
        handled += 1;
    }
    assert_eq!(handled, 2);

    assert!(store.snapshot.has_changed()?);
    let snapshot = store.snapshot.borrow_and_update().clone();
    assert!(snapshot.is_open(Modal::Search));
    assert!(!snapshot.is_favorite(2));
    Ok(())
}

proptest! {
    #[test]
    fn toggle_twice_is_identity(id in 0u64..20) {
        let mut controller = ViewController::new(SeedData::embedded().unwrap());
        let before = controller.favorites().clone();
        controller.toggle_favorite(id);
        controller.toggle_favorite(id);
        prop_assert_eq!(controller.favorites(), &before);
    }

    #[test]
    fn unread_count_tracks_list(ops in prop::collection::vec((0u64..8, any::<bool>()), 0..16)) {
        let mut controller = ViewController::new(SeedData::embedded().unwrap());
        for (id, clear) in ops {
            if clear && id == 0 {
                controller.clear_all_notifications();
            } else {
                let _ = controller.mark_notification_read(id);
            }
            let unread = controller.notifications().iter().filter(|n| !n.read).count();
            prop_assert_eq!(controller.unread_count(), unread);
            prop_assert_eq!(controller.snapshot().unread_count, unread);
        }
    }

    #[test]
    fn never_two_modals(opens in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut controller = ViewController::new(SeedData::embedded().unwrap());
        let mut last = None;
        for search in opens {
            let modal = if search { Modal::Search } else { Modal::Notifications };
            controller.open_modal(modal);
            last = Some(modal);
        }
        prop_assert_eq!(controller.state().modal, last);
    }
}
