//! Favorites tests: idempotence, per-account scoping and logout behaviour

use egytravel::{backend::Backend, catalog, favorites::FavoriteItem};

use crate::helpers::*;

fn item(id: u64) -> FavoriteItem {
    FavoriteItem::new(id)
        .with_detail("title", format!("Listing {id}"))
        .with_detail("price", "214")
}

#[tokio::test]
async fn test_add_twice_keeps_one_entry() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();

    assert!(site.favorites_mut().add(item(7)).await.unwrap());
    assert!(!site.favorites_mut().add(item(7)).await.unwrap());
    assert_eq!(site.favorites().len(), 1);
    assert!(site.favorites().is_favorite(7));
}

#[tokio::test]
async fn test_logged_out_mutations_are_ignored() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;

    assert!(!site.favorites_mut().add(item(1)).await.unwrap());
    assert!(!site.favorites_mut().remove(1).await.unwrap());
    assert!(site.favorites().is_empty());

    let keys = backend.0.keys().await.unwrap();
    assert!(keys.iter().all(|key| !key.starts_with("favorites-")));
}

#[tokio::test]
async fn test_favorites_are_scoped_per_account() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.favorites_mut().add(item(1)).await.unwrap();
    site.logout().await.unwrap();

    site.signup("Bob", "bob@x.com", "pw2").await.unwrap();
    assert!(!site.favorites().is_favorite(1));
    assert!(site.favorites().is_empty());
    site.favorites_mut().add(item(2)).await.unwrap();

    site.login("ann@x.com", "pw1").await.unwrap();
    assert!(site.favorites().is_favorite(1));
    assert!(!site.favorites().is_favorite(2));
}

#[tokio::test]
async fn test_switching_identity_without_logout_reloads_favorites() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.favorites_mut().add(item(1)).await.unwrap();

    site.login("admin@example.com", "1234").await.unwrap();
    assert_eq!(site.favorites().owner(), Some("admin@example.com"));
    assert!(site.favorites().is_empty());
}

#[tokio::test]
async fn test_logout_clears_memory_but_not_storage() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.favorites_mut().add(item(1)).await.unwrap();
    site.favorites_mut().add(item(3)).await.unwrap();
    let stored = backend.raw("favorites-ann@x.com").await;
    assert!(stored.is_some());

    site.logout().await.unwrap();
    assert!(site.favorites().is_empty());
    assert_eq!(backend.raw("favorites-ann@x.com").await, stored);

    site.login("ann@x.com", "pw1").await.unwrap();
    assert_eq!(site.favorites().items(), &[item(1), item(3)]);
}

#[tokio::test]
async fn test_restored_session_loads_favorites() {
    let backend = SharedBackend::new();
    {
        let mut site = site_on(&backend).await;
        site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
        let hotel = catalog::hotel(4).unwrap().to_favorite();
        site.favorites_mut().add(hotel).await.unwrap();
    }

    let site = site_on(&backend).await;
    let items = site.favorites().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title(), Some("Red Sea Coral Resort"));
}

#[tokio::test]
async fn test_foreign_fields_round_trip_verbatim() {
    let backend = SharedBackend::new();
    backend
        .0
        .set(
            "favorites-admin@example.com",
            r#"[{"id":1,"title":"Kempinski Hotel Soma Bay","rating":"4.2 (1,274)","isFavorite":true}]"#
                .to_string(),
        )
        .await
        .unwrap();

    let mut site = site_on(&backend).await;
    site.login("admin@example.com", "1234").await.unwrap();
    site.favorites_mut().add(item(2)).await.unwrap();

    let stored = backend.json("favorites-admin@example.com").await.unwrap();
    assert_eq!(stored[0]["rating"], "4.2 (1,274)");
    assert_eq!(stored[0]["isFavorite"], true);
    assert_eq!(stored[1]["id"], 2);
}
