use egytravel::{
    Config, Site,
    backend::{Backend, database::InMemory},
};
use tempfile::TempDir;

#[tokio::test]
async fn test_site_state_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("egytravel.json");

    {
        let backend = InMemory::load_from_file(&path).await.unwrap();
        let mut site = Site::open(Box::new(backend), Config::default())
            .await
            .unwrap();
        site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
        let hotel = egytravel::catalog::hotel(3).unwrap().to_favorite();
        site.favorites_mut().add(hotel).await.unwrap();

        let backend = site
            .backend()
            .as_any()
            .downcast_ref::<InMemory>()
            .expect("site should be backed by InMemory");
        backend.save_to_file(&path).await.unwrap();
    }

    let backend = InMemory::load_from_file(&path).await.unwrap();
    let site = Site::open(Box::new(backend), Config::default())
        .await
        .unwrap();
    assert_eq!(site.current_user().unwrap().email, "ann@x.com");
    assert!(site.favorites().is_favorite(3));
}

#[tokio::test]
async fn test_load_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ definitely not json").await.unwrap();

    let err = InMemory::load_from_file(&path).await.unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.module(), "backend");
}

#[tokio::test]
async fn test_site_with_custom_keys() {
    let config = Config {
        users_key: "staging-users".to_string(),
        session_key: "staging-session".to_string(),
        favorites_prefix: "staging-favorites-".to_string(),
        ..Config::default()
    };

    let mut site = Site::open(Box::new(InMemory::new()), config).await.unwrap();
    site.login("admin@example.com", "1234").await.unwrap();
    site.favorites_mut()
        .add(egytravel::favorites::FavoriteItem::new(9))
        .await
        .unwrap();

    let mut keys = site.backend().keys().await.unwrap();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "staging-favorites-admin@example.com",
            "staging-session",
            "staging-users",
        ]
    );
}
