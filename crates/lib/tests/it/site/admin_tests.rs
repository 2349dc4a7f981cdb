//! Admin panel tests: access control, listing and deletion

use egytravel::{Error, admin::AdminError};

use crate::helpers::*;

#[tokio::test]
async fn test_admin_panel_requires_admin_session() {
    let mut site = test_site().await;

    let err = site.admin().err().expect("logged out must be denied");
    assert!(matches!(
        err,
        Error::Admin(AdminError::AccessDenied { email: None })
    ));

    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    let err = site.admin().err().expect("non-admin must be denied");
    assert!(err.is_permission_denied());
    assert!(matches!(
        err,
        Error::Admin(AdminError::AccessDenied { email: Some(ref email) }) if email == "ann@x.com"
    ));
}

#[tokio::test]
async fn test_admin_lists_users() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.signup("Bob", "bob@x.com", "pw2").await.unwrap();
    site.login("admin@example.com", "1234").await.unwrap();

    let users = site.admin().unwrap().users().await.unwrap();
    let rows: Vec<_> = users
        .iter()
        .map(|user| (user.email.as_str(), user.name.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("admin@example.com", "Administrator"),
            ("ann@x.com", "Ann"),
            ("bob@x.com", "Bob"),
        ]
    );
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.favorites_mut()
        .add(egytravel::catalog::hotel(1).unwrap().to_favorite())
        .await
        .unwrap();
    site.login("admin@example.com", "1234").await.unwrap();

    site.admin().unwrap().delete_user("ann@x.com").await.unwrap();

    assert!(!site.check_user_exists("ann@x.com").await.unwrap());
    let err = site.login("ann@x.com", "pw1").await.unwrap_err();
    assert!(err.is_not_found());

    // Favorites of the deleted account are left behind
    assert!(backend.raw("favorites-ann@x.com").await.is_some());
}

#[tokio::test]
async fn test_admin_cannot_delete_admin() {
    let mut site = test_site().await;
    site.login("admin@example.com", "1234").await.unwrap();

    let err = site
        .admin()
        .unwrap()
        .delete_user("admin@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Admin(AdminError::CannotDeleteAdmin)));
    assert!(site.check_user_exists("admin@example.com").await.unwrap());
}

#[tokio::test]
async fn test_admin_delete_unknown_user() {
    let mut site = test_site().await;
    site.login("admin@example.com", "1234").await.unwrap();

    let err = site
        .admin()
        .unwrap()
        .delete_user("ghost@x.com")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_admin_searches_users() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    site.signup("Bob", "bob@x.com", "pw2").await.unwrap();
    site.login("admin@example.com", "1234").await.unwrap();

    let admin = site.admin().unwrap();
    let found: Vec<_> = admin
        .search_users("ANN")
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.email)
        .collect();
    assert_eq!(found, vec!["ann@x.com"]);
    assert_eq!(admin.search_users("").await.unwrap().len(), 3);
}
