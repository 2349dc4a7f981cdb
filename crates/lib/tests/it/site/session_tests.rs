//! Account and session tests: signup, login, logout and restore
//!
//! Covers:
//! - The administrator bootstrap on first read
//! - Login success and both failure kinds, with state left untouched
//! - Signup auto-login and the already-exists signal
//! - Session restore across a reopen of the same backend

use egytravel::{Error, backend::Backend, identity::AccountError, session::SessionState};

use crate::helpers::*;

const ADMIN: &str = "admin@example.com";

// ===== BOOTSTRAP =====

#[tokio::test]
async fn test_admin_always_present() {
    let backend = SharedBackend::new();
    let site = site_on(&backend).await;

    assert!(site.check_user_exists(ADMIN).await.unwrap());
    let users = backend.json("egypt-travel-users").await.unwrap();
    assert_eq!(users[ADMIN]["name"], "Administrator");
    assert_eq!(users[ADMIN]["password"], "1234");
}

#[tokio::test]
async fn test_admin_survives_overwritten_mapping() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();

    // Another writer drops the admin entry from the blob
    backend
        .0
        .set(
            "egypt-travel-users",
            r#"{"ann@x.com":{"name":"Ann","password":"pw1"}}"#.to_string(),
        )
        .await
        .unwrap();

    let accounts = site.identity().accounts().await.unwrap();
    assert_eq!(accounts[ADMIN].password, "1234");
    assert_eq!(accounts["ann@x.com"].name, "Ann");
}

// ===== LOGIN =====

#[tokio::test]
async fn test_signup_then_login_scenario() {
    let mut site = test_site().await;

    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    assert!(site.check_user_exists("ann@x.com").await.unwrap());

    site.logout().await.unwrap();
    let user = site.login("ann@x.com", "pw1").await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Ann"));

    let err = site.login("ann@x.com", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Account(AccountError::InvalidCredential { .. })
    ));
}

#[tokio::test]
async fn test_login_unknown_account() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;

    let err = site.login("nobody@x.com", "pw").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "No account found with this email");
    assert_eq!(site.session(), &SessionState::LoggedOut);
    assert!(backend.raw("loggedInUser").await.is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let mut site = test_site().await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    let before = site.session().clone();

    assert!(site.login(ADMIN, "nope").await.is_err());
    assert!(site.login("ghost@x.com", "nope").await.is_err());
    assert_eq!(site.session(), &before);
}

// ===== SIGNUP =====

#[tokio::test]
async fn test_signup_existing_account_signals_conflict() {
    let mut site = test_site().await;

    let err = site.signup("Someone", ADMIN, "x").await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.user_message(), "Account already exists with this email");
    assert!(!site.is_logged_in());

    // The stored admin record is untouched
    let admin = site.identity().get(ADMIN).await.unwrap().unwrap();
    assert_eq!(admin.name, "Administrator");
    assert_eq!(admin.password, "1234");
}

#[tokio::test]
async fn test_signup_persists_session_record() {
    let backend = SharedBackend::new();
    let mut site = site_on(&backend).await;
    site.signup("Ann", "ann@x.com", "pw1").await.unwrap();

    assert_eq!(
        backend.json("loggedInUser").await.unwrap(),
        serde_json::json!({ "name": "Ann", "email": "ann@x.com" })
    );
}

// ===== LOGOUT & RESTORE =====

#[tokio::test]
async fn test_session_restored_on_reopen() {
    let backend = SharedBackend::new();
    {
        let mut site = site_on(&backend).await;
        site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
    }

    let site = site_on(&backend).await;
    let user = site.current_user().expect("session should be restored");
    assert_eq!(user.email, "ann@x.com");
    assert_eq!(user.display_name(), "Ann");
}

#[tokio::test]
async fn test_logout_is_not_restored() {
    let backend = SharedBackend::new();
    {
        let mut site = site_on(&backend).await;
        site.signup("Ann", "ann@x.com", "pw1").await.unwrap();
        site.logout().await.unwrap();
    }

    let site = site_on(&backend).await;
    assert!(!site.is_logged_in());
}
