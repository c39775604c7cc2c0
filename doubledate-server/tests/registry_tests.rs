use doubledate_core::{Locale, RegistryError, UserPatch};
use doubledate_server::registry::UserRegistry;

#[test]
fn test_create_returns_public_projection() {
    let registry = UserRegistry::new();

    let user = registry.create("alice", "sk-alice").unwrap();

    assert_eq!(user.id, "alice");
    assert_eq!(user.locale, Locale::US);
    assert!(user.days_lived.is_none());
    assert!(user.weekday.is_none());
    assert!(user.last_updated.is_none());
}

#[test]
fn test_create_rejects_empty_fields() {
    let registry = UserRegistry::new();

    assert!(matches!(
        registry.create("", "sk-alice"),
        Err(RegistryError::InvalidInput(_))
    ));
    assert!(matches!(
        registry.create("alice", ""),
        Err(RegistryError::InvalidInput(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_create_duplicate_id() {
    let registry = UserRegistry::new();

    registry.create("alice", "sk-first").unwrap();
    let err = registry.create("alice", "sk-second").unwrap_err();

    assert_eq!(err, RegistryError::AlreadyExists("alice".to_string()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_list_contains_created_users() {
    let registry = UserRegistry::new();

    registry.create("alice", "sk-a").unwrap();
    registry.create("bob", "sk-b").unwrap();

    let users = registry.list();
    assert_eq!(users.len(), 2);
    // Iteration order is unspecified, so look ids up instead of indexing
    assert!(users.iter().any(|u| u.id == "alice"));
    assert!(users.iter().any(|u| u.id == "bob"));
}

#[test]
fn test_delete_removes_user() {
    let registry = UserRegistry::new();

    registry.create("alice", "sk-a").unwrap();
    registry.delete("alice").unwrap();

    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
}

#[test]
fn test_delete_missing_user() {
    let registry = UserRegistry::new();

    assert_eq!(
        registry.delete("ghost"),
        Err(RegistryError::NotFound("ghost".to_string()))
    );
}

#[test]
fn test_update_missing_user() {
    let registry = UserRegistry::new();

    let err = registry.update("ghost", UserPatch::default()).unwrap_err();
    assert_eq!(err, RegistryError::NotFound("ghost".to_string()));
}

#[test]
fn test_update_applies_patch_fields() {
    let registry = UserRegistry::new();
    registry.create("alice", "sk-old").unwrap();

    let updated = registry
        .update(
            "alice",
            UserPatch {
                secret_key: Some("sk-new".to_string()),
                locale: Some(Locale::INTL),
            },
        )
        .unwrap();

    assert_eq!(updated.locale, Locale::INTL);
    assert!(updated.last_updated.is_some());
}

#[test]
fn test_update_absent_fields_leave_record_untouched() {
    let registry = UserRegistry::new();
    registry.create("alice", "sk-a").unwrap();
    registry
        .update(
            "alice",
            UserPatch {
                secret_key: None,
                locale: Some(Locale::INTL),
            },
        )
        .unwrap();

    // Empty patch keeps the previously set locale
    let updated = registry.update("alice", UserPatch::default()).unwrap();
    assert_eq!(updated.locale, Locale::INTL);
}

#[test]
fn test_stats_unknown_user_defaults() {
    let registry = UserRegistry::new();

    let stats = registry.stats("ghost");
    assert_eq!(stats.days_lived, "0");
    assert_eq!(stats.weekday, "");
}

#[test]
fn test_concurrent_create_single_winner() {
    let registry = UserRegistry::new();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.create("alice", &format!("sk-{i}")))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(RegistryError::AlreadyExists(_))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(registry.len(), 1);
}
