use super::*;

fn store() -> CredentialStore<MemoryStore> {
    CredentialStore::new(MemoryStore::new())
}

#[test]
fn empty_store_is_unauthenticated() {
    let creds = store();
    assert!(!creds.is_authenticated());
    assert_eq!(creds.get(), None);
}

#[test]
fn set_persists_token_and_name() {
    let creds = store();
    assert!(creds.set("tkn", Some("alice")));
    assert_eq!(
        creds.get(),
        Some(Credential {
            token: "tkn".into(),
            display_name: Some("alice".into()),
        })
    );
}

#[test]
fn set_without_name_keeps_previous_name() {
    let creds = store();
    creds.set("old", Some("alice"));
    creds.set("new", None);
    assert_eq!(creds.token().as_deref(), Some("new"));
    assert_eq!(creds.display_name().as_deref(), Some("alice"));
}

#[test]
fn clear_removes_both_entries() {
    let creds = store();
    creds.set("tkn", Some("alice"));
    creds.clear();
    assert!(!creds.is_authenticated());
    assert_eq!(creds.display_name(), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let creds = store();
    creds.set("", Some("ghost"));
    assert!(!creds.is_authenticated());
}

#[test]
fn display_name_can_be_refreshed() {
    let creds = store();
    creds.set("tkn", None);
    assert_eq!(creds.get().and_then(|c| c.display_name), None);
    creds.set_display_name("bob");
    assert_eq!(creds.display_name().as_deref(), Some("bob"));
}

#[test]
fn fallback_name_is_email_local_part() {
    assert_eq!(display_name_fallback("user@example.com").as_deref(), Some("user"));
    assert_eq!(display_name_fallback("@example.com"), None);
}

#[test]
fn entries_are_plain_strings_shared_with_other_writers() {
    let kv = MemoryStore::new();
    // 其他页面或测试脚本直接 setItem 写入的原始值
    kv.set(TOKEN_KEY, "eyJhbGciOi.raw");
    kv.set(USER_NAME_KEY, "alice");
    let creds = CredentialStore::new(kv);
    assert_eq!(creds.token().as_deref(), Some("eyJhbGciOi.raw"));
    assert_eq!(creds.display_name().as_deref(), Some("alice"));

    let kv = MemoryStore::new();
    CredentialStore::new(&kv).set("tok", Some("bob"));
    assert_eq!(kv.get(TOKEN_KEY).as_deref(), Some("tok"));
    assert_eq!(kv.get(USER_NAME_KEY).as_deref(), Some("bob"));
}
