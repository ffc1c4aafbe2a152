use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.into(),
        password: password.into(),
    }
}

#[test]
fn empty_login_form_reports_both_fields() {
    let errors = login("", "").validate().unwrap_err();
    assert_eq!(errors.get("email"), Some(MSG_EMAIL_INVALID));
    assert_eq!(errors.get("password"), Some(MSG_PASSWORD_SHORT));
}

#[test]
fn invalid_email_with_long_password_reports_only_email() {
    let errors = login("not-an-email", "secretsecret").validate().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
}

#[test]
fn short_password_with_valid_email_reports_only_password() {
    let errors = login("user@example.com", "123").validate().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["password"]);
}

#[test]
fn valid_login_form_builds_request() {
    let req = login("  user@example.com ", "secretsecret").validate().unwrap();
    assert_eq!(req.email, "user@example.com");
    assert_eq!(req.password, "secretsecret");
}

#[test]
fn email_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.jp"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b..com"));
}

#[test]
fn signup_requires_two_character_name() {
    let form = SignupForm {
        name: "a".into(),
        email: "a@b.com".into(),
        password: "password1".into(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("name"), Some(MSG_NAME_SHORT));
    assert_eq!(errors.get("email"), None);
}

#[test]
fn password_length_counts_characters() {
    assert!(login("a@b.com", "パスワード１２３").validate().is_ok());
}

#[test]
fn profile_name_is_trimmed() {
    let req = ProfileForm { name: "  bob ".into() }.validate().unwrap();
    assert_eq!(req.name, "bob");
    assert!(ProfileForm { name: " b ".into() }.validate().is_err());
}

#[test]
fn avatar_rules() {
    assert_eq!(validate_avatar(1024.0, "image/png"), Ok(()));
    assert_eq!(validate_avatar(11.0 * 1024.0 * 1024.0, "image/png"), Err(MSG_AVATAR_TOO_LARGE));
    assert_eq!(validate_avatar(1024.0, "application/pdf"), Err(MSG_AVATAR_NOT_IMAGE));
}

#[test]
fn bare_hostname_gets_https_prefix() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
}

#[test]
fn existing_scheme_is_kept() {
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
}

#[test]
fn empty_url_stays_empty() {
    assert_eq!(normalize_url("   "), "");
}

#[test]
fn draft_requires_every_field() {
    let mut draft = ReviewDraft {
        title: "t".into(),
        detail: "d".into(),
        review: "r".into(),
        url: "u".into(),
    };
    assert!(draft.can_submit());
    draft.detail = "   ".into();
    assert!(!draft.can_submit());
}

#[test]
fn payload_truncates_without_splitting_characters() {
    let draft = ReviewDraft {
        title: "本".repeat(200),
        detail: " detail ".into(),
        review: "x".repeat(141),
        url: "example.com".into(),
    };
    let payload = draft.to_payload();
    assert_eq!(payload.title.chars().count(), 140);
    assert!(payload.title.chars().all(|c| c == '本'));
    assert_eq!(payload.detail, "detail");
    assert_eq!(payload.review.len(), 140);
    assert_eq!(payload.url, "https://example.com");
}

#[test]
fn removing_a_field_error_allows_a_new_message() {
    let mut errors = FieldErrors::new();
    errors.insert("avatar", MSG_AVATAR_NOT_IMAGE);
    errors.insert("avatar", MSG_AVATAR_TOO_LARGE);
    assert_eq!(errors.get("avatar"), Some(MSG_AVATAR_NOT_IMAGE));

    errors.remove("avatar");
    assert!(errors.is_empty());
    errors.insert("avatar", MSG_AVATAR_TOO_LARGE);
    assert_eq!(errors.get("avatar"), Some(MSG_AVATAR_TOO_LARGE));
}

#[test]
fn signup_conflict_lands_on_email_field_only() {
    let err = ApiError::from_status(409, "duplicate".into());
    let (errors, page) = signup_failure(&err);
    assert_eq!(errors.get("email"), Some(MSG_EMAIL_TAKEN));
    assert_eq!(errors.fields().count(), 1);
    assert_eq!(page, None);
}

#[test]
fn other_signup_failures_are_page_messages() {
    let err = ApiError::from_status(400, "名前が不正です".into());
    let (errors, page) = signup_failure(&err);
    assert!(errors.is_empty());
    assert_eq!(page.as_deref(), Some("名前が不正です"));

    let (errors, page) = signup_failure(&ApiError::Network("offline".into()));
    assert!(errors.is_empty());
    assert_eq!(page, Some(ApiError::Network(String::new()).user_message()));
}
