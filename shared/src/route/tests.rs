use super::*;

#[test]
fn parses_static_paths() {
    assert_eq!(AppRoute::from_path("/public/books"), AppRoute::PublicBooks);
    assert_eq!(AppRoute::from_path("/signup"), AppRoute::Signup);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/books"), AppRoute::Books);
    assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
    assert_eq!(AppRoute::from_path("/new"), AppRoute::NewReview);
}

#[test]
fn parses_id_segments() {
    assert_eq!(AppRoute::from_path("/edit/42"), AppRoute::EditReview("42".into()));
    assert_eq!(
        AppRoute::from_path("/detail/abc-123/"),
        AppRoute::ReviewDetail("abc-123".into())
    );
}

#[test]
fn ignores_query_and_fragment() {
    assert_eq!(AppRoute::from_path("/books?offset=10"), AppRoute::Books);
    assert_eq!(AppRoute::from_path("/login#top"), AppRoute::Login);
}

#[test]
fn root_and_unknown_paths_land_on_public_list() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::PublicBooks);
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::PublicBooks);
    assert_eq!(AppRoute::from_path("/edit"), AppRoute::PublicBooks);
    assert_eq!(AppRoute::from_path("/edit/1/extra"), AppRoute::PublicBooks);
}

#[test]
fn paths_round_trip() {
    for route in [
        AppRoute::PublicBooks,
        AppRoute::Signup,
        AppRoute::Login,
        AppRoute::Books,
        AppRoute::Profile,
        AppRoute::NewReview,
        AppRoute::EditReview("7".into()),
        AppRoute::ReviewDetail("7".into()),
    ] {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn require_auth_without_token_redirects_to_login() {
    let outcome = AppRoute::Books.resolve(false);
    assert_eq!(
        outcome,
        GuardOutcome::Redirect(Redirect {
            to: AppRoute::Login,
            from: Some(AppRoute::Books),
            notice: None,
        })
    );
}

#[test]
fn require_auth_remembers_the_attempted_location() {
    let attempted = AppRoute::EditReview("9".into());
    match attempted.resolve(false) {
        GuardOutcome::Redirect(redirect) => assert_eq!(redirect.from, Some(attempted)),
        GuardOutcome::Render => panic!("expected redirect"),
    }
}

#[test]
fn require_auth_with_token_renders() {
    assert_eq!(AppRoute::Books.resolve(true), GuardOutcome::Render);
    assert_eq!(AppRoute::NewReview.resolve(true), GuardOutcome::Render);
}

#[test]
fn guest_only_with_token_redirects_to_books() {
    for route in [AppRoute::Login, AppRoute::Signup] {
        assert_eq!(
            route.resolve(true),
            GuardOutcome::Redirect(Redirect {
                to: AppRoute::Books,
                from: None,
                notice: Some(ALREADY_SIGNED_IN_NOTICE),
            })
        );
    }
}

#[test]
fn guest_only_without_token_renders() {
    assert_eq!(AppRoute::Login.resolve(false), GuardOutcome::Render);
    assert_eq!(AppRoute::Signup.resolve(false), GuardOutcome::Render);
}

#[test]
fn open_routes_always_render() {
    for authenticated in [true, false] {
        assert_eq!(AppRoute::PublicBooks.resolve(authenticated), GuardOutcome::Render);
        assert_eq!(
            AppRoute::ReviewDetail("1".into()).resolve(authenticated),
            GuardOutcome::Render
        );
    }
}

#[test]
fn encoded_ids_are_decoded_once() {
    let route = AppRoute::from_path("/detail/a%20b");
    assert_eq!(route, AppRoute::ReviewDetail("a b".into()));
    assert_eq!(route.to_path(), "/detail/a%20b");
    assert_eq!(
        AppRoute::from_path("/edit/%E6%9C%AC"),
        AppRoute::EditReview("本".into())
    );

    let req = crate::protocol::GetBookRequest { id: "a b".into() };
    assert_eq!(crate::protocol::ApiRequest::path(&req), "/books/a%20b");
}

#[test]
fn malformed_escapes_are_kept_verbatim() {
    assert_eq!(
        AppRoute::from_path("/detail/100%"),
        AppRoute::ReviewDetail("100%".into())
    );
    assert_eq!(
        AppRoute::from_path("/detail/%zz1"),
        AppRoute::ReviewDetail("%zz1".into())
    );
}
