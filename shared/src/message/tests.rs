use super::*;

#[test]
fn non_json_body_falls_back_to_status_line() {
    assert_eq!(
        pick_server_message(502, "Bad Gateway", Some("<html>upstream down</html>")),
        "HTTP 502 Bad Gateway"
    );
}

#[test]
fn missing_or_empty_body_falls_back_to_status_line() {
    assert_eq!(pick_server_message(500, "Internal Server Error", None), "HTTP 500 Internal Server Error");
    assert_eq!(pick_server_message(404, "Not Found", Some("")), "HTTP 404 Not Found");
}

#[test]
fn japanese_message_wins_over_generic_message() {
    let body = r#"{"ErrorMessageJP":"X","message":"Y"}"#;
    assert_eq!(pick_server_message(400, "Bad Request", Some(body)), "X");
}

#[test]
fn generic_message_wins_over_english_message() {
    let body = r#"{"ErrorMessageEN":"english","message":"generic"}"#;
    assert_eq!(pick_server_message(400, "Bad Request", Some(body)), "generic");
}

#[test]
fn empty_japanese_message_is_skipped() {
    let body = r#"{"ErrorMessageJP":"","ErrorMessageEN":"english"}"#;
    assert_eq!(pick_server_message(400, "Bad Request", Some(body)), "english");
}

#[test]
fn errors_array_joins_messages_with_newlines() {
    let body = r#"{"errors":[{"message":"a"},{"message":"b"}]}"#;
    assert_eq!(pick_server_message(422, "Unprocessable Entity", Some(body)), "a\nb");
}

#[test]
fn errors_array_uses_string_form_without_message_field() {
    let body = r#"{"errors":["plain",{"code":7}]}"#;
    assert_eq!(
        pick_server_message(422, "Unprocessable Entity", Some(body)),
        "plain\n{\"code\":7}"
    );
}

#[test]
fn field_errors_keep_server_order() {
    let body = r#"{"fieldErrors":{"title":"タイトルは必須です","url":"URLが不正です"}}"#;
    assert_eq!(
        pick_server_message(400, "Bad Request", Some(body)),
        "タイトルは必須です\nURLが不正です"
    );
}

#[test]
fn string_body_is_used_verbatim() {
    assert_eq!(pick_server_message(400, "Bad Request", Some(r#""oops""#)), "oops");
}

#[test]
fn unrecognized_object_falls_back_to_status_line() {
    assert_eq!(
        pick_server_message(418, "I'm a teapot", Some(r#"{"detail":"nope"}"#)),
        "HTTP 418 I'm a teapot"
    );
}

#[test]
fn empty_errors_array_falls_through_to_status_line() {
    assert_eq!(
        pick_server_message(400, "Bad Request", Some(r#"{"errors":[]}"#)),
        "HTTP 400 Bad Request"
    );
}

#[test]
fn empty_errors_array_defers_to_field_errors() {
    let body = r#"{"errors":[],"fieldErrors":{"url":"URLが不正です"}}"#;
    assert_eq!(pick_server_message(400, "Bad Request", Some(body)), "URLが不正です");
}
