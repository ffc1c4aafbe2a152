use crate::model::{AuthResponse, Review, ReviewList, ReviewPayload, UserProfile};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// Whether a request carries the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    None,
    Bearer,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// The serialized form of the request is the JSON body for `POST`/`PUT`;
/// for other methods only `path()` (including any query string) is used.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token is attached.
    const AUTH: AuthMode;
    /// The URL path relative to the API base.
    fn path(&self) -> String;
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Percent-encodes a single path segment.
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decodes `%XX` escapes in a path segment taken from the address bar.
///
/// Malformed escapes are kept as-is; invalid UTF-8 falls back to the raw segment.
pub fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| segment.get(i + 1..i + 3))
            .flatten()
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| segment.to_string())
}

// =========================================================
// Auth & Users
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for SigninRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::None;
    fn path(&self) -> String {
        "/signin".to_string()
    }
}

/// Create an account; the response carries a token just like signin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for CreateUserRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::None;
    fn path(&self) -> String {
        "/users".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GetUserRequest;

impl ApiRequest for GetUserRequest {
    type Response = UserProfile;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        "/users".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

impl ApiRequest for UpdateUserRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        "/users".to_string()
    }
}

/// Multipart icon upload path and form field (not JSON, so not an `ApiRequest`).
pub const UPLOAD_PATH: &str = "/uploads";
pub const UPLOAD_FIELD: &str = "icon";

// =========================================================
// Books
// =========================================================

/// Private paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListBooksRequest {
    #[serde(skip)]
    pub offset: u32,
}

impl ApiRequest for ListBooksRequest {
    type Response = ReviewList;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        format!("/books?offset={}", self.offset)
    }
}

/// Public paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListPublicBooksRequest {
    #[serde(skip)]
    pub offset: u32,
}

impl ApiRequest for ListPublicBooksRequest {
    type Response = ReviewList;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::None;
    fn path(&self) -> String {
        format!("/public/books?offset={}", self.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CreateBookRequest(pub ReviewPayload);

impl ApiRequest for CreateBookRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        "/books".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBookRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetBookRequest {
    type Response = Review;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        format!("/books/{}", encode_segment(&self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBookRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub payload: ReviewPayload,
}

impl ApiRequest for UpdateBookRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTH: AuthMode = AuthMode::Bearer;
    fn path(&self) -> String {
        format!("/books/{}", encode_segment(&self.id))
    }
}

/// Delete a review.
///
/// Sent without the bearer header, unlike every other mutating call. Whether
/// the backend authorizes deletes some other way is unconfirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBookRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteBookRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const AUTH: AuthMode = AuthMode::None;
    fn path(&self) -> String {
        format!("/books/{}", encode_segment(&self.id))
    }
}

/// Public detail, used as the fallback of the authenticated detail call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPublicBookRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetPublicBookRequest {
    type Response = Review;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTH: AuthMode = AuthMode::None;
    fn path(&self) -> String {
        format!("/public/books/{}", encode_segment(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ReviewPayload {
        ReviewPayload {
            title: "t".into(),
            detail: "d".into(),
            review: "r".into(),
            url: "https://example.com".into(),
        }
    }

    #[test]
    fn list_paths_carry_offset() {
        assert_eq!(ListBooksRequest { offset: 20 }.path(), "/books?offset=20");
        assert_eq!(ListPublicBooksRequest { offset: 0 }.path(), "/public/books?offset=0");
    }

    #[test]
    fn update_body_omits_id() {
        let req = UpdateBookRequest {
            id: "42".into(),
            payload: payload(),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::to_value(payload()).unwrap());
        assert_eq!(req.path(), "/books/42");
    }

    #[test]
    fn create_body_is_the_payload() {
        let body = serde_json::to_value(CreateBookRequest(payload())).unwrap();
        assert_eq!(body["title"], "t");
        assert_eq!(body["url"], "https://example.com");
    }

    #[test]
    fn protected_calls_use_bearer() {
        assert_eq!(<ListBooksRequest as ApiRequest>::AUTH, AuthMode::Bearer);
        assert_eq!(<CreateBookRequest as ApiRequest>::AUTH, AuthMode::Bearer);
        assert_eq!(<UpdateBookRequest as ApiRequest>::AUTH, AuthMode::Bearer);
        assert_eq!(<GetUserRequest as ApiRequest>::AUTH, AuthMode::Bearer);
        assert_eq!(<ListPublicBooksRequest as ApiRequest>::AUTH, AuthMode::None);
        assert_eq!(<DeleteBookRequest as ApiRequest>::AUTH, AuthMode::None);
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(GetPublicBookRequest { id: "a/b c".into() }.path(), "/public/books/a%2Fb%20c");
        assert_eq!(encode_segment("ok-id_1.~"), "ok-id_1.~");
    }

    #[test]
    fn only_post_and_put_send_a_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
