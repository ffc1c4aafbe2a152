use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::validation::truncate_chars;
use crate::MAX_TEXT_LEN;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 一条书评
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub is_mine: bool,
}

impl Review {
    pub fn display_title(&self) -> String {
        non_blank(self.title.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| "(無題)".to_string())
    }

    pub fn link(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    pub fn reviewer_name(&self) -> Option<&str> {
        non_blank(self.reviewer.as_deref())
    }

    pub fn detail_text(&self) -> Option<&str> {
        non_blank(self.detail.as_deref())
    }

    pub fn review_text(&self) -> Option<&str> {
        non_blank(self.review.as_deref())
    }

    /// 列表卡片上显示的摘要
    pub fn excerpt(text: &str) -> String {
        truncate_chars(text, MAX_TEXT_LEN)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("unexpected id: {}", other))),
    }
}

/// 列表接口的响应：裸数组或 `{ "books": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReviewList {
    Bare(Vec<Review>),
    Wrapped {
        #[serde(default)]
        books: Vec<Review>,
    },
}

impl ReviewList {
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewList::Bare(books) | ReviewList::Wrapped { books } => books,
        }
    }
}

/// 新建/更新书评时提交的内容
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub title: String,
    pub detail: String,
    pub review: String,
    pub url: String,
}

/// `/signin` 与 `POST /users` 的成功响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    // 部分接口在 200 中也会带错误消息
    #[serde(default, rename = "ErrorMessageJP")]
    pub error_message_jp: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// 优先 `token`，其次 `accessToken`
    pub fn bearer_token(&self) -> Option<&str> {
        non_blank(self.token.as_deref()).or_else(|| non_blank(self.access_token.as_deref()))
    }

    /// 取出 token 和服务器给出的用户名
    pub fn into_session(self) -> ApiResult<(String, Option<String>)> {
        if let Some(token) = self.bearer_token() {
            let name = non_blank(self.name.as_deref()).map(str::to_string);
            return Ok((token.to_string(), name));
        }
        match non_blank(self.error_message_jp.as_deref()).or(non_blank(self.message.as_deref())) {
            Some(message) => Err(ApiError::Server {
                status: 200,
                message: message.to_string(),
            }),
            None => Err(ApiError::MissingToken),
        }
    }
}

/// `GET /users` 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// `POST /uploads` 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUploadResponse {
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// 解析响应体；空 body 按 JSON `null` 处理
pub fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::IgnoredAny;

    #[test]
    fn list_accepts_bare_array_and_wrapped_object() {
        let bare: ReviewList = decode_body(r#"[{"id":"1","title":"A"}]"#).unwrap();
        let wrapped: ReviewList = decode_body(r#"{"books":[{"id":"1","title":"A"}]}"#).unwrap();
        assert_eq!(bare.into_reviews(), wrapped.into_reviews());

        let empty: ReviewList = decode_body(r#"{"total":0}"#).unwrap();
        assert!(empty.into_reviews().is_empty());
    }

    #[test]
    fn review_reads_camel_case_and_numeric_ids() {
        let review: Review =
            decode_body(r#"{"id":12,"title":"T","isMine":true,"reviewer":"bob"}"#).unwrap();
        assert_eq!(review.id, "12");
        assert!(review.is_mine);
        assert_eq!(review.reviewer_name(), Some("bob"));
        assert_eq!(review.link(), None);
    }

    #[test]
    fn blank_title_shows_placeholder() {
        let review = Review {
            title: Some("  ".into()),
            ..Review::default()
        };
        assert_eq!(review.display_title(), "(無題)");
    }

    #[test]
    fn bearer_token_prefers_token_field() {
        let both: AuthResponse = decode_body(r#"{"token":"a","accessToken":"b"}"#).unwrap();
        assert_eq!(both.bearer_token(), Some("a"));
        let access: AuthResponse = decode_body(r#"{"accessToken":"b"}"#).unwrap();
        assert_eq!(access.bearer_token(), Some("b"));
    }

    #[test]
    fn session_without_token_surfaces_embedded_message() {
        let resp: AuthResponse = decode_body(r#"{"ErrorMessageJP":"認証に失敗"}"#).unwrap();
        assert_eq!(
            resp.into_session(),
            Err(ApiError::Server { status: 200, message: "認証に失敗".into() })
        );
        let empty: AuthResponse = decode_body("{}").unwrap();
        assert_eq!(empty.into_session(), Err(ApiError::MissingToken));
    }

    #[test]
    fn session_carries_server_name() {
        let resp: AuthResponse = decode_body(r#"{"token":"t","name":"alice"}"#).unwrap();
        assert_eq!(resp.into_session(), Ok(("t".into(), Some("alice".into()))));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        assert!(decode_body::<IgnoredAny>("").is_ok());
        assert_eq!(decode_body::<Option<IconUploadResponse>>("  ").unwrap(), None);
        assert!(matches!(decode_body::<Review>("not json"), Err(ApiError::Decode(_))));
    }
}
