use crate::web::{HttpBody, HttpClient, HttpResponse};
use bookreview_shared::model::{IconUploadResponse, decode_body};
use bookreview_shared::pagination::ListKind;
use bookreview_shared::protocol::{
    ApiRequest, AuthMode, CreateBookRequest, CreateUserRequest, DeleteBookRequest, GetBookRequest,
    GetPublicBookRequest, GetUserRequest, ListBooksRequest, ListPublicBooksRequest, SigninRequest,
    UPLOAD_FIELD, UPLOAD_PATH, UpdateBookRequest, UpdateUserRequest, bearer_value,
};
use bookreview_shared::{
    ApiError, ApiResult, AuthResponse, HEADER_ACCEPT, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE,
    MIME_JSON, Review, ReviewPayload, UserProfile, pick_server_message,
};
use web_sys::{File, FormData};

/// 书评 REST API 客户端
///
/// token 由调用方在每次请求时传入，保证使用的是存储中最新的凭据。
#[derive(Clone, Debug, PartialEq)]
pub struct BookReviewApi {
    pub base_url: String,
}

impl BookReviewApi {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送任意 `ApiRequest`
    pub async fn send<R: ApiRequest>(&self, req: &R, token: Option<&str>) -> ApiResult<R::Response> {
        let mut builder =
            HttpClient::request(R::METHOD, &self.url(&req.path())).header(HEADER_ACCEPT, MIME_JSON);

        if R::AUTH == AuthMode::Bearer {
            if let Some(token) = token {
                builder = builder.header(HEADER_AUTHORIZATION, &bearer_value(token));
            }
        }

        if R::METHOD.has_body() {
            let json = serde_json::to_string(req).map_err(|e| ApiError::Request(e.to_string()))?;
            builder = builder
                .header(HEADER_CONTENT_TYPE, MIME_JSON)
                .body(HttpBody::Json(json));
        }

        read_response(builder.send().await?)
    }

    // =========================================================
    // Auth & Users
    // =========================================================

    pub async fn signin(&self, req: &SigninRequest) -> ApiResult<AuthResponse> {
        self.send(req, None).await
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> ApiResult<AuthResponse> {
        self.send(req, None).await
    }

    pub async fn fetch_profile(&self, token: &str) -> ApiResult<UserProfile> {
        self.send(&GetUserRequest, Some(token)).await
    }

    pub async fn update_profile(&self, req: &UpdateUserRequest, token: &str) -> ApiResult<()> {
        self.send(req, Some(token)).await.map(|_| ())
    }

    /// 以 multipart 上传头像，字段名 `icon`；不设置 Content-Type，由浏览器生成 boundary
    pub async fn upload_icon(&self, file: &File, token: &str) -> ApiResult<Option<IconUploadResponse>> {
        let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let resp = HttpClient::post(&self.url(UPLOAD_PATH))
            .header(HEADER_AUTHORIZATION, &bearer_value(token))
            .body(HttpBody::Form(form))
            .send()
            .await?;
        read_response(resp)
    }

    // =========================================================
    // Books
    // =========================================================

    pub async fn list_reviews(
        &self,
        kind: ListKind,
        offset: u32,
        token: Option<&str>,
    ) -> ApiResult<Vec<Review>> {
        let list = match kind {
            ListKind::Public => self.send(&ListPublicBooksRequest { offset }, None).await?,
            ListKind::Private => self.send(&ListBooksRequest { offset }, token).await?,
        };
        Ok(list.into_reviews())
    }

    pub async fn create_review(&self, payload: ReviewPayload, token: &str) -> ApiResult<()> {
        self.send(&CreateBookRequest(payload), Some(token))
            .await
            .map(|_| ())
    }

    pub async fn fetch_review(&self, id: &str, token: &str) -> ApiResult<Review> {
        let req = GetBookRequest { id: id.to_string() };
        self.send(&req, Some(token)).await
    }

    pub async fn update_review(&self, id: &str, payload: ReviewPayload, token: &str) -> ApiResult<()> {
        let req = UpdateBookRequest {
            id: id.to_string(),
            payload,
        };
        self.send(&req, Some(token)).await.map(|_| ())
    }

    pub async fn delete_review(&self, id: &str) -> ApiResult<()> {
        let req = DeleteBookRequest { id: id.to_string() };
        self.send(&req, None).await.map(|_| ())
    }

    /// 详情：有 token 时先请求登录用接口，任何失败都回退到公开接口
    pub async fn fetch_review_detail(&self, id: &str, token: Option<&str>) -> ApiResult<Review> {
        if let Some(token) = token {
            match self.fetch_review(id, token).await {
                Ok(review) => return Ok(review),
                Err(e) => log::info!("private detail for {} failed ({}), trying public", id, e),
            }
        }
        let req = GetPublicBookRequest { id: id.to_string() };
        self.send(&req, None).await
    }
}

/// 非 2xx 时通过服务器消息提取生成错误，否则解析 body
fn read_response<T: serde::de::DeserializeOwned>(resp: HttpResponse) -> ApiResult<T> {
    if !resp.ok {
        let message = pick_server_message(resp.status, &resp.status_text, resp.body.as_deref());
        let err = ApiError::from_status(resp.status, message);
        log::warn!("request rejected (status {:?}): {}", err.status(), err);
        return Err(err);
    }
    decode_body(resp.body.as_deref().unwrap_or_default())
}
