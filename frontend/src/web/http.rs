//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的简洁 HTTP 客户端接口。响应体只读取一次（文本），
//! 之后的成功解析与失败消息提取都基于这份文本。

use bookreview_shared::{ApiError, ApiResult, HttpMethod};
use gloo_net::http::Request;
use web_sys::FormData;

/// 请求体
pub enum HttpBody {
    Json(String),
    Form(FormData),
}

/// 已读取完毕的 HTTP 响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub ok: bool,
    /// 读取失败时为 `None`
    pub body: Option<String>,
}

/// HTTP 请求构建器
pub struct HttpRequestBuilder {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<HttpBody>,
}

impl HttpRequestBuilder {
    fn new(url: String, method: HttpMethod) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 设置请求体
    pub fn body(mut self, body: HttpBody) -> Self {
        self.body = Some(body);
        self
    }

    /// 发送请求并读取响应体
    pub async fn send(self) -> ApiResult<HttpResponse> {
        let mut builder = match self.method {
            HttpMethod::Get => Request::get(&self.url),
            HttpMethod::Post => Request::post(&self.url),
            HttpMethod::Put => Request::put(&self.url),
            HttpMethod::Delete => Request::delete(&self.url),
        };
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        let request = match self.body {
            None => builder.build(),
            Some(HttpBody::Json(json)) => builder.body(json),
            Some(HttpBody::Form(form)) => builder.body(form),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        log::debug!("{} {}", self.method.as_str(), self.url);
        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", self.method.as_str(), self.url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();
        let ok = response.ok();
        let body = response.text().await.ok();

        Ok(HttpResponse {
            status,
            status_text,
            ok,
            body,
        })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    pub fn request(method: HttpMethod, url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), method)
    }

    /// 创建 POST 请求
    pub fn post(url: &str) -> HttpRequestBuilder {
        Self::request(HttpMethod::Post, url)
    }
}
