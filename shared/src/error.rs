//! API 层错误类型

use thiserror::Error;

/// 网络层失败时展示给用户的通用消息
pub const NETWORK_FAILURE_MESSAGE: &str = "通信に失敗しました。時間をおいて再度お試しください";

/// 调用 REST API 可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// fetch 本身失败（离线、CORS、DNS 等）
    #[error("network error: {0}")]
    Network(String),
    /// 401/403：凭据无效或已过期
    #[error("{message}")]
    Unauthorized { status: u16, message: String },
    /// 409：资源冲突（注册时邮箱重复）
    #[error("{message}")]
    Conflict { message: String },
    /// 其他非 2xx 响应，消息来自服务器消息提取
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx 但 body 不符合预期形状
    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),
    /// 认证成功响应里没有 token
    #[error("認証トークンを取得できませんでした")]
    MissingToken,
    /// 请求无法构建或序列化
    #[error("リクエストの作成に失敗しました: {0}")]
    Request(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 根据状态码把失败响应归类
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            409 => ApiError::Conflict { message },
            _ => ApiError::Server { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Conflict { .. } => Some(409),
            _ => None,
        }
    }

    /// 是否应当清除凭据并跳转登录
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }

    /// 页面级提示区域显示的文本
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert!(ApiError::from_status(401, "x".into()).is_auth_failure());
        assert!(ApiError::from_status(403, "x".into()).is_auth_failure());
        assert!(ApiError::from_status(409, "dup".into()).is_conflict());
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server { status: 500, message: "boom".into() }
        );
    }

    #[test]
    fn network_errors_show_generic_text() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn server_errors_show_extracted_text() {
        let err = ApiError::from_status(400, "タイトルは必須です".into());
        assert_eq!(err.user_message(), "タイトルは必須です");
        assert_eq!(err.status(), Some(400));
    }
}
