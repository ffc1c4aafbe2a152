//! 书评客户端的纯领域层
//!
//! 不依赖 DOM 或 `web_sys`，可以在原生目标上直接测试：
//! - `message`: 服务器错误消息提取
//! - `credential`: 基于键值存储的凭据读写
//! - `pagination`: 公开/私有列表的页码状态
//! - `route`: 路由定义与守卫判定
//! - `validation`: 表单校验与提交前的规范化
//! - `protocol` / `model`: REST 接口契约
//! - `cancel`: 协作式取消令牌
//! - `image`: 头像压缩的尺寸计算

pub mod cancel;
pub mod credential;
pub mod error;
pub mod image;
pub mod message;
pub mod model;
pub mod pagination;
pub mod protocol;
pub mod route;
pub mod validation;

pub use cancel::CancelToken;
pub use credential::{Credential, CredentialStore, KeyValueStore, MemoryStore};
pub use error::{ApiError, ApiResult};
pub use message::pick_server_message;
pub use model::{AuthResponse, Review, ReviewList, ReviewPayload, UserProfile};
pub use pagination::{ListKind, PageCounter, PaginationState};
pub use protocol::{ApiRequest, AuthMode, HttpMethod};
pub use route::{AppRoute, Guard, GuardOutcome, Redirect};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 列表接口每页返回的条数，offset = page * PAGE_SIZE
pub const PAGE_SIZE: u32 = 10;

/// 标题/书籍信息/书评正文提交前截断的最大字符数
pub const MAX_TEXT_LEN: usize = 140;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const MIME_JSON: &str = "application/json";
