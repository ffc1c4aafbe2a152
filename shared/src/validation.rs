//! 表单校验与提交前规范化
//!
//! 校验结果按字段给出消息，由视图渲染到 `#<field>-error` 元素中。

use crate::MAX_TEXT_LEN;
use crate::error::ApiError;
use crate::model::ReviewPayload;
use crate::protocol::{CreateUserRequest, SigninRequest, UpdateUserRequest};

#[cfg(test)]
mod tests;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_AVATAR_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

pub const MSG_EMAIL_INVALID: &str = "メールアドレスの形式が正しくありません";
pub const MSG_PASSWORD_SHORT: &str = "パスワードは8文字以上で入力してください";
pub const MSG_NAME_SHORT: &str = "ユーザー名は2文字以上で入力してください";
pub const MSG_AVATAR_TOO_LARGE: &str = "画像は10MBにしてください";
pub const MSG_AVATAR_NOT_IMAGE: &str = "画像ファイルを選択してください";
pub const MSG_EMAIL_TAKEN: &str = "このメールアドレスは既に登録されています";

// =========================================================
// 字段错误集合
// =========================================================

/// 按字段记录的校验错误，保持插入顺序
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一字段只保留第一条消息
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field, message.into()));
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.0.retain(|(name, _)| *name != field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

// =========================================================
// 单项规则
// =========================================================

/// 宽松的邮箱格式检查：`local@label.label`，不含空白
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 按字符截断，不会切断多字节字符
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// 没有协议头的地址补上 `https://`，空串保持为空
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// 头像文件检查：大小上限和 MIME 类型
pub fn validate_avatar(size_bytes: f64, mime: &str) -> Result<(), &'static str> {
    if size_bytes > MAX_AVATAR_BYTES {
        return Err(MSG_AVATAR_TOO_LARGE);
    }
    if !mime.starts_with("image/") {
        return Err(MSG_AVATAR_NOT_IMAGE);
    }
    Ok(())
}

// =========================================================
// 表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<SigninRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.insert("email", MSG_EMAIL_INVALID);
        }
        if char_len(&self.password) < MIN_PASSWORD_LEN {
            errors.insert("password", MSG_PASSWORD_SHORT);
        }
        errors.into_result(SigninRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<CreateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        let email = self.email.trim();
        if char_len(name) < MIN_NAME_LEN {
            errors.insert("name", MSG_NAME_SHORT);
        }
        if !is_valid_email(email) {
            errors.insert("email", MSG_EMAIL_INVALID);
        }
        if char_len(&self.password) < MIN_PASSWORD_LEN {
            errors.insert("password", MSG_PASSWORD_SHORT);
        }
        errors.into_result(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<UpdateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        if char_len(name) < MIN_NAME_LEN {
            errors.insert("name", MSG_NAME_SHORT);
        }
        errors.into_result(UpdateUserRequest {
            name: name.to_string(),
        })
    }
}

/// 注册失败时的展示方式：409 归到邮箱字段，其余作为页面级消息
pub fn signup_failure(err: &ApiError) -> (FieldErrors, Option<String>) {
    let mut errors = FieldErrors::new();
    if err.is_conflict() {
        errors.insert("email", MSG_EMAIL_TAKEN);
        (errors, None)
    } else {
        (errors, Some(err.user_message()))
    }
}

/// 书评编辑草稿（新建和编辑共用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub title: String,
    pub detail: String,
    pub review: String,
    pub url: String,
}

impl ReviewDraft {
    /// 四个字段去空白后都非空才允许提交
    pub fn can_submit(&self) -> bool {
        [&self.title, &self.detail, &self.review, &self.url]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// 生成提交用的 payload：去空白、截断到上限、补全 URL 协议
    pub fn to_payload(&self) -> ReviewPayload {
        ReviewPayload {
            title: truncate_chars(self.title.trim(), MAX_TEXT_LEN),
            detail: truncate_chars(self.detail.trim(), MAX_TEXT_LEN),
            review: truncate_chars(self.review.trim(), MAX_TEXT_LEN),
            url: normalize_url(&self.url),
        }
    }
}
