//! 应用配置
//!
//! CSR 产物在浏览器中没有进程环境变量，配置项在编译期通过 `option_env!` 注入，
//! 未设置时使用下面的默认值。

use std::str::FromStr;

use crate::api::BookReviewApi;

// =========================================================
// 默认值 (Defaults)
// =========================================================

const DEFAULT_API_BASE: &str = "https://railway.bookreview.techtrain.dev";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
const DEFAULT_NOTICE_MS: u32 = 3000;

/// 运行时配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST API 根地址（不含末尾 `/`）
    pub api_base: String,
    pub log_level: log::Level,
    /// 提示条自动消失的时间
    pub notice_ms: u32,
}

impl AppConfig {
    /// 读取编译期环境变量 `BOOKREVIEW_*`
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BOOKREVIEW_API_BASE"),
            option_env!("BOOKREVIEW_LOG_LEVEL"),
            option_env!("BOOKREVIEW_NOTICE_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>, notice_ms: Option<&str>) -> Self {
        Self {
            api_base: api_base
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),

            log_level: log_level
                .and_then(|v| log::Level::from_str(v.trim()).ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),

            notice_ms: notice_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_NOTICE_MS),
        }
    }

    pub fn api(&self) -> BookReviewApi {
        BookReviewApi::new(&self.api_base)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.notice_ms, 3000);
    }

    #[test]
    fn overrides_are_parsed_and_base_is_trimmed() {
        let config = AppConfig::from_values(
            Some("http://localhost:8080/"),
            Some("debug"),
            Some("1500"),
        );
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.notice_ms, 1500);
        assert_eq!(config.api().base_url, "http://localhost:8080");
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = AppConfig::from_values(Some("  "), Some("loud"), Some("soon"));
        assert_eq!(config, AppConfig::default());
    }
}
