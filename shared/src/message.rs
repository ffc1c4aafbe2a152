//! 服务器错误消息提取
//!
//! 接口失败时返回的 body 形状并不统一，这里按固定优先级挑出一条给用户看的消息。
//! 调用方只读取一次 body 文本；读取失败时传入 `None`，直接回落到状态行。

use serde_json::Value;

#[cfg(test)]
mod tests;

/// 按优先级依次尝试的单值字段
const MESSAGE_FIELDS: [&str; 3] = ["ErrorMessageJP", "message", "ErrorMessageEN"];

/// `"HTTP <status> <statusText>"` 形式的兜底消息
pub fn status_fallback(status: u16, status_text: &str) -> String {
    format!("HTTP {} {}", status, status_text)
}

/// 从失败响应中挑选一条可读的错误消息
///
/// 优先级：`ErrorMessageJP` → `message` → `ErrorMessageEN` → `errors` 数组 →
/// `fieldErrors` 映射 → body 本身是字符串 → 状态行。
pub fn pick_server_message(status: u16, status_text: &str, body: Option<&str>) -> String {
    let msg = body
        .and_then(|text| serde_json::from_str::<Value>(text).ok())
        .and_then(|data| message_from_body(&data))
        .unwrap_or_else(|| status_fallback(status, status_text));

    log::debug!("pick_server_message: {}", msg);
    msg
}

fn message_from_body(data: &Value) -> Option<String> {
    for field in MESSAGE_FIELDS {
        if let Some(value) = data.get(field).filter(|v| is_truthy(v)) {
            return Some(value_text(value));
        }
    }

    let listed = data
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| joined(errors.iter().map(error_entry_text)));
    if listed.is_some() {
        return listed;
    }

    let fields = match data.get("fieldErrors") {
        Some(Value::Object(fields)) => joined(fields.values().map(value_text)),
        Some(Value::Array(values)) => joined(values.iter().map(value_text)),
        _ => None,
    };
    if fields.is_some() {
        return fields;
    }

    data.as_str().filter(|s| !s.trim().is_empty()).map(str::to_owned)
}

/// 按行拼接；全部为空时视为没有消息，继续尝试下一条规则
fn joined(lines: impl Iterator<Item = String>) -> Option<String> {
    let text = lines.collect::<Vec<_>>().join("\n");
    if text.trim().is_empty() { None } else { Some(text) }
}

/// 数组中的单条错误：优先取其 `message` 字段，否则取其字符串形式
fn error_entry_text(entry: &Value) -> String {
    match entry.get("message") {
        Some(message) if !message.is_null() => value_text(message),
        _ => value_text(entry),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
