//! HTTP 请求处理器
//!
//! 两个生成端点共享同一条管线：构造 prompt → 调用生成接口 → 提取文本 →
//! 映射为 HTTP 响应。端点之间只有 prompt、成功字段名和提取失败文案不同。

pub mod health;
pub mod simplify;
pub mod wisdom;

pub use health::handle_health;
pub use simplify::handle_simplify_word;
pub use wisdom::handle_generate_wisdom;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::genai::{GenerateError, GenerateText};

/// 内部错误的通用文案，不向调用方泄露细节
const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// API key 未配置时的文案，提示运维设置变量后重新部署
const MISSING_KEY_MESSAGE: &str = "Server configuration error: The GOOGLE_AI_API_KEY was not \
     found. Please ensure it is set in the server environment and redeploy.";

/// 统一的错误响应体 `{ "error": message }`
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 共享管线：调用生成接口并整形响应
///
/// 成功时返回 200 和 `{ <field>: text }`；提取失败返回 500 和
/// "Failed to parse <parse_label> from the API response."
async fn run_pipeline(
    generator: &dyn GenerateText,
    prompt: &str,
    field: &'static str,
    parse_label: &'static str,
) -> Response {
    let result = match generator.generate(prompt).await {
        Ok(result) => result,
        Err(err) => return generate_error_response(err),
    };

    match result.first_text() {
        Some(text) => {
            let mut payload = serde_json::Map::new();
            payload.insert(field.to_string(), Value::String(text.to_string()));
            Json(Value::Object(payload)).into_response()
        }
        None => {
            tracing::error!(field, "no usable text in upstream response");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to parse {parse_label} from the API response."),
            )
        }
    }
}

/// 将 `GenerateError` 映射为 HTTP 响应
fn generate_error_response(err: GenerateError) -> Response {
    match err {
        GenerateError::MissingApiKey => {
            tracing::error!("GOOGLE_AI_API_KEY is missing from the environment");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE)
        }
        // 上游错误原样透传，保留诊断细节
        GenerateError::Upstream { status, body } => (status, body).into_response(),
        GenerateError::Transport(err) => {
            tracing::error!(error = %err, "transport error calling the Gemini API");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
        GenerateError::Decode(err) => {
            tracing::error!(error = %err, "failed to decode the Gemini API response");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}
