//! Simplify Word 端点

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::{error_response, run_pipeline, INTERNAL_ERROR_MESSAGE};
use crate::gateway::state::AppState;

const MISSING_WORD_MESSAGE: &str = "Please provide a word to simplify.";

/// simplify 请求体
#[derive(Deserialize)]
struct SimplifyRequest {
    #[serde(default)]
    word: Option<String>,
}

fn simplify_prompt(word: &str) -> String {
    format!(
        "Explain the word \"{word}\" in very simple terms for someone whose third language \
         is English. Provide a short, easy-to-understand definition."
    )
}

/// ANY /api/simplify-word
///
/// 只接受 POST；`word` 缺失或去除空白后为空时返回 400
pub async fn handle_simplify_word(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    // 请求体解析失败按内部错误处理，与既有前端的约定保持一致
    let request: SimplifyRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(error = %err, "invalid request body");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
        }
    };

    let word = match request
        .word
        .as_deref()
        .map(str::trim)
        .filter(|w| !w.is_empty())
    {
        Some(word) => word,
        None => return error_response(StatusCode::BAD_REQUEST, MISSING_WORD_MESSAGE),
    };

    run_pipeline(
        state.generator(),
        &simplify_prompt(word),
        "definition",
        "the definition",
    )
    .await
}
