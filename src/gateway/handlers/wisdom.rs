//! Generate Wisdom 端点

use axum::extract::State;
use axum::response::Response;

use super::run_pipeline;
use crate::gateway::state::AppState;

/// 固定的 wisdom prompt，不包含任何用户输入
const WISDOM_PROMPT: &str = "Generate a short, actionable 'success nugget' (2-3 sentences) \
     for an aspiring billionaire. The tone should be direct and motivating, focusing on \
     principles of wealth creation, extreme discipline, or strategic thinking. Style of \
     Naval Ravikant or Morgan Housel.";

/// ANY /api/generate-wisdom
///
/// 任何方法均可触发，忽略请求体
pub async fn handle_generate_wisdom(State(state): State<AppState>) -> Response {
    run_pipeline(state.generator(), WISDOM_PROMPT, "wisdom", "wisdom").await
}
