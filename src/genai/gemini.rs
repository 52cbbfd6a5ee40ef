//! Gemini (Generative Language API) 客户端
//!
//! 每次调用发起一个 `generateContent` POST 请求，不做重试，不设超时

use async_trait::async_trait;
use reqwest::Client;
use std::sync::OnceLock;

use crate::genai::{GenerateContentRequest, GenerateContentResponse, GenerateError, GenerateText};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// 共享的 HTTP 客户端
static API_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_api_client() -> &'static Client {
    API_CLIENT.get_or_init(|| Client::builder().build().expect("Failed to create Gemini API client"))
}

/// Gemini 客户端
///
/// API key 和 model 通过构造函数注入，不在调用时读取环境变量
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// 覆盖 API base url（测试用）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        )
    }
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, GenerateError> {
        // key 缺失时直接失败，不发起网络调用
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;

        let payload = GenerateContentRequest::single_turn(prompt);

        let response = get_api_client()
            .post(self.endpoint_url(api_key))
            .json(&payload)
            .send()
            .await
            .map_err(GenerateError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // 保留上游的诊断细节，由 gateway 层决定透传
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, model = %self.model, "Gemini API error");
            return Err(GenerateError::Upstream { status, body });
        }

        response.json().await.map_err(GenerateError::Decode)
    }
}
