//! Generative Language API 抽象层
//!
//! 定义文本生成客户端的统一接口、请求/响应的 wire 类型和错误分类

pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 调用生成接口时的失败类别
///
/// 每个变体对应一种确定的 HTTP 映射，由 gateway 层完成转换
#[derive(Debug, Error)]
pub enum GenerateError {
    /// API key 未配置，未发起任何网络调用
    #[error("API key is not configured")]
    MissingApiKey,

    /// 传输层失败（DNS、连接、IO）
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// 上游返回非 2xx，status 和 body 原样保留
    #[error("upstream error {status}")]
    Upstream {
        status: http::StatusCode,
        body: String,
    },

    /// 2xx 响应体无法解码为 JSON
    #[error("failed to decode upstream response: {0}")]
    Decode(reqwest::Error),
}

/// 发送给生成接口的请求体
///
/// 恰好包含一个 user 轮次、一个文本 part
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

impl GenerateContentRequest {
    /// 构造单轮 user 请求
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// 解码后的生成接口响应
///
/// 每一层都可能缺失；缺失属于正常的"无可用文本"结果，而不是解码错误
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// 提取 `candidates[0].content.parts[0].text`
    ///
    /// 任一层缺失返回 `None`；命中时原样返回，不做任何修剪或清理
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// 文本生成客户端的统一接口
///
/// gateway 持有 trait object，测试中可替换为记录调用的 mock
#[async_trait]
pub trait GenerateText: Send + Sync {
    /// 发送一条 prompt，返回解码后的响应
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, GenerateError>;
}
