//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - Google AI API key
//! - 使用的 Gemini 模型 id

use anyhow::{Context, Result};

use crate::genai::gemini::DEFAULT_MODEL;

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// Google AI API key
    ///
    /// 启动时缺失不报错；请求到达时由客户端返回配置错误
    pub api_key: Option<String>,
    /// Gemini 模型 id
    pub model: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `SIBYL_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `SIBYL_PORT`: 服务器监听端口（默认: 8080）
    /// - `GOOGLE_AI_API_KEY`: Google AI API key（缺失时生成端点返回 500）
    /// - `SIBYL_MODEL`: Gemini 模型 id（默认: gemini-2.5-flash-preview-05-20）
    ///
    /// # 错误
    ///
    /// - 如果 `SIBYL_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SIBYL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("SIBYL_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("SIBYL_PORT must be a valid port number")?;

        let api_key = std::env::var("GOOGLE_AI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let model = std::env::var("SIBYL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            host,
            port,
            api_key,
            model,
        })
    }
}
