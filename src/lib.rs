//! Sibyl - Gemini 文本生成中继服务
//!
//! 一个轻量级的 API 网关，把前端请求转发到 Google Generative Language API
//! 并把响应整形成前端需要的单字段 JSON。
//!
//! # 功能特性
//!
//! - 两个生成端点：`/api/generate-wisdom` 和 `/api/simplify-word`
//! - 统一的 validate → prompt → 调用 → 提取 管线，按端点参数化
//! - 上游非 2xx 响应原样透传（status + body）
//! - API key 缺失时 fail-fast，不发起网络调用
//!
//! # 命令行接口
//!
//! - `serve`: 启动 API 服务器
//! - `test`: 向本地服务器发送测试请求

pub mod commands;
pub mod config;
pub mod gateway;
pub mod genai;
