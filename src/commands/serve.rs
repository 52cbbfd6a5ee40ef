//! Serve 命令 - 启动 API 服务器

use anyhow::Result;

use crate::config::Config;
use crate::gateway;

/// 执行服务器启动命令
///
/// 初始化路由和中间件，启动服务器并等待关闭信号
/// （支持 Ctrl+C / SIGTERM 优雅关闭）
pub async fn serve_command(config: Config) -> Result<()> {
    gateway::serve(config).await
}
