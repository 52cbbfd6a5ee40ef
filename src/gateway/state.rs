//! Gateway 应用状态

use std::sync::Arc;

use crate::genai::GenerateText;

/// Gateway 应用状态
///
/// 生成客户端以 trait object 注入，测试中可替换
#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn GenerateText>,
    model: String,
}

impl AppState {
    pub fn new(generator: Arc<dyn GenerateText>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn generator(&self) -> &dyn GenerateText {
        self.generator.as_ref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
