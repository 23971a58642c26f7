use super::OutputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub mirror: bool,
    pub color_adjust: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            mirror: true,
            color_adjust: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub url: String,
    pub mode: OutputMode,
    pub target_lang: String,
    pub options: TransformOptions,
}

impl PipelineRequest {
    pub fn new(url: impl Into<String>, mode: OutputMode, target_lang: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode,
            target_lang: target_lang.into(),
            options: TransformOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }
}
