use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use wiring_errors::{WiringError, WiringResult};

/// Configuration source type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceType {
    Toml,
    Json,
}

impl ConfigSourceType {
    fn file_format(self) -> FileFormat {
        match self {
            ConfigSourceType::Toml => FileFormat::Toml,
            ConfigSourceType::Json => FileFormat::Json,
        }
    }

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> WiringResult<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        match extension {
            "toml" => Ok(ConfigSourceType::Toml),
            "json" => Ok(ConfigSourceType::Json),
            _ => Err(WiringError::Configuration(format!(
                "Unsupported file format: {extension}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
enum Source {
    Inline {
        content: String,
        format: ConfigSourceType,
    },
    File {
        path: PathBuf,
        format: ConfigSourceType,
    },
}

/// Builds the application configuration value that is registered under
/// [`CONFIG_SERVICE`](crate::container::CONFIG_SERVICE).
///
/// Later sources override earlier ones key by key.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    sources: Vec<Source>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_str<S: Into<String>>(mut self, content: S, format: ConfigSourceType) -> Self {
        self.sources.push(Source::Inline {
            content: content.into(),
            format,
        });
        self
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> WiringResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WiringError::Configuration(format!(
                "配置文件不存在: {}",
                path.display()
            )));
        }
        let format = ConfigSourceType::from_path(path)?;
        self.sources.push(Source::File {
            path: path.to_path_buf(),
            format,
        });
        Ok(self)
    }

    pub fn load(&self) -> WiringResult<serde_json::Value> {
        let mut builder = Config::builder();
        for source in &self.sources {
            builder = match source {
                Source::Inline { content, format } => {
                    builder.add_source(File::from_str(content, format.file_format()))
                }
                Source::File { path, format } => builder.add_source(
                    File::from(path.as_path())
                        .format(format.file_format())
                        .required(true),
                ),
            };
        }

        builder
            .build()
            .map_err(|e| WiringError::Configuration(format!("加载配置失败: {e}")))?
            .try_deserialize::<serde_json::Value>()
            .map_err(|e| WiringError::Configuration(format!("解析配置失败: {e}")))
    }
}
