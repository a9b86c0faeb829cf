use std::fmt;

#[derive(Debug, Clone)]
pub enum LandingDeskError {
    NotFound(String),
    Validation(String),
    ExternalService(String),
    StorageOperation(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
}

impl LandingDeskError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LandingDeskError::NotFound(_) => "E001",
            LandingDeskError::Validation(_) => "E002",
            LandingDeskError::ExternalService(_) => "E003",
            LandingDeskError::StorageOperation(_) => "E004",
            LandingDeskError::FileOperation(_) => "E005",
            LandingDeskError::Serialization(_) => "E006",
            LandingDeskError::Config(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LandingDeskError::NotFound(_) => "Resource Not Found",
            LandingDeskError::Validation(_) => "Validation Error",
            LandingDeskError::ExternalService(_) => "External Service Error",
            LandingDeskError::StorageOperation(_) => "Storage Operation Error",
            LandingDeskError::FileOperation(_) => "File Operation Error",
            LandingDeskError::Serialization(_) => "Serialization Error",
            LandingDeskError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LandingDeskError::NotFound(msg)
            | LandingDeskError::Validation(msg)
            | LandingDeskError::ExternalService(msg)
            | LandingDeskError::StorageOperation(msg)
            | LandingDeskError::FileOperation(msg)
            | LandingDeskError::Serialization(msg)
            | LandingDeskError::Config(msg) => msg,
        }
    }

    /// Whether the caller can fix the request and retry.
    ///
    /// Lookups of unknown identifiers and rejected input are scoped to the
    /// request; everything else points at the environment.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LandingDeskError::NotFound(_) | LandingDeskError::Validation(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LandingDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LandingDeskError {}

// 便捷的构造函数
impl LandingDeskError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::Validation(msg.into())
    }

    pub fn external_service<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::ExternalService(msg.into())
    }

    pub fn storage_operation<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::StorageOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LandingDeskError::Config(msg.into())
    }
}

impl From<std::io::Error> for LandingDeskError {
    fn from(err: std::io::Error) -> Self {
        LandingDeskError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LandingDeskError {
    fn from(err: serde_json::Error) -> Self {
        LandingDeskError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LandingDeskError {
    fn from(err: toml::ser::Error) -> Self {
        LandingDeskError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LandingDeskError {
    fn from(err: toml::de::Error) -> Self {
        LandingDeskError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LandingDeskError {
    fn from(err: config::ConfigError) -> Self {
        LandingDeskError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LandingDeskError>;
