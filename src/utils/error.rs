use thiserror::Error;

#[derive(Error, Debug)]
pub enum WuxingError {
    /// 輸入的出生日期或時間無法解析
    #[error("Invalid input for '{field}' ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WuxingError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        WuxingError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            WuxingError::InvalidInput { .. } => ErrorCategory::Input,
            WuxingError::IoError(_) => ErrorCategory::Io,
            WuxingError::CsvError(_) | WuxingError::SerializationError(_) => {
                ErrorCategory::Serialization
            }
            WuxingError::ConfigError { .. }
            | WuxingError::ConfigValidationError { .. }
            | WuxingError::InvalidConfigValueError { .. }
            | WuxingError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WuxingError::InvalidInput { field, .. } => match field.as_str() {
                "birth_date" => "出生日期請使用 YYYY-MM-DD 格式，例如 1990-05-17".to_string(),
                "birth_time" | "birth_time_end" => {
                    "出生時間請使用 HH:MM 格式，範圍 00:00 到 23:59".to_string()
                }
                _ => format!("請檢查輸入欄位 '{}'", field),
            },
            WuxingError::IoError(_) => "請確認輸出目錄存在且具有寫入權限".to_string(),
            WuxingError::CsvError(_) | WuxingError::SerializationError(_) => {
                "輸出序列化失敗，請改用其他輸出格式後重試".to_string()
            }
            WuxingError::MissingConfigError { field } => {
                format!("請在配置檔中補上 '{}'", field)
            }
            WuxingError::ConfigError { .. }
            | WuxingError::ConfigValidationError { .. }
            | WuxingError::InvalidConfigValueError { .. } => {
                "請檢查配置檔格式與欄位值是否正確".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WuxingError::InvalidInput { field, value, reason } => {
                format!("輸入資料有誤：{} = '{}'（{}）", field, value, reason)
            }
            WuxingError::IoError(e) => format!("檔案讀寫失敗：{}", e),
            WuxingError::CsvError(e) => format!("CSV 輸出失敗：{}", e),
            WuxingError::SerializationError(e) => format!("JSON 輸出失敗：{}", e),
            WuxingError::ConfigError { message } => format!("配置錯誤：{}", message),
            WuxingError::ConfigValidationError { field, message } => {
                format!("配置欄位 {} 驗證失敗：{}", field, message)
            }
            WuxingError::InvalidConfigValueError { field, value, reason } => {
                format!("配置欄位 {} 的值 '{}' 無效：{}", field, value, reason)
            }
            WuxingError::MissingConfigError { field } => format!("缺少必要配置：{}", field),
        }
    }

    /// 根據嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, WuxingError>;
