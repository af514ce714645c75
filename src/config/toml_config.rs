use crate::core::assessment::AssessmentRequest;
use crate::utils::error::{Result, WuxingError};
use crate::utils::validation::{
    validate_allowed_values, validate_non_empty_string, validate_path, validate_required_field,
    validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];
const INVALID_INPUT_POLICIES: [&str; 2] = ["skip", "fail"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchInfo,
    pub output: Option<OutputConfig>,
    pub error_handling: Option<ErrorHandlingConfig>,
    #[serde(default)]
    pub subjects: Vec<SubjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub json: Option<String>,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    /// "skip" 或 "fail"
    pub on_invalid_input: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub id: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_time_end: Option<String>,
    #[serde(default)]
    pub region: String,
}

impl SubjectConfig {
    pub fn to_request(&self) -> AssessmentRequest {
        AssessmentRequest {
            birth_date: self.birth_date.clone(),
            birth_time: self.birth_time.clone(),
            birth_time_end: self.birth_time_end.clone(),
            region: self.region.clone(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WuxingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WuxingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| WuxingError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        let output = validate_required_field("output", &self.output)?;
        validate_path("output.output_path", &output.output_path)?;
        if output.formats.is_empty() {
            return Err(WuxingError::ConfigValidationError {
                field: "output.formats".to_string(),
                message: "At least one output format is required".to_string(),
            });
        }
        validate_allowed_values("output.formats", &output.formats, &SUPPORTED_FORMATS)?;

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_invalid_input.as_ref())
        {
            validate_allowed_values(
                "error_handling.on_invalid_input",
                std::slice::from_ref(policy),
                &INVALID_INPUT_POLICIES,
            )?;
        }

        if self.subjects.is_empty() {
            return Err(WuxingError::MissingConfigError {
                field: "subjects".to_string(),
            });
        }
        for subject in &self.subjects {
            validate_non_empty_string("subjects.id", &subject.id)?;
        }
        let ids: Vec<&str> = self.subjects.iter().map(|s| s.id.as_str()).collect();
        validate_unique("subjects.id", &ids)?;

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        self.output.as_ref().map(|o| o.output_path.as_str()).unwrap_or(".")
    }

    pub fn wants_format(&self, format: &str) -> bool {
        self.output
            .as_ref()
            .map(|o| o.formats.iter().any(|f| f == format))
            .unwrap_or(false)
    }

    pub fn json_filename(&self) -> String {
        self.filenames()
            .and_then(|f| f.json.clone())
            .unwrap_or_else(|| "assessments.json".to_string())
    }

    pub fn csv_filename(&self) -> String {
        self.filenames()
            .and_then(|f| f.csv.clone())
            .unwrap_or_else(|| "assessments.csv".to_string())
    }

    fn filenames(&self) -> Option<&FilenameConfig> {
        self.output.as_ref().and_then(|o| o.filenames.as_ref())
    }

    /// 預設遇到無效輸入就停止
    pub fn skip_invalid_input(&self) -> bool {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_invalid_input.as_deref())
            .map(|policy| policy == "skip")
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[batch]
name = "clinic-intake"

[output]
output_path = "./reports"
formats = ["json", "csv"]

[[subjects]]
id = "a"
birth_date = "2000-01-01"
birth_time = "00:30"
region = "北京"

[[subjects]]
id = "b"
birth_date = "1988-08-08"
birth_time = "14:00"
birth_time_end = "15:30"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.batch.name, "clinic-intake");
        assert_eq!(config.output_path(), "./reports");
        assert_eq!(config.subjects.len(), 2);
        assert_eq!(config.subjects[1].region, "");
        assert_eq!(config.subjects[1].birth_time_end.as_deref(), Some("15:30"));
        assert!(config.wants_format("csv"));
        assert_eq!(config.json_filename(), "assessments.json");
        assert!(!config.skip_invalid_input());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WUXING_TEST_OUTPUT_DIR", "/tmp/wuxing-out");

        let toml_content = r#"
[batch]
name = "env"

[output]
output_path = "${WUXING_TEST_OUTPUT_DIR}"
formats = ["json"]

[[subjects]]
id = "a"
birth_date = "2000-01-01"
birth_time = "00:30"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/wuxing-out");

        std::env::remove_var("WUXING_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let bad_format = BASIC.replace(r#"formats = ["json", "csv"]"#, r#"formats = ["xml"]"#);
        let config = TomlConfig::from_toml_str(&bad_format).unwrap();
        assert!(config.validate().is_err());

        let duplicate_ids = BASIC.replace(r#"id = "b""#, r#"id = "a""#);
        let config = TomlConfig::from_toml_str(&duplicate_ids).unwrap();
        assert!(matches!(
            config.validate(),
            Err(WuxingError::InvalidConfigValueError { ref field, .. }) if field == "subjects.id"
        ));

        let bad_policy = format!("{}\n[error_handling]\non_invalid_input = \"retry\"\n", BASIC);
        let config = TomlConfig::from_toml_str(&bad_policy).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_output_section() {
        let toml_content = r#"
[batch]
name = "no-output"

[[subjects]]
id = "a"
birth_date = "2000-01-01"
birth_time = "00:30"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(WuxingError::MissingConfigError { ref field }) if field == "output"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.subjects[0].to_request().region, "北京");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[batch"),
            Err(WuxingError::ConfigValidationError { .. })
        ));
    }
}
