#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::assessment::AssessmentRequest;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "wuxing-qingyang")]
#[command(about = "Five-elements constitution assessment from birth date, time and region")]
pub struct CliConfig {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub birth_date: String,

    /// Birth time slot start, HH:MM
    #[arg(long)]
    pub birth_time: String,

    /// Birth time slot end, HH:MM (must be later than --birth-time)
    #[arg(long)]
    pub birth_time_end: Option<String>,

    #[arg(long, default_value = "")]
    pub region: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Directory to save assessment.json into
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_request(&self) -> AssessmentRequest {
        AssessmentRequest {
            birth_date: self.birth_date.clone(),
            birth_time: self.birth_time.clone(),
            birth_time_end: self.birth_time_end.clone(),
            region: self.region.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        self.to_request().validate()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::try_parse_from([
            "wuxing-qingyang",
            "--birth-date",
            "2000-01-01",
            "--birth-time",
            "00:30",
            "--region",
            "北京",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.to_request().region, "北京");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_validation_rejects_bad_time() {
        let config = CliConfig::try_parse_from([
            "wuxing-qingyang",
            "--birth-date",
            "2000-01-01",
            "--birth-time",
            "25:99",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_err());
    }
}
