use crate::core::analyzer::ConstitutionAnalyzer;
use crate::core::deriver::ElementDeriver;
use crate::core::recommendation::RecommendationMapper;
use crate::domain::model::{Assessment, ConstitutionResult, RecommendationSet};
use crate::domain::regions::is_known_region;
use crate::utils::error::{Result, WuxingError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        WuxingError::invalid_input("birth_date", value, format!("expected YYYY-MM-DD ({})", e))
    })
}

/// 解析 `HH:MM`，範圍 00:00 到 23:59
pub fn parse_birth_time(value: &str) -> Result<NaiveTime> {
    parse_time_field("birth_time", value)
}

fn parse_time_field(field: &str, value: &str) -> Result<NaiveTime> {
    // chrono 的 %H:%M 也接受單位數欄位，先確認是兩位數
    let re = regex::Regex::new(r"^\d{2}:\d{2}$").map_err(|e| WuxingError::ConfigError {
        message: format!("invalid time pattern: {}", e),
    })?;
    let trimmed = value.trim();
    if !re.is_match(trimmed) {
        return Err(WuxingError::invalid_input(field, value, "expected HH:MM"));
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| {
        WuxingError::invalid_input(
            field,
            value,
            format!("expected HH:MM within 00:00-23:59 ({})", e),
        )
    })
}

/// 由出生日期、時間與地區推算五行體質。地區目前不影響計算。
pub fn calculate_constitution(
    birth_date: &str,
    birth_time: &str,
    region: &str,
) -> Result<ConstitutionResult> {
    let date = parse_birth_date(birth_date)?;
    let time = parse_birth_time(birth_time)?;

    if !is_known_region(region) {
        tracing::debug!("Region '{}' is not in the known region list", region);
    }

    let distribution = ElementDeriver::new().derive(date, time);
    Ok(ConstitutionAnalyzer::new().analyze(distribution))
}

pub fn generate_recommendations(result: &ConstitutionResult) -> RecommendationSet {
    RecommendationMapper::new().generate(result)
}

/// 查詢表單送出的資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub birth_date: String,
    pub birth_time: String,
    #[serde(default)]
    pub birth_time_end: Option<String>,
    #[serde(default)]
    pub region: String,
}

impl AssessmentRequest {
    pub fn new(birth_date: &str, birth_time: &str, region: &str) -> Self {
        Self {
            birth_date: birth_date.to_string(),
            birth_time: birth_time.to_string(),
            birth_time_end: None,
            region: region.to_string(),
        }
    }

    pub fn with_time_end(mut self, birth_time_end: &str) -> Self {
        self.birth_time_end = Some(birth_time_end.to_string());
        self
    }

    /// 檢查出生時段：結束時間必須晚於開始時間
    pub fn validate(&self) -> Result<()> {
        parse_birth_date(&self.birth_date)?;
        let start = parse_birth_time(&self.birth_time)?;

        if let Some(end_value) = &self.birth_time_end {
            let end = parse_time_field("birth_time_end", end_value)?;
            if end <= start {
                return Err(WuxingError::invalid_input(
                    "birth_time_end",
                    end_value,
                    format!("must be later than birth_time {}", self.birth_time),
                ));
            }
        }

        Ok(())
    }

    pub fn assess(&self) -> Result<Assessment> {
        self.validate()?;

        let result = calculate_constitution(&self.birth_date, &self.birth_time, &self.region)?;
        let recommendations = generate_recommendations(&result);

        tracing::info!(
            "Assessed {} {}: strongest={}, weakest={}",
            self.birth_date,
            self.birth_time,
            result.distribution.strongest(),
            result.distribution.weakest()
        );

        Ok(Assessment {
            birth_date: self.birth_date.clone(),
            birth_time: self.birth_time.clone(),
            birth_time_end: self.birth_time_end.clone(),
            region: self.region.clone(),
            result,
            recommendations,
        })
    }
}
