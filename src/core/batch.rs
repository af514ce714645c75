use crate::config::toml_config::TomlConfig;
use crate::domain::model::{Assessment, ElementKind};
use crate::domain::ports::Storage;
use crate::utils::error::{ErrorCategory, Result, WuxingError};
use serde::Serialize;

const CSV_HEADER: [&str; 12] = [
    "id",
    "region",
    "birth_date",
    "birth_time",
    "wood",
    "fire",
    "earth",
    "metal",
    "water",
    "strongest",
    "weakest",
    "conclusion",
];

/// CSV 的一列，欄位順序需與 CSV_HEADER 一致
#[derive(Debug, Serialize)]
struct AssessmentRow<'a> {
    id: &'a str,
    region: &'a str,
    birth_date: &'a str,
    birth_time: &'a str,
    wood: i32,
    fire: i32,
    earth: i32,
    metal: i32,
    water: i32,
    strongest: &'static str,
    weakest: &'static str,
    conclusion: String,
}

#[derive(Debug, Serialize)]
struct SubjectAssessment<'a> {
    id: &'a str,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: Vec<String>,
    pub written: Vec<String>,
}

pub struct BatchRunner<S: Storage> {
    storage: S,
    config: TomlConfig,
}

impl<S: Storage> BatchRunner<S> {
    pub fn new(storage: S, config: TomlConfig) -> Self {
        Self { storage, config }
    }

    pub fn assess_all(&self) -> Result<(Vec<(String, Assessment)>, Vec<String>)> {
        let mut assessed = Vec::with_capacity(self.config.subjects.len());
        let mut skipped = Vec::new();

        for subject in &self.config.subjects {
            match subject.to_request().assess() {
                Ok(assessment) => assessed.push((subject.id.clone(), assessment)),
                Err(e)
                    if e.category() == ErrorCategory::Input && self.config.skip_invalid_input() =>
                {
                    tracing::warn!("⚠️ Skipping subject '{}': {}", subject.id, e);
                    skipped.push(subject.id.clone());
                }
                Err(e) => {
                    tracing::error!("❌ Subject '{}' failed: {}", subject.id, e);
                    return Err(e);
                }
            }
        }

        Ok((assessed, skipped))
    }

    pub fn run(&self) -> Result<BatchSummary> {
        tracing::info!(
            "🚀 Running batch '{}' with {} subjects",
            self.config.batch.name,
            self.config.subjects.len()
        );

        let (assessed, skipped) = self.assess_all()?;
        let mut written = Vec::new();

        if self.config.wants_format("json") {
            let filename = self.config.json_filename();
            let records: Vec<SubjectAssessment> = assessed
                .iter()
                .map(|(id, assessment)| SubjectAssessment { id, assessment })
                .collect();
            let data = serde_json::to_vec_pretty(&records)?;
            self.storage.write_file(&filename, &data)?;
            tracing::info!("📁 Wrote {}", filename);
            written.push(filename);
        }

        if self.config.wants_format("csv") {
            let filename = self.config.csv_filename();
            let data = to_csv(&assessed)?;
            self.storage.write_file(&filename, &data)?;
            tracing::info!("📁 Wrote {}", filename);
            written.push(filename);
        }

        tracing::info!(
            "✅ Batch finished: {} assessed, {} skipped",
            assessed.len(),
            skipped.len()
        );

        Ok(BatchSummary {
            succeeded: assessed.len(),
            skipped,
            written,
        })
    }
}

fn to_csv(assessed: &[(String, Assessment)]) -> Result<Vec<u8>> {
    // 表頭自行寫入，全部略過時仍輸出欄位名稱
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (id, assessment) in assessed {
        let distribution = &assessment.result.distribution;
        writer.serialize(AssessmentRow {
            id,
            region: &assessment.region,
            birth_date: &assessment.birth_date,
            birth_time: &assessment.birth_time,
            wood: distribution.get(ElementKind::Wood),
            fire: distribution.get(ElementKind::Fire),
            earth: distribution.get(ElementKind::Earth),
            metal: distribution.get(ElementKind::Metal),
            water: distribution.get(ElementKind::Water),
            strongest: distribution.strongest().as_str(),
            weakest: distribution.weakest().as_str(),
            conclusion: assessment.result.conclusion.to_string(),
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| WuxingError::IoError(e.into_error()))
}
