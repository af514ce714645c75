use crate::domain::model::Assessment;
use std::fmt::Write;

/// 將查詢結果整理成純文字報告
pub fn render_text(assessment: &Assessment) -> String {
    let mut out = String::new();
    let result = &assessment.result;
    let distribution = &result.distribution;

    let _ = writeln!(out, "五行体质分析");
    let _ = writeln!(
        out,
        "出生: {} {}{}  地区: {}",
        assessment.birth_date,
        assessment.birth_time,
        assessment
            .birth_time_end
            .as_ref()
            .map(|end| format!("-{}", end))
            .unwrap_or_default(),
        if assessment.region.is_empty() { "-" } else { assessment.region.as_str() }
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "五行能量分布");
    for (kind, score) in distribution.iter() {
        let _ = writeln!(
            out,
            "  {} {:>2}  {:>5.1}%  {}",
            kind.chinese_name(),
            score,
            distribution.share_percent(kind),
            "█".repeat(score as usize / 2)
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "体质结论");
    let _ = writeln!(out, "  {}", result.conclusion.element_condition);
    let _ = writeln!(out, "  {}", result.conclusion.organ_condition);
    let _ = writeln!(out, "  {}", result.conclusion.symptoms);
    let _ = writeln!(out);

    write_section(&mut out, "优势", &result.strengths);
    write_section(&mut out, "不足", &result.weaknesses);
    write_section(&mut out, "饮食建议", &assessment.recommendations.diet);
    write_section(&mut out, "作息建议", &assessment.recommendations.sleep);
    write_section(&mut out, "运动建议", &assessment.recommendations.exercise);

    out
}

fn write_section(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{}", title);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out);
}
