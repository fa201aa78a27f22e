//! Console and JSON rendering of pipeline results for the CLI.

use crate::error::Result;
use crate::extraction::KeywordSet;
use crate::pipeline::PipelineResult;
use colored::Colorize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub fn parse_output_format(value: &str) -> std::result::Result<OutputFormat, String> {
    match value.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown output format '{}', expected console or json", other)),
    }
}

pub fn format_result(result: &PipelineResult, format: OutputFormat, use_colors: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Console => format_console(result, use_colors),
    }
}

fn format_console(result: &PipelineResult, use_colors: bool) -> Result<String> {
    if !use_colors {
        colored::control::set_override(false);
    }
    let mut out = String::new();

    if result.success {
        writeln!(out, "{}", "Resume tailoring complete".green().bold()).ok();
    } else {
        let reason = result.failure_reason.as_deref().unwrap_or("unknown");
        writeln!(out, "{} {}", "Tailoring failed:".red().bold(), reason).ok();
        return Ok(out);
    }

    writeln!(out).ok();
    writeln!(out, "{}", "Keywords".bold()).ok();
    writeln!(out, "  total: {}", result.keywords.total).ok();
    writeln!(out, "  high:   {}", tier_line(&result.keywords.high_priority)).ok();
    writeln!(out, "  medium: {}", tier_line(&result.keywords.medium_priority)).ok();
    writeln!(out, "  low:    {}", tier_line(&result.keywords.low_priority)).ok();

    writeln!(out).ok();
    writeln!(out, "{}", "Coverage".bold()).ok();
    let s = &result.tailoring_stats;
    writeln!(
        out,
        "  already present: {}  injected: {}  unplaced: {}",
        s.already_present, s.added, s.missing
    )
    .ok();

    writeln!(out).ok();
    writeln!(out, "{}", "Timings".bold()).ok();
    let t = &result.timings;
    writeln!(
        out,
        "  extraction {}ms, tailoring {}ms, distribution {}ms, total {}ms",
        t.extraction_ms, t.tailoring_ms, t.distribution_ms, t.total_ms
    )
    .ok();
    let budget = if t.within_target {
        "within latency target".green()
    } else {
        "over latency target".yellow()
    };
    writeln!(out, "  {}", budget).ok();

    Ok(out)
}

pub fn format_keywords(keywords: &KeywordSet) -> String {
    let mut out = String::new();
    writeln!(out, "{} keywords extracted", keywords.total).ok();
    writeln!(out, "high priority:   {}", tier_line(&keywords.high_priority)).ok();
    writeln!(out, "medium priority: {}", tier_line(&keywords.medium_priority)).ok();
    writeln!(out, "low priority:    {}", tier_line(&keywords.low_priority)).ok();
    out
}

fn tier_line(tier: &[String]) -> String {
    if tier.is_empty() {
        "(none)".to_string()
    } else {
        tier.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_keyword_rendering() {
        let keywords = KeywordSet {
            all: vec!["python".to_string(), "aws".to_string()],
            high_priority: vec!["python".to_string()],
            medium_priority: vec!["aws".to_string()],
            low_priority: Vec::new(),
            work_experience: vec!["python".to_string(), "aws".to_string()],
            total: 2,
        };
        let rendered = format_keywords(&keywords);
        assert!(rendered.contains("2 keywords"));
        assert!(rendered.contains("python"));
        assert!(rendered.contains("(none)"));
    }
}
