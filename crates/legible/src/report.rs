//! Report rendering for terminal and machine consumers

use clap::ValueEnum;
use colored::Colorize;

use crate::grammar::format_suggestions;
use crate::proofread::{Issue, ProofreadReport};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
  Compact,
}

pub fn format_report(report: &ProofreadReport, format: OutputFormat) -> String {
  match format {
    OutputFormat::Pretty => format_pretty(report),
    OutputFormat::Json => format_json(report),
    OutputFormat::Compact => format_compact(report),
  }
}

fn format_pretty(report: &ProofreadReport) -> String {
  let mut output = String::new();

  if let Some(issues) = &report.issues {
    if issues.is_empty() {
      output.push_str(&format!("{}\n", "No grammar or spelling issues found!".bright_green().bold()));
    }
    for issue in issues {
      output.push_str(&format_issue(issue));
      output.push('\n');
    }
    output.push('\n');
  }

  let readability = &report.readability;
  output.push_str(&format!("{}\n", "Readability Analysis".bright_white().bold()));
  output.push_str(&format!("{} {}\n", "Score:".bold(), readability.display_score().bright_cyan()));
  output.push_str(&format!("{} {}\n", "Comments:".bold(), readability.comment));

  output
}

fn format_issue(issue: &Issue) -> String {
  let context = &issue.context;
  let highlighted = format!(
    "{}{}{}",
    context.before,
    context.issue.bright_red().bold().underline(),
    context.after
  );

  format!(
    "{} {}\n{} {}\n{} {}\n",
    "Issue:".bright_yellow().bold(),
    issue.message,
    "Suggestion:".bold(),
    format_suggestions(&issue.suggestions),
    "Context:".bold(),
    highlighted.trim_end()
  )
}

fn format_json(report: &ProofreadReport) -> String {
  let mut output = serde_json::json!({
    "readability": report.readability,
  });

  if let Some(issues) = &report.issues {
    output["issues"] = serde_json::json!(issues);
    output["summary"] = serde_json::json!({ "total_issues": issues.len() });
  }

  serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

fn format_compact(report: &ProofreadReport) -> String {
  let mut lines: Vec<String> = report
    .issues
    .iter()
    .flatten()
    .map(|issue| {
      format!(
        "{}:{} {} [{}]",
        issue.offset,
        issue.length,
        issue.message,
        issue.suggestions.join(", ")
      )
    })
    .collect();

  lines.push(format!(
    "readability {} {}",
    report.readability.display_score(),
    report.readability.comment
  ));

  lines.join("\n")
}

/// 1 when `strict` and issues were found, otherwise 0
pub fn get_exit_code(report: &ProofreadReport, strict: bool) -> i32 {
  if strict && report.issue_count() > 0 {
    1
  } else {
    0
  }
}
