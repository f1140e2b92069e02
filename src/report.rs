// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable output: quality buckets and the plain-text report.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::types::{MatchReport, RankedResult};

/// Candidates listed in the plain-text report.
pub const REPORT_CANDIDATES: usize = 5;

/// Skills shown per candidate in the plain-text report.
pub const REPORT_SKILLS: usize = 3;

const RULE_WIDTH: usize = 63;

/// Coarse bucket for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Limited,
    Moderate,
    Good,
    Excellent,
}

impl MatchQuality {
    /// `>= 0.8` Excellent, `>= 0.6` Good, `>= 0.4` Moderate, else Limited.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            MatchQuality::Excellent
        } else if score >= 0.6 {
            MatchQuality::Good
        } else if score >= 0.4 {
            MatchQuality::Moderate
        } else {
            MatchQuality::Limited
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchQuality::Excellent => "Excellent",
            MatchQuality::Good => "Good",
            MatchQuality::Moderate => "Moderate",
            MatchQuality::Limited => "Limited",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            MatchQuality::Excellent => {
                "Excellent match with strong alignment to job requirements and relevant experience."
            }
            MatchQuality::Good => {
                "Good match with solid relevant skills and experience. Minor gaps in some areas."
            }
            MatchQuality::Moderate => {
                "Moderate match with some relevant skills. May require additional training or experience."
            }
            MatchQuality::Limited => {
                "Limited match with job requirements. Significant gaps in required skills and experience."
            }
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualified share of the successfully parsed documents, in percent.
pub fn success_rate(report: &MatchReport) -> f64 {
    if report.valid == 0 {
        0.0
    } else {
        report.qualified as f64 / report.valid as f64 * 100.0
    }
}

/// Render `report` as the plain-text summary printed by the CLI.
pub fn render_text(report: &MatchReport) -> String {
    let heavy = "═".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);
    let mut out = String::new();

    // fmt::Write into a String cannot fail
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "{:^width$}", "RESUME MATCHING REPORT", width = RULE_WIDTH);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Job Title: {}", report.query.title);
    let _ = writeln!(out, "Matching Threshold: {}", report.threshold);
    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{light}");
    let _ = writeln!(out, "Total Resumes:        {}", report.total);
    let _ = writeln!(out, "Successfully Parsed:  {}", report.valid);
    let _ = writeln!(out, "Parse Failures:       {}", report.failed);
    let _ = writeln!(out, "Qualified Candidates: {}", report.qualified);
    let _ = writeln!(out, "Success Rate:         {:.1}%", success_rate(report));

    if let Some(stats) = &report.statistics {
        let _ = writeln!(out);
        let _ = writeln!(out, "SCORE STATISTICS");
        let _ = writeln!(out, "{light}");
        let _ = writeln!(out, "Max Score:    {:.3}", stats.max);
        let _ = writeln!(out, "Avg Score:    {:.3}", stats.mean);
        let _ = writeln!(out, "Median Score: {:.3}", stats.median);
        let _ = writeln!(out, "Min Score:    {:.3}", stats.min);
    }

    let top: Vec<&RankedResult> = report
        .qualified_results()
        .take(REPORT_CANDIDATES)
        .collect();
    if !top.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "TOP CANDIDATES");
        let _ = writeln!(out, "{light}");
        for (i, result) in top.iter().enumerate() {
            write_candidate(&mut out, i + 1, result);
        }
    }

    if !report.failures.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "PARSE FAILURES");
        let _ = writeln!(out, "{light}");
        for failure in &report.failures {
            let _ = writeln!(out, "{}: {}", failure.id, failure.error);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{heavy}");
    out
}

fn write_candidate(out: &mut String, position: usize, result: &RankedResult) {
    let fields = &result.document.fields;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{position}. {} (Score: {:.3}, {})",
        result.document.id,
        result.scores.composite,
        MatchQuality::from_score(result.scores.composite)
    );
    let _ = writeln!(out, "   Email: {}", fields.email.as_deref().unwrap_or("N/A"));
    if !fields.skills.is_empty() {
        let shown: Vec<&str> = fields
            .skills
            .iter()
            .take(REPORT_SKILLS)
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "   Skills: {}", shown.join(", "));
    }
}
