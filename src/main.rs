// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! resmatch - rank resumes against a job description.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resmatch::cli::display::*;
use resmatch::cli::{Cli, Commands, RankArgs, ScoreArgs};
use resmatch::load::{load_document, load_query};
use resmatch::report::{render_text, success_rate, MatchQuality};
use resmatch::{Config, Document, FieldExtractor, MatchReport};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", failure_mark());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Rank(args) => run_rank(cli, args),
        Commands::Score(args) => run_score(cli, args),
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,resmatch=info",
        1 => "info,resmatch=debug",
        2 => "debug,resmatch=trace",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli, threshold: Option<f64>) -> Result<Config> {
    if let Some(t) = threshold {
        if !(0.0..=1.0).contains(&t) {
            bail!("threshold {t} is outside [0, 1]");
        }
    }
    Config::load_with_threshold(cli.config.as_deref(), threshold).context("loading config")
}

// ============================================================================
// RANK
// ============================================================================

fn run_rank(cli: &Cli, args: &RankArgs) -> Result<()> {
    let config = load_config(cli, args.threshold)?;
    let engine = config.engine()?;
    let extractor = config.field_extractor();

    let query = load_query(&args.job)
        .with_context(|| format!("loading job description {}", args.job.display()))?;
    let documents = load_resumes(&args.resumes, &extractor, cli.quiet || args.json)?;
    if documents.is_empty() {
        bail!("no .txt or .md resumes found in {}", args.resumes.display());
    }

    info!(
        job = %query.title,
        resumes = documents.len(),
        threshold = config.threshold,
        "ranking"
    );
    let report = engine.rank(&documents, &query, config.threshold)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.report {
        print!("{}", render_text(&report));
    } else {
        print_ranking(&report, args.limit.unwrap_or(config.top_n));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_resumes(
    dir: &std::path::Path,
    extractor: &FieldExtractor,
    hide_progress: bool,
) -> Result<Vec<Document>> {
    use indicatif::{ProgressBar, ProgressDrawTarget};

    let progress = ProgressBar::new(0);
    if hide_progress {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }
    progress.set_style(resmatch::load::progress_style());
    progress.set_prefix("Loading");
    progress.set_message("resumes...");

    let documents = resmatch::load::load_documents_with_progress(dir, extractor, &progress)
        .with_context(|| format!("reading resumes from {}", dir.display()))?;
    progress.finish_and_clear();
    Ok(documents)
}

#[cfg(not(feature = "parallel"))]
fn load_resumes(
    dir: &std::path::Path,
    extractor: &FieldExtractor,
    _hide_progress: bool,
) -> Result<Vec<Document>> {
    resmatch::load::load_documents(dir, extractor)
        .with_context(|| format!("reading resumes from {}", dir.display()))
}

fn print_ranking(report: &MatchReport, limit: usize) {
    println!();
    double_header();
    title("RESUME MATCHING");
    double_footer();
    println!();

    section_top("JOB");
    row(&format!("  Title      {}", report.query.title));
    if !report.query.keywords.is_empty() {
        row(&format!(
            "  Keywords   {}",
            truncate(&report.query.keywords.join(", "), BOX_WIDTH - 13)
        ));
    }
    row(&format!("  Threshold  {}", report.threshold));
    section_bot();
    println!();

    section_top("SUMMARY");
    row(&format!(
        "  {} resumes │ {} parsed │ {} failed │ {} qualified ({:.1}%)",
        report.total,
        report.valid,
        report.failed,
        report.qualified,
        success_rate(report)
    ));
    if let Some(stats) = &report.statistics {
        row(&format!(
            "  max {} │ mean {} │ median {} │ min {}",
            score_value(stats.max),
            score_value(stats.mean),
            score_value(stats.median),
            score_value(stats.min)
        ));
    }
    section_bot();
    println!();

    section_top("RANKING");
    row(&themed(
        GRAY,
        &[],
        "   #   SCORE   TFIDF  JACCARD  KEYWORD  QUALITY     RESUME",
    ));
    for (i, result) in report.ranked.iter().take(limit).enumerate() {
        let scores = &result.scores;
        row(&format!(
            " {} {:>2} {}  {:>6.3}   {:>6.3}   {:>6.3}  {} {}",
            qualified_mark(result.qualifies(report.threshold)),
            i + 1,
            score_value(scores.composite),
            scores.tfidf,
            scores.jaccard,
            scores.keyword,
            pad_right(
                &quality_label(MatchQuality::from_score(scores.composite)),
                11
            ),
            truncate(&result.document.id, 24)
        ));
    }
    if report.ranked.len() > limit {
        row(&themed(
            GRAY,
            &[],
            &format!("   ... {} more", report.ranked.len() - limit),
        ));
    }
    section_bot();

    if !report.failures.is_empty() {
        println!();
        section_top("FAILED");
        for failure in &report.failures {
            row(&format!(
                " {} {}: {}",
                failure_mark(),
                truncate(&failure.id, 30),
                truncate(&failure.error, BOX_WIDTH - 38)
            ));
        }
        section_bot();
    }
    println!();
}

// ============================================================================
// SCORE
// ============================================================================

fn run_score(cli: &Cli, args: &ScoreArgs) -> Result<()> {
    let config = load_config(cli, None)?;
    let engine = config.engine()?;

    let query = load_query(&args.job)
        .with_context(|| format!("loading job description {}", args.job.display()))?;
    let doc = load_document(&args.resume, &config.field_extractor());
    if !doc.parse_succeeded {
        bail!(
            "{}: {}",
            args.resume.display(),
            doc.error.as_deref().unwrap_or("extraction failed")
        );
    }

    let scores = engine.score(&doc, &query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    let quality = MatchQuality::from_score(scores.composite);
    let weights = engine.weights();

    println!();
    section_top(&truncate(&doc.id, 40));
    row(&format!("  Job        {}", query.title));
    if let Some(email) = &doc.fields.email {
        row(&format!("  Email      {email}"));
    }
    if let Some(phone) = &doc.fields.phone {
        row(&format!("  Phone      {phone}"));
    }
    if !doc.fields.skills.is_empty() {
        row(&format!(
            "  Skills     {}",
            truncate(&doc.fields.skills.join(", "), BOX_WIDTH - 13)
        ));
    }
    row("");
    for (name, value, weight) in [
        ("TF-IDF", scores.tfidf, weights.tfidf),
        ("Jaccard", scores.jaccard, weights.jaccard),
        ("Keyword", scores.keyword, weights.keyword),
    ] {
        row(&format!(
            "  {:<9}  {}  {:>6.3}  × {:.2}",
            name,
            signal_bar(value, 30),
            value,
            weight
        ));
    }
    row("");
    row(&format!(
        "  Composite  {}  {}  {}",
        score_value(scores.composite),
        quality_label(quality),
        qualified_mark(scores.qualifies(config.threshold))
    ));
    for line in wrap(quality.explanation(), BOX_WIDTH - 4) {
        row(&format!("  {line}"));
    }
    section_bot();
    println!();
    Ok(())
}
