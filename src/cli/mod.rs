// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the resmatch command-line interface.
//!
//! Two subcommands: `rank` scores a directory of resumes against one job
//! description and prints the ranking, and `score` explains the breakdown for
//! a single resume. Settings come from the config file; the flags here only
//! override them for one run.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "resmatch",
    about = "Rank resumes against a job description by lexical similarity",
    version
)]
pub struct Cli {
    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// No log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (defaults to $RESMATCH_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank every resume in a directory against a job description
    Rank(RankArgs),

    /// Show the score breakdown for one resume
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Directory of .txt / .md resumes
    #[arg(short, long)]
    pub resumes: PathBuf,

    /// Job description (.json with title/description/keywords, or plain text)
    #[arg(short, long)]
    pub job: PathBuf,

    /// Minimum composite score to qualify, in [0, 1]
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Number of candidates to list (defaults to `top_n` from config)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print the full report as JSON
    #[arg(long, conflicts_with = "report")]
    pub json: bool,

    /// Print the plain-text summary report
    #[arg(long)]
    pub report: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Resume file
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Job description (.json with title/description/keywords, or plain text)
    #[arg(short, long)]
    pub job: PathBuf,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rank_args_parse() {
        let cli = Cli::try_parse_from([
            "resmatch", "-vv", "rank", "--resumes", "cvs", "--job", "job.json", "-t", "0.5",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Rank(args) => {
                assert_eq!(args.resumes, PathBuf::from("cvs"));
                assert_eq!(args.threshold, Some(0.5));
                assert!(args.json);
                assert_eq!(args.limit, None);
            }
            Commands::Score(_) => panic!("expected rank"),
        }
    }

    #[test]
    fn test_json_and_report_conflict() {
        let parsed = Cli::try_parse_from([
            "resmatch", "rank", "-r", "cvs", "-j", "job.txt", "--json", "--report",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_score_requires_resume() {
        assert!(Cli::try_parse_from(["resmatch", "score", "--job", "job.txt"]).is_err());
    }
}
