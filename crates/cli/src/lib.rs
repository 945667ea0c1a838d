//! nfcheck CLI -- analyze relation schemas for 2NF, 3NF and BCNF.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub mod check;
pub mod report;

#[derive(Debug, Parser)]
#[command(
    name = "nfcheck",
    about = "Normal form analysis for relational schemas"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze the relations in schema (.fds) files
    Check(CheckArgs),
    /// Format schema (.fds) files
    Fmt(FmtArgs),
    /// Generate random schema files
    Generate(GenerateArgs),
    /// Print the JSON Schema for the `check --json` output to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Input files, or directories to scan for .fds files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Exit with status 1 unless every relation reaches this normal form
    #[arg(long)]
    pub require: Option<NormalFormLevel>,
    /// Also report superkeys and keys excluded by the minimum-size rule
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per relation)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NormalFormLevel {
    #[value(name = "2nf")]
    Second,
    #[value(name = "3nf")]
    Third,
    #[value(name = "bcnf")]
    BoyceCodd,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    /// Input files, or directories to scan for .fds files (comments are not kept)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Check formatting without modifying files (exit 1 if unformatted)
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of schemas to generate
    #[arg(long)]
    pub n_schema: u64,
    /// Number of attributes per schema
    #[arg(long)]
    pub n_attr: usize,
    /// Number of functional dependencies per schema
    #[arg(long)]
    pub n_fd: usize,
    /// Maximum number of attributes on a left-hand side
    #[arg(long, default_value_t = 2)]
    pub max_lhs: usize,
    /// Maximum number of attributes on a right-hand side
    #[arg(long, default_value_t = 1)]
    pub max_rhs: usize,
    /// Base seed; schema `i` uses `seed + i`
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output directory for generated schema files
    #[arg(long)]
    pub output_dir: PathBuf,
}

impl From<NormalFormLevel> for nfcheck_core::NormalForm {
    fn from(level: NormalFormLevel) -> Self {
        match level {
            NormalFormLevel::Second => Self::Second,
            NormalFormLevel::Third => Self::Third,
            NormalFormLevel::BoyceCodd => Self::BoyceCodd,
        }
    }
}

impl From<&GenerateArgs> for nfcheck_testgen::generator::SchemaParams {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            id: 0,
            n_attribute: args.n_attr,
            n_dependency: args.n_fd,
            max_lhs: args.max_lhs,
            max_rhs: args.max_rhs,
            seed: args.seed,
        }
    }
}
