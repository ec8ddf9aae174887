//! # Analyze Subcommand
//!
//! Runs one analysis from the command line. Contract text comes from a
//! file argument or stdin; the report prints as a human-readable summary,
//! as JSON, or as the amended contract.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use covenant_ai::{OpenRouterClient, OpenRouterConfig, RemediationGenerator};
use covenant_core::{IndustryCode, JurisdictionCode, RegulationId};
use covenant_engine::{
    AnalysisRequest, ClauseTextGenerator, ComplianceAnalyzer, DetectionPolicy,
};
use covenant_registry::RegulationRegistry;

/// Arguments for `covenant analyze`.
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Contract text file; stdin when omitted.
    pub file: Option<PathBuf>,

    /// Jurisdiction code (e.g. US, US_CA); inferred from the text when omitted.
    #[arg(long)]
    pub jurisdiction: Option<String>,

    /// Industry code (e.g. lending, general); inferred from the text when omitted.
    #[arg(long)]
    pub industry: Option<String>,

    /// Analyze exactly these regulations, bypassing applicability resolution.
    /// Repeatable.
    #[arg(long = "regulation")]
    pub regulations: Vec<String>,

    /// Detection policy overrides (YAML).
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Emit the full report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Emit the amended contract instead of the report.
    #[arg(long)]
    pub amended: bool,
}

/// Run the analyze subcommand.
pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let contract_text = read_contract(&args.file)?;

    let generator: Arc<dyn ClauseTextGenerator> = match OpenRouterConfig::from_env() {
        Some(config) => Arc::new(RemediationGenerator::new(Arc::new(
            OpenRouterClient::new(config).context("building completion client")?,
        ))),
        None => {
            tracing::debug!("no completion service configured; suggested clauses use templates");
            Arc::new(RemediationGenerator::offline())
        }
    };

    let mut analyzer =
        ComplianceAnalyzer::new(Arc::new(RegulationRegistry::builtin()), generator);
    if let Some(path) = &args.policy {
        let policy = DetectionPolicy::from_yaml_file(path)
            .with_context(|| format!("loading policy from {}", path.display()))?;
        analyzer = analyzer.with_policy(policy);
    }

    let request = AnalysisRequest {
        contract_text,
        regulations: to_regulation_ids(&args.regulations)?,
        jurisdiction: args
            .jurisdiction
            .map(JurisdictionCode::new)
            .transpose()
            .context("invalid jurisdiction code")?,
        industry: args
            .industry
            .map(IndustryCode::new)
            .transpose()
            .context("invalid industry code")?,
    };

    let report = analyzer.analyze(request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.amended {
        println!("{}", report.amended_contract);
    } else {
        println!("{}", report.summary);
        println!("{}", report.detailed_summary);
    }
    Ok(())
}

/// Read contract text from the given file, or stdin when absent.
fn read_contract(file: &Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading contract from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading contract from stdin")?;
            Ok(text)
        }
    }
}

/// Convert `--regulation` flags into ids; an empty list means "resolve".
fn to_regulation_ids(ids: &[String]) -> anyhow::Result<Option<Vec<RegulationId>>> {
    if ids.is_empty() {
        return Ok(None);
    }
    let ids = ids
        .iter()
        .map(|id| RegulationId::new(id.clone()))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid regulation id")?;
    Ok(Some(ids))
}
