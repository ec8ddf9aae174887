//! # Regulations Subcommand
//!
//! Lists the builtin catalog or shows one regulation in full.

use anyhow::Context;

use covenant_core::RegulationId;
use covenant_registry::RegulationRegistry;

/// Arguments for `covenant regulations`.
#[derive(clap::Args, Debug)]
pub struct RegulationsArgs {
    /// Show this regulation in full; lists the catalog when omitted.
    pub id: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Run the regulations subcommand.
pub fn run(args: RegulationsArgs) -> anyhow::Result<()> {
    let registry = RegulationRegistry::builtin();

    match args.id {
        Some(id) => {
            let id = RegulationId::new(id).context("invalid regulation id")?;
            let definition = registry.get(&id)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(definition)?);
            } else {
                println!("{}", definition.id);
                for clause in &definition.clauses {
                    println!("  [{}] {}", clause.risk_level, clause.name);
                    println!("      {}", clause.description);
                    if let Some(citation) = &clause.legal_citation {
                        println!("      Citation: {citation}");
                    }
                    for requirement in &clause.requirements {
                        println!("      - {requirement}");
                    }
                }
                println!(
                    "  Jurisdictions: {}",
                    definition
                        .jurisdictions
                        .iter()
                        .map(|j| j.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!(
                    "  Industries: {}",
                    definition
                        .industries
                        .iter()
                        .map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
        None => {
            if args.json {
                let ids: Vec<String> = registry
                    .list_regulations()
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                for id in registry.list_regulations() {
                    let definition = registry.get(&id)?;
                    println!("{:<12} {} clauses", id.to_string(), definition.clauses.len());
                }
            }
        }
    }
    Ok(())
}
