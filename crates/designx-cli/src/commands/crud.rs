//! CRUD command: plan the table/details/create forms for an entity and
//! create them in parallel sessions

use super::{emit, CliResult};
use clap::{Args, Subcommand};
use designx_core::ResolverConfig;
use designx_engine::{run_crud_sessions, CrudPlan, DraftFormCreator, EngineConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CrudArgs {
    #[command(subcommand)]
    pub command: CrudCommand,
}

#[derive(Debug, Subcommand)]
pub enum CrudCommand {
    /// Print the forms that would be created
    Plan(PlanArgs),
    /// Create every form of the plan, one session each, in parallel
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Entity name, e.g. OrganisationBase
    #[arg(long)]
    pub entity: String,

    /// Module to create forms in (overrides configuration)
    #[arg(long)]
    pub module: Option<String>,

    /// Fully qualified model type, e.g. Shesha.Domain.Person
    /// (defaults to the configured namespace plus the entity name)
    #[arg(long)]
    pub model_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Directory to write one draft per created form
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

fn build_plan(args: &PlanArgs, engine: &EngineConfig) -> Result<CrudPlan, Box<dyn std::error::Error>> {
    if args.entity.trim().is_empty() {
        return Err("--entity must not be empty".into());
    }
    let mut engine = engine.clone();
    if let Some(module) = &args.module {
        engine.module = module.clone();
    }
    let plan = CrudPlan::new(args.entity.trim(), &engine);
    Ok(match args.model_type.as_deref().map(str::trim) {
        Some(model_type) if !model_type.is_empty() => plan.with_model_type(model_type),
        _ => plan,
    })
}

pub fn execute(args: CrudArgs, config: Option<&Path>) -> CliResult {
    let engine = EngineConfig::load(config)?;
    match args.command {
        CrudCommand::Plan(a) => {
            let plan = build_plan(&a, &engine)?;
            emit(None, &serde_json::to_string_pretty(&plan)?)
        }
        CrudCommand::Run(a) => execute_run(a, &engine, ResolverConfig::load(config)?),
    }
}

fn execute_run(args: RunArgs, engine: &EngineConfig, resolver: ResolverConfig) -> CliResult {
    let plan = build_plan(&args.plan, engine)?;
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(run_crud_sessions(&plan, engine.timeout(), |_| {
        DraftFormCreator::new(resolver.clone())
    }));

    println!("Created CRUD forms for {} in {} ms", summary.entity, summary.duration_ms);
    for report in summary.successful() {
        println!("  ok      {} ({:?})", report.form_name, report.kind);
        if let (Some(dir), Some(artifact)) = (&args.out_dir, &report.artifact) {
            let path = dir.join(format!("{}.json", report.form_name));
            emit(Some(&path), &serde_json::to_string_pretty(artifact)?)?;
        }
    }
    for report in summary.failed() {
        println!(
            "  failed  {} ({:?}): {}",
            report.form_name,
            report.kind,
            report.error.as_deref().unwrap_or_default()
        );
    }

    if !summary.all_succeeded() {
        return Err(format!(
            "{} of {} forms failed",
            summary.failed().count(),
            summary.reports.len()
        )
        .into());
    }
    Ok(())
}
