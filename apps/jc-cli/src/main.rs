use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use jc_app::{AppResult, EngineService};
use jc_core::PartId;
use jc_gas::IdealGasModel;
use jc_store::AnalysisStore;

#[derive(Parser)]
#[command(name = "jc-cli")]
#[command(about = "jetcycle CLI - jet engine cycle analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an engine definition file
    Validate {
        /// Path to the engine JSON/YAML file
        engine_path: PathBuf,
    },
    /// List the parts of an engine definition
    Parts {
        /// Path to the engine JSON/YAML file
        engine_path: PathBuf,
    },
    /// Analyze one part's chain and print its performance summary
    Analyze {
        /// Path to the engine JSON/YAML file
        engine_path: PathBuf,
        /// Display name or id of the part to analyze
        part: String,
        /// Write the T-s diagram JSON here (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip the analysis cache and force recomputation
        #[arg(long)]
        no_cache: bool,
    },
    /// Analyze the whole engine (every terminal chain)
    AnalyzeEngine {
        /// Path to the engine JSON/YAML file
        engine_path: PathBuf,
        /// Write the T-s diagram JSON here (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { engine_path } => cmd_validate(&engine_path),
        Commands::Parts { engine_path } => cmd_parts(&engine_path),
        Commands::Analyze {
            engine_path,
            part,
            output,
            no_cache,
        } => cmd_analyze(&engine_path, &part, output.as_deref(), no_cache),
        Commands::AnalyzeEngine {
            engine_path,
            output,
        } => cmd_analyze_engine(&engine_path, output.as_deref()),
    }
}

fn load_service(engine_path: &Path, with_cache: bool) -> AppResult<EngineService> {
    let mut service = EngineService::new(Box::new(IdealGasModel::new()));
    if with_cache {
        service = service.with_store(AnalysisStore::for_engine_file(engine_path)?);
    }
    let name = service.load_engine(engine_path)?;
    println!("Engine: {name}");
    Ok(service)
}

fn cmd_validate(engine_path: &Path) -> AppResult<()> {
    println!("Validating engine file: {}", engine_path.display());
    let service = load_service(engine_path, false)?;
    println!("✓ {} parts loaded and validated", service.list_parts().len());
    Ok(())
}

fn cmd_parts(engine_path: &Path) -> AppResult<()> {
    let service = load_service(engine_path, false)?;
    let parts = service.list_parts();

    if parts.is_empty() {
        println!("No parts in engine file");
    } else {
        println!("Parts:");
        for record in parts {
            let upstream = record
                .upstream
                .map(|id| format!(" <- {id}"))
                .unwrap_or_default();
            println!("  {} - {} ({}){}", record.id, record.name, record.part_type, upstream);
        }
    }
    Ok(())
}

fn resolve_part(service: &EngineService, needle: &str) -> Option<PartId> {
    service
        .list_parts()
        .iter()
        .find(|r| r.name == needle || r.id.to_string() == needle)
        .map(|r| r.id)
}

fn cmd_analyze(
    engine_path: &Path,
    part: &str,
    output: Option<&Path>,
    no_cache: bool,
) -> AppResult<()> {
    let service = load_service(engine_path, !no_cache)?;

    let Some(id) = resolve_part(&service, part) else {
        println!("No part named or identified by \"{part}\"");
        return Ok(());
    };

    let report = service.analyze_part(id)?;
    print_report(&report);
    write_diagram(output, &report)?;
    Ok(())
}

fn cmd_analyze_engine(engine_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let service = load_service(engine_path, false)?;
    let report = service.analyze_engine()?;
    print_report(&report);
    write_diagram(output, &report)?;
    Ok(())
}

fn print_report(report: &jc_app::AnalysisReport) {
    for stage in &report.stages {
        println!("{} ({}):", stage.name, stage.kind);
        for (key, value) in stage.metrics.iter() {
            println!("  {key} = {value:.4}");
        }
    }
    println!(
        "Diagram: {} segments, {} isobars",
        report.diagram.segments.len(),
        report.diagram.isobars.len()
    );
}

fn write_diagram(output: Option<&Path>, report: &jc_app::AnalysisReport) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&report.diagram)?)?;
        println!("✓ Diagram written to {}", path.display());
    }
    Ok(())
}
