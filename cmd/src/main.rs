/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod error;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;

use sloth_prometheus::{CancellationToken, GroupedRulesYamlRepo, Header, Sink, StorageSlo};

use error::{Error, Result};

/// Write the prometheus rule file for a set of generated SLO rules.
#[derive(clap::Parser)]
#[command(version)]
struct Args {
    /// SLO rules to store (yaml or json, a list of `{slo, rules}` objects).
    input: PathBuf,
    /// Write the rule file here instead of to stdout.
    #[clap(short, long)]
    out: Option<PathBuf>,
    /// Version reported in the generated file header.
    #[clap(long, env = "SLOTH_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    generator_version: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(args: &Args) -> Result<()> {
    let slos = load_slos(&args.input)?;
    log::info!("loaded {} SLOs from {}", slos.len(), args.input.display());

    let header = Header::with_version(args.generator_version.as_str());
    match &args.out {
        Some(path) => {
            let file =
                std::fs::File::create(path).map_err(|e| Error::CreateOutput(path.clone(), e))?;
            store(file, header, &slos)?;
            log::info!("wrote rule file to {}", path.display());
        }
        None => store(std::io::stdout().lock(), header, &slos)?,
    }

    Ok(())
}

fn store<S: Sink>(sink: S, header: Header, slos: &[StorageSlo]) -> Result<()> {
    GroupedRulesYamlRepo::new(sink)
        .with_header(header)
        .store_slos(&CancellationToken::new(), slos)?;
    Ok(())
}

fn load_slos(path: &Path) -> Result<Vec<StorageSlo>> {
    let data =
        std::fs::read_to_string(path).map_err(|e| Error::ReadSlos(path.to_path_buf(), e))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&data)
            .map_err(|e| Error::DecodeSlosJson(path.to_path_buf(), e)),
        _ => serde_yaml::from_str(&data)
            .map_err(|e| Error::DecodeSlosYaml(path.to_path_buf(), e)),
    }
}
