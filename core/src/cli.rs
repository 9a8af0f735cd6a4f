use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::metrics;
use crate::package::{default_packages, SensorPackage};
use crate::storage::load_packages;
use crate::types::InfoMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Regn ut distanse, snittfart og kalorier for treningsøkter.
#[derive(Debug, Clone, Parser)]
#[command(name = "fittrack", version, about)]
pub struct Cli {
    /// JSON-fil med pakker; uten denne brukes den innebygde listen
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Utskriftsformat
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skriv prometheus-tellere til stderr etter kjøringen
    #[arg(long)]
    pub metrics: bool,
}

/// Behandle én pakke: les, beregn, oppdater tellere.
pub fn process_package(package: &SensorPackage) -> anyhow::Result<InfoMessage> {
    let workout = match package.read() {
        Ok(w) => w,
        Err(e) => {
            metrics::record_rejected();
            log::warn!("rejected package {:?}: {}", package.workout_type, e);
            return Err(e.into());
        }
    };
    let info = workout.report();
    metrics::record_workout(workout.kind());
    Ok(info)
}

pub fn print_report<W: Write>(out: &mut W, info: &InfoMessage, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", info.message())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&info.rounded(3))?)?,
    }
    Ok(())
}

/// Kjør hele pakkelisten. Stopper på første ugyldige pakke; rapporter som
/// allerede er skrevet blir stående.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let packages = match &cli.input {
        Some(path) => load_packages(path)?,
        None => default_packages(),
    };

    for (i, package) in packages.iter().enumerate() {
        let info = process_package(package).with_context(|| format!("package #{i}"))?;
        print_report(out, &info, cli.format)?;
    }
    out.flush()?;
    Ok(())
}
