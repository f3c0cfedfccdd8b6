//! The generate → write → echo pipeline.

use crate::cli::Cli;
use anyhow::Context;
use loggen_generator::LineGenerator;
use loggen_resources::ResourceSet;
use loggen_writer::{read_lines, LogWriter, WriteMetrics};
use std::io::Write;
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The log file that was written.
    pub path: PathBuf,
    /// Seed the lines were generated from; pass it to `--seed` to replay.
    pub seed: u64,
    pub metrics: WriteMetrics,
}

/// Load resources, generate lines, write them to a new file and echo the
/// file's contents to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<RunSummary> {
    let run_config = cli.run_config();
    let resource_config = cli.resources.resource_config()?;

    let resources = ResourceSet::load(&resource_config).with_context(|| {
        format!(
            "Failed to load resources from {:?}",
            resource_config.dir
        )
    })?;

    let mut generator = match cli.seed {
        Some(seed) => LineGenerator::new(&resources, seed),
        None => LineGenerator::from_entropy(&resources),
    };
    let seed = generator.seed();

    tracing::info!(
        "Generating {} log lines (seed={})",
        run_config.count,
        seed
    );
    let lines = generator
        .lines(run_config.count)
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate log lines")?;

    tracing::info!("Writing to the log file");
    let writer = LogWriter::new(
        &cli.output_dir,
        run_config.prefix.as_str(),
        run_config.extension.as_str(),
    );
    let written = writer.write(&lines).with_context(|| {
        format!("Failed to write log file in {:?}", writer.output_dir())
    })?;

    if !cli.no_echo {
        let echoed = read_lines(&written.path)
            .with_context(|| format!("Failed to read back {}", written.path.display()))?;
        for line in echoed {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
    }

    Ok(RunSummary {
        path: written.path,
        seed,
        metrics: written.metrics,
    })
}
