use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::SystemTime,
};

use clap::Parser;
use ios_topology::{
    ConfigSource, TopologyBuilder, TopologyError, TopologyResult,
    data_aquisition::files::FileSource, topology::report::render_report,
};
use log::{error, info};

/// Build a network topology from Cisco IOS running-config files.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Directory containing the config files
    #[clap(short, long, default_value = "src/configs")]
    configs: PathBuf,
    /// File pattern, relative to the config directory
    #[clap(short, long, default_value = "*.txt")]
    pattern: String,
    /// Output directory for topology.json and report.txt
    #[clap(short, long, default_value = "output")]
    output: PathBuf,
    /// Do not write the text report
    #[clap(long)]
    no_report: bool,
}

fn write_output(path: &Path, contents: &str) -> TopologyResult<()> {
    fs::write(path, contents).map_err(|source| TopologyError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> TopologyResult<bool> {
    let mut source = FileSource::discover(&cli.configs, &cli.pattern)?;
    if source.is_empty() {
        error!(
            "no configuration files matching {} found in {}",
            cli.pattern,
            cli.configs.display()
        );
        return Ok(false);
    }
    info!("found {} config file(s)", source.paths().len());

    let inputs = source.fetch_inputs()?;
    let mut builder = TopologyBuilder::new();
    builder.add_inputs(&inputs);
    let topology = builder.build();

    fs::create_dir_all(&cli.output).map_err(|source| TopologyError::Output {
        path: cli.output.clone(),
        source,
    })?;
    write_output(&cli.output.join("topology.json"), &topology.to_json_pretty()?)?;

    if !cli.no_report {
        let report = render_report(&topology, &inputs, SystemTime::now());
        write_output(&cli.output.join("report.txt"), &report)?;
    }
    Ok(true)
}

fn main() -> ExitCode {
    pretty_env_logger::init_timed();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
