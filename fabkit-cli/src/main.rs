use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use fabkit::batch::io::ext_repr::ExtPrintInstance;
use fabkit::rod::io::ext_repr::ExtRodInstance;
use fabkit::rod::io::svg::rod_solution_to_svg;
use fabkit_cli::config::FabkitConfig;
use fabkit_cli::io;
use fabkit_cli::io::cli::{Cli, ProblemVariant};
use fabkit_cli::io::output::{PrintOutput, RodOutput};
use fabkit_cli::opt::batch_opt;
use fabkit_cli::opt::rod_opt::FabkitOptimizerRod;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FabkitConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed FabkitConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    match args.prob_var {
        ProblemVariant::RodCutting => {
            let ext_instances = io::read_instances::<ExtRodInstance>(&args.input_file)?;
            main_rod(ext_instances, config, &input_file_stem, args.solution_folder)
        }
        ProblemVariant::PrintBatching => {
            let ext_instances = io::read_instances::<ExtPrintInstance>(&args.input_file)?;
            main_batch(ext_instances, config, &input_file_stem, args.solution_folder)
        }
    }
}

fn main_rod(
    ext_instances: Vec<ExtRodInstance>,
    config: FabkitConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let solved = FabkitOptimizerRod::new(config).solve_all(ext_instances)?;

    if config.svg_output {
        for (i, s) in solved.iter().enumerate() {
            let svg = rod_solution_to_svg(&s.solution, &s.instance, &s.entry.instance.name);
            let svg_path = output_folder.join(format!("sol_{input_stem}_{i}.svg"));
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    let output = RodOutput {
        entries: solved.into_iter().map(|s| s.entry).collect(),
        config,
    };
    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}

fn main_batch(
    ext_instances: Vec<ExtPrintInstance>,
    config: FabkitConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let entries = batch_opt::solve_all(ext_instances)?;

    let output = PrintOutput { entries, config };
    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
