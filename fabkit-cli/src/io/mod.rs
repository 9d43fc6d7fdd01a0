use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Input files hold either a single instance or an array of them
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(t) => vec![t],
            OneOrMany::Many(ts) => ts,
        }
    }
}

pub fn read_instances<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let instances: OneOrMany<T> = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))?;
    Ok(instances.into_vec())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Elapsed time since [`EPOCH`] as `hh:mm:ss`
fn uptime() -> String {
    let secs = EPOCH.elapsed().as_secs();
    format!("{:0>2}:{:0>2}:{:0>2}", secs / 3600, (secs / 60) % 60, secs % 60)
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let thread = std::thread::current();
            let prefix = format!(
                "[{}] [{}] <{}>",
                record.level(),
                uptime(),
                thread.name().unwrap_or("-")
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[IO] time: {}", jiff::Timestamp::now());
    Ok(())
}
