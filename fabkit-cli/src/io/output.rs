use crate::config::FabkitConfig;
use fabkit::batch::io::ext_repr::{ExtPrintInstance, ExtPrintSolution};
use fabkit::rod::io::ext_repr::{ExtRodInstance, ExtRodSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RodOutputEntry {
    #[serde(flatten)]
    pub instance: ExtRodInstance,
    pub solution: ExtRodSolution,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RodOutput {
    pub entries: Vec<RodOutputEntry>,
    pub config: FabkitConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrintOutputEntry {
    #[serde(flatten)]
    pub instance: ExtPrintInstance,
    pub solution: ExtPrintSolution,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrintOutput {
    pub entries: Vec<PrintOutputEntry>,
    pub config: FabkitConfig,
}
