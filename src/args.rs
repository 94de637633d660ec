use crate::output::args::OutputArgs;
use crate::target::args::TargetFlags;
use clap::{Parser, Subcommand};

// Top-level CLI parser. Flag groups are flattened from their module's Args structs.
#[derive(Parser, Debug)]
#[command(
    name = "gardenctl",
    author,
    version,
    about = "Target gardens, projects, seeds and shoots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        env = "GCTL_CONFIG",
        value_name = "FILE",
        help = "Path to the gardenctl config file (toml/yaml/json)"
    )]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the given target flags and print the target
    Target(TargetArgs),
}

#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    #[command(flatten)]
    pub target: TargetFlags,

    #[command(flatten)]
    pub output: OutputArgs,
}
