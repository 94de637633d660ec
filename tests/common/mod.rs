#![allow(dead_code)]

use std::io::Write;

use clap::{Command, CommandFactory, FromArgMatches};
use gardenctl::args::Cli;
use gardenctl::target::args::TargetFlags;
use tempfile::NamedTempFile;

/// Parses `argv` against a command on which `register` put the flags of `flags`,
/// then binds the matches back into a copy of `flags`.
pub fn bind_flags(
    flags: &TargetFlags,
    register: impl Fn(&TargetFlags, Command) -> Command,
    argv: &[&str],
) -> TargetFlags {
    let cmd = register(flags, Command::new("gardenctl"));
    let matches = cmd
        .try_get_matches_from(std::iter::once("gardenctl").chain(argv.iter().copied()))
        .expect("arguments parse");
    let mut bound = flags.clone();
    bound
        .update_from_arg_matches(&matches)
        .expect("flags bind");
    bound
}

pub fn parse_all_flags(argv: &[&str]) -> TargetFlags {
    bind_flags(&TargetFlags::default(), TargetFlags::add_flags, argv)
}

/// Parses a full command line with `GCTL_CONFIG` ignored, so only `--config` counts.
pub fn parse_cli(argv: &[&str]) -> Cli {
    let cmd = Cli::command().mut_arg("config", |arg| arg.env(None::<&'static str>));
    let matches = cmd
        .try_get_matches_from(std::iter::once("gardenctl").chain(argv.iter().copied()))
        .expect("cli parses");
    Cli::from_arg_matches(&matches).expect("cli binds")
}

pub fn write_config_file(extension: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("create config file");
    file.write_all(contents.as_bytes())
        .expect("write config file");
    file
}

pub const GARDENS_YAML: &str = r#"
gardens:
  - identity: prod
    alias: live
    kubeconfig: /etc/gardens/prod.yaml
  - identity: dev
"#;
