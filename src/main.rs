use clap::Parser;
use gardenctl::args::Cli;
use gardenctl::commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rendered = commands::run(&cli)?;
    println!("{}", rendered);

    Ok(())
}
