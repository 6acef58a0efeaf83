use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{analyze, generate, shell, AnalyzeArgs, GenerateArgs},
    config::Config,
    CommandTree, Result, TARGET,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Guesswork {
    /// Configuration file.
    #[clap(long, env = "GUESSWORK_CONFIG", hide_env_values = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze the strength of a password.
    #[clap(alias = "a")]
    Analyze(AnalyzeArgs),
    /// Generate a wordlist from personal facts.
    #[clap(alias = "g")]
    Generate(GenerateArgs),
    /// Interactive shell that keeps the generated wordlist.
    Shell,
}

pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("GUESSWORK_CLI_JSON").ok().is_some() {
        let cmd = Guesswork::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    let args = Guesswork::parse();
    let config = Config::resolve(args.config.as_deref())?;
    if let Some(file) = config.file() {
        tracing::debug!(target: TARGET, file = %file.display(), "config");
    }

    match args.cmd {
        Command::Analyze(args) => analyze::run(args)?,
        Command::Generate(args) => generate::run(args, &config)?,
        Command::Shell => shell::run(&config)?,
    }
    Ok(())
}
