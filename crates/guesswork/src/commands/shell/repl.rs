use std::ffi::OsString;

use clap::{CommandFactory, Parser, Subcommand};

use crate::{
    commands::{analyze, generate, AnalyzeArgs, GenerateArgs},
    config::Config,
    helpers::print_wordlist,
    session::Session,
    Result,
};

/// Password analysis and wordlist shell.
#[derive(Parser, Debug)]
#[clap(name = "shell", author, version, about, long_about = None)]
struct Shell {
    #[clap(subcommand)]
    cmd: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Analyze the strength of a password.
    #[clap(alias = "a")]
    Analyze(AnalyzeArgs),
    /// Generate a wordlist from personal facts.
    #[clap(alias = "g")]
    Generate(GenerateArgs),
    /// Print entries from the current wordlist.
    Show {
        /// Number of entries to skip.
        #[clap(short, long, default_value_t = 0)]
        offset: usize,

        /// Maximum number of entries to display.
        #[clap(short, long)]
        limit: Option<usize>,
    },
    /// Print the number of entries in the current wordlist.
    Count,
    /// Discard the current wordlist.
    Clear,
    /// Exit the shell.
    #[clap(alias = "q")]
    Quit,
}

/// Execute the program command.
fn exec_program(
    program: Shell,
    session: &mut Session,
    config: &Config,
) -> Result<bool> {
    match program.cmd {
        ShellCommand::Analyze(args) => analyze::run(args)?,
        ShellCommand::Generate(args) => {
            let seeds = args.seeds();
            let wordlist = session.generate(&seeds);
            generate::print(&args, config, &seeds, wordlist)?;
        }
        ShellCommand::Show { offset, limit } => {
            let wordlist = session.wordlist()?;
            print_wordlist(
                wordlist,
                offset,
                limit.unwrap_or(config.display.limit),
            );
        }
        ShellCommand::Count => {
            println!("{}", session.wordlist()?.len());
        }
        ShellCommand::Clear => {
            session.clear();
        }
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Intermediary to pretty print clap parse errors.
fn exec_args<I, T>(
    it: I,
    session: &mut Session,
    config: &Config,
) -> Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Shell::try_parse_from(it) {
        Ok(program) => exec_program(program, session, config),
        Err(e) => {
            e.print()?;
            Ok(true)
        }
    }
}

/// Execute a line of input in the context of the shell program.
///
/// Returns `false` when the shell should exit.
pub fn exec(
    line: &str,
    session: &mut Session,
    config: &Config,
) -> Result<bool> {
    if !line.trim().is_empty() {
        let mut sanitized = shell_words::split(line.trim_end_matches(' '))?;
        sanitized.insert(0, String::from("guesswork-shell"));
        let it = sanitized.into_iter();
        let mut cmd = Shell::command();
        if line == "-V" {
            let version = cmd.render_version();
            print!("{}", version);
        } else if line == "version" || line == "--version" {
            let version = cmd.render_long_version();
            print!("{}", version);
        } else if line == "-h" {
            cmd.print_help()?;
        } else if line == "help" || line == "--help" {
            cmd.print_long_help()?;
        } else {
            return exec_args(it, session, config);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use anyhow::Result;

    #[test]
    fn shell_generate_show_clear() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();

        assert!(matches!(
            exec("show", &mut session, &config),
            Err(Error::NoWordlist)
        ));

        assert!(exec(
            "generate --name Max --pet 'Mr Whiskers' --limit 3",
            &mut session,
            &config
        )?);
        let wordlist = session.wordlist()?;
        assert!(wordlist.contains("Max123"));
        assert!(wordlist.contains("Mr Whiskers"));

        assert!(exec("show --offset 10 --limit 2", &mut session, &config)?);
        assert!(exec("count", &mut session, &config)?);
        assert!(exec("clear", &mut session, &config)?);
        assert!(session.wordlist().is_err());
        Ok(())
    }

    #[test]
    fn shell_quit() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();
        assert!(!exec("quit", &mut session, &config)?);
        assert!(!exec("q", &mut session, &config)?);
        Ok(())
    }

    #[test]
    fn shell_blank_and_unknown() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();
        assert!(exec("   ", &mut session, &config)?);
        assert!(exec("frobnicate", &mut session, &config)?);
        assert!(session.wordlist().is_err());
        Ok(())
    }

    #[test]
    fn shell_analyze_argument() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();
        assert!(exec("analyze password", &mut session, &config)?);
        assert!(exec("analyze --json Tr0ub4dor&3", &mut session, &config)?);
        Ok(())
    }

    #[test]
    fn shell_analyze_empty_password() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();
        assert!(exec("analyze ''", &mut session, &config)?);
        assert!(exec("analyze --json ''", &mut session, &config)?);
        Ok(())
    }

    #[test]
    fn shell_generate_without_seeds() -> Result<()> {
        let config = Config::default();
        let mut session = Session::new();
        for line in ["generate", "generate --all", "generate --json"] {
            assert!(exec(line, &mut session, &config)?);
            let wordlist = session.wordlist()?;
            assert_eq!(
                guesswork_password::COMMON_PASSWORDS.len(),
                wordlist.len()
            );
        }
        Ok(())
    }
}
