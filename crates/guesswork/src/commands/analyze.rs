//! Analyze the strength of a password.
use clap::Args;
use guesswork_password::{analyze_password_strength, Zxcvbn};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    helpers::{
        messages::info, print_report, readline::read_password,
        EMPTY_PASSWORD,
    },
    Result, TARGET,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Password to analyze, prompted for when omitted.
    password: Option<String>,

    /// Personal facts that make a password weaker when present.
    #[clap(short, long)]
    context: Vec<String>,

    /// Print the report as JSON.
    #[clap(short, long)]
    json: bool,
}

/// Handle the analyze command.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => SecretString::from(password),
        None => read_password(None)?,
    };

    if password.expose_secret().is_empty() {
        info(EMPTY_PASSWORD);
        return Ok(());
    }

    tracing::debug!(
        target: TARGET,
        context = args.context.len(),
        "analyze"
    );

    let scorer = Zxcvbn::with_user_inputs(args.context);
    let report =
        analyze_password_strength(&scorer, password.expose_secret())?;

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout(), &report)?;
        println!();
    } else {
        print_report(&report);
    }
    Ok(())
}
