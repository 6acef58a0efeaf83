//! Generate a targeted wordlist.
use clap::Args;
use colored::Colorize;
use guesswork_password::{SeedInput, Wordlist};

use crate::{
    config::Config,
    helpers::{messages::info, print_all, print_wordlist, NO_SEED_INPUTS},
    Result,
};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Name of the person.
    #[clap(long)]
    name: Option<String>,

    /// Date of birth (YYYYMMDD).
    #[clap(long)]
    dob: Option<String>,

    /// Name of a pet.
    #[clap(long)]
    pet: Option<String>,

    /// A favorite word.
    #[clap(long)]
    word: Option<String>,

    /// Maximum number of entries to display.
    #[clap(short, long, env = "GUESSWORK_DISPLAY_LIMIT")]
    limit: Option<usize>,

    /// Print every entry without a header.
    #[clap(short, long, conflicts_with = "json")]
    all: bool,

    /// Print every entry as a JSON array.
    #[clap(short, long)]
    json: bool,
}

impl GenerateArgs {
    /// Seed inputs from the arguments.
    pub fn seeds(&self) -> SeedInput {
        SeedInput {
            name: self.name.clone(),
            date_of_birth: self.dob.clone(),
            pet_name: self.pet.clone(),
            favorite_word: self.word.clone(),
        }
    }
}

/// Notice shown when the wordlist holds only common passwords.
pub(crate) fn seed_notice(seeds: &SeedInput) -> Option<&'static str> {
    seeds.is_empty().then_some(NO_SEED_INPUTS)
}

/// Print a generated wordlist according to the output flags.
///
/// Full listings keep stdout to the entries, so any notice
/// goes to stderr.
pub(crate) fn print(
    args: &GenerateArgs,
    config: &Config,
    seeds: &SeedInput,
    wordlist: &Wordlist,
) -> Result<()> {
    let notice = seed_notice(seeds);
    if args.json || args.all {
        if let Some(notice) = notice {
            eprintln!("{}", notice.cyan());
        }
        if args.json {
            serde_json::to_writer_pretty(std::io::stdout(), wordlist)?;
            println!();
        } else {
            print_all(wordlist);
        }
    } else {
        if let Some(notice) = notice {
            info(notice);
        }
        let limit = args.limit.unwrap_or(config.display.limit);
        print_wordlist(wordlist, 0, limit);
    }
    Ok(())
}

/// Handle the generate command.
pub fn run(args: GenerateArgs, config: &Config) -> Result<()> {
    let seeds = args.seeds();
    let wordlist = guesswork_password::generate_best_wordlist(&seeds);
    print(&args, config, &seeds, &wordlist)
}
