use terminal_banner::{Banner, Padding};

use crate::{
    config::Config,
    helpers::{messages::fail, readline},
    session::Session,
    Error, Result, TARGET,
};

use super::repl::exec;

const WELCOME: &str =
    "Password strength checker and targeted wordlist generator";

/// Print the welcome information.
fn welcome() {
    let help_info = r#"Type "help", "--help" or "-h" for command usage
Type "quit" or "q" to exit"#;
    let banner = Banner::new()
        .padding(Padding::one())
        .text(WELCOME.into())
        .text(help_info.into())
        .render();
    println!("{}", banner);
}

/// Lines that may carry a password are kept out of the history.
fn is_sensitive(line: &str) -> bool {
    matches!(
        line.split_whitespace().next(),
        Some("analyze") | Some("a")
    )
}

/// Run the interactive shell until the user quits.
pub fn run(config: &Config) -> Result<()> {
    welcome();

    let mut session = Session::new();
    let mut rl = readline::basic_editor()?;
    loop {
        match rl.readline("guesswork> ") {
            Ok(line) => {
                if !is_sensitive(&line) {
                    rl.add_history_entry(line.as_str())?;
                }
                match exec(&line, &mut session, config) {
                    Ok(true) => {}
                    Ok(false) => return Ok(()),
                    Err(Error::NoWordlist) => {
                        fail(Error::NoWordlist.to_string())
                    }
                    Err(e) if e.is_interrupted() => {}
                    Err(e) => tracing::error!(target: TARGET, "{}", e),
                }
            }
            Err(e) => {
                let e = Error::from(e);
                if e.is_interrupted() {
                    return Ok(());
                }
                return Err(e);
            }
        }
    }
}
