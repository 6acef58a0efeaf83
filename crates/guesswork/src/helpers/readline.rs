use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::{
    config::Configurer, highlight::Highlighter, history::MemHistory,
    ColorMode, Editor,
};
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use secrecy::SecretString;

use crate::Result;

#[derive(Completer, Helper, Hinter, Validator)]
struct MaskingHighlighter {
    masking: bool,
}

impl Highlighter for MaskingHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        use unicode_width::UnicodeWidthStr;
        if self.masking {
            Owned("*".repeat(line.width()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

/// Read a password from a masked stdin prompt.
pub fn read_password(prompt: Option<&str>) -> Result<SecretString> {
    let h = MaskingHighlighter { masking: true };
    let mut rl = Editor::new()?;
    rl.set_helper(Some(h));
    rl.set_color_mode(ColorMode::Forced);
    rl.set_auto_add_history(false);

    // NOTE: trim any trailing newline for pasted input
    let passwd = rl
        .readline(prompt.unwrap_or("Password to analyze: "))?
        .trim_end_matches('\n')
        .to_string();

    Ok(SecretString::from(passwd))
}

pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Default::default(),
        MemHistory::new(),
    )?)
}
