//! Case variations of candidate words.

/// Lowercase, uppercase and title case forms of a word, in that order.
pub fn case_variants(word: &str) -> [String; 3] {
    [word.to_lowercase(), word.to_uppercase(), title_case(word)]
}

/// Capitalize the first character of each whitespace delimited
/// token and lowercase the rest.
pub fn title_case(word: &str) -> String {
    let mut title = String::with_capacity(word.len());
    let mut token_start = true;
    for c in word.chars() {
        if c.is_whitespace() {
            title.push(c);
            token_start = true;
        } else if token_start {
            title.extend(c.to_uppercase());
            token_start = false;
        } else {
            title.extend(c.to_lowercase());
        }
    }
    title
}
