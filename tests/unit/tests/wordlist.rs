use anyhow::Result;
use guesswork_password::{
    generate_best_wordlist, suffix::append_common_suffixes, SeedInput, COMMON_PASSWORDS,
    COMMON_SUFFIXES,
};
use guesswork_unit_tests::common_sorted;

#[test]
fn wordlist_empty_seeds_is_common_passwords() -> Result<()> {
    let wordlist =
        generate_best_wordlist(&SeedInput::from(["", "", "", ""]));
    assert_eq!(common_sorted(), wordlist.into_inner());

    let wordlist = generate_best_wordlist(&SeedInput::default());
    assert_eq!(COMMON_PASSWORDS.len(), wordlist.len());
    Ok(())
}

#[test]
fn wordlist_whitespace_seed_ignored() -> Result<()> {
    let wordlist =
        generate_best_wordlist(&SeedInput::from(["   ", "\t", "", " "]));
    assert_eq!(common_sorted(), wordlist.into_inner());
    Ok(())
}

#[test]
fn wordlist_name_seed() -> Result<()> {
    let wordlist =
        generate_best_wordlist(&SeedInput::from(["Max", "", "", ""]));
    for expected in [
        "Max", "max", "MAX", "M4x", "M@x", "m4x", "M4X", "Max123", "Max!",
        "Max2025", "max007", "xaM", "x4m", "XAM321",
    ] {
        assert!(wordlist.contains(expected), "missing {}", expected);
    }
    for common in COMMON_PASSWORDS {
        assert!(wordlist.contains(common), "missing {}", common);
    }
    assert!(wordlist.as_slice().windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn wordlist_is_deterministic() -> Result<()> {
    let seeds = SeedInput::from(["Alice", "19900101", "Fluffy", "sunset"]);
    let first = generate_best_wordlist(&seeds);
    let second = generate_best_wordlist(&seeds);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn wordlist_palindrome_adds_nothing_reversed() -> Result<()> {
    // Digits have no case and no substitutions so every branch
    // collapses to the seed itself.
    let wordlist =
        generate_best_wordlist(&SeedInput::from(["1991", "", "", ""]));
    let mut expected = common_sorted();
    expected.extend(append_common_suffixes(&["1991"]));
    expected.sort();
    assert_eq!(expected, wordlist.into_inner());
    assert_eq!(
        COMMON_PASSWORDS.len() + COMMON_SUFFIXES.len() + 1,
        expected.len()
    );
    Ok(())
}

#[test]
fn wordlist_seed_fields_combine() -> Result<()> {
    let seeds = SeedInput {
        name: Some("Max".to_owned()),
        date_of_birth: None,
        pet_name: Some("Rex".to_owned()),
        favorite_word: None,
    };
    let wordlist = generate_best_wordlist(&seeds);
    assert!(wordlist.contains("M@x!"));
    assert!(wordlist.contains("R3x2024"));
    assert!(wordlist.contains("x3R"));
    Ok(())
}

#[cfg(NOT_CI)]
#[test]
fn wordlist_long_seed_not_capped() -> Result<()> {
    use guesswork_password::leet::leetspeak_variants;

    let word = "sassiest";
    let variants = leetspeak_variants(word).len();
    assert_eq!(3 * 3 * 3 * 3 * 3 * 2 * 3 * 2, variants);

    let wordlist =
        generate_best_wordlist(&SeedInput::from([word, "", "", ""]));
    assert!(wordlist.len() >= variants * (COMMON_SUFFIXES.len() + 1));
    Ok(())
}
