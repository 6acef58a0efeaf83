use guesswork_password::{
    case::case_variants, suffix::append_suffixes, SubstitutionTable,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn leet_includes_word(word in "[a-zA-Z0-9@!$ ]{0,8}") {
        let variants = SubstitutionTable::builtin().expand(&word);
        prop_assert!(variants.contains(&word));
    }

    #[test]
    fn leet_count_matches(word in "[a-zA-Z0-9]{0,8}") {
        let table = SubstitutionTable::builtin();
        prop_assert_eq!(
            table.expansion_count(&word),
            table.expand(&word).len()
        );
    }

    #[test]
    fn suffix_length(
        words in prop::collection::vec("[a-z]{0,6}", 0..8),
        suffixes in prop::collection::vec("[0-9!]{1,4}", 0..8),
    ) {
        let extended = append_suffixes(&words, &suffixes);
        prop_assert_eq!((1 + suffixes.len()) * words.len(), extended.len());
    }

    #[test]
    fn case_variants_of_reversed_palindrome(half in "[a-z]{0,5}") {
        let palindrome: String =
            half.chars().chain(half.chars().rev()).collect();
        let [lower, upper, _] = case_variants(&palindrome);
        prop_assert_eq!(&lower, &lower.chars().rev().collect::<String>());
        prop_assert_eq!(&upper, &upper.chars().rev().collect::<String>());
    }
}
