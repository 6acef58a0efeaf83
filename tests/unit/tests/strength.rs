use anyhow::Result;
use guesswork_password::{
    analyze_password_strength, format_crack_time, Error, Zxcvbn,
};
use guesswork_unit_tests::UnavailableScorer;

#[test]
fn strength_common_password() -> Result<()> {
    let report = analyze_password_strength(&Zxcvbn::new(), "password")?;
    assert_eq!(0, report.score);
    assert!(report.warnings.iter().any(|w| w.contains("shorter than 12")));
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("mix of uppercase and lowercase")));
    assert!(!report.warnings.iter().any(|w| w.contains("only digits")));
    Ok(())
}

#[test]
fn strength_digits_only() -> Result<()> {
    let report = analyze_password_strength(&Zxcvbn::new(), "12345678")?;
    assert!(report.score <= 1);
    let heuristics: Vec<&String> = report
        .warnings
        .iter()
        .filter(|w| !w.starts_with("Warning: "))
        .collect();
    assert_eq!(2, heuristics.len());
    assert!(heuristics[1].contains("only digits"));
    Ok(())
}

#[test]
fn strength_long_mixed_password() -> Result<()> {
    let report =
        analyze_password_strength(&Zxcvbn::new(), "Tq8#vLm2!xRp9@Wz")?;
    assert!(report.score >= 3);
    assert!(report.warnings.is_empty());
    assert!(report.crack_time.ends_with("years"));
    Ok(())
}

#[test]
fn strength_user_inputs_penalized() -> Result<()> {
    let password = "Fluffy19900101";
    let plain = analyze_password_strength(&Zxcvbn::new(), password)?;
    let scorer = Zxcvbn::with_user_inputs(["fluffy", "19900101"]);
    let context = analyze_password_strength(&scorer, password)?;
    assert!(context.score <= plain.score);
    Ok(())
}

#[test]
fn strength_scorer_failure_propagates() {
    let result = analyze_password_strength(&UnavailableScorer, "hunter2");
    assert!(matches!(result, Err(Error::Scoring(_))));
}

#[test]
fn strength_empty_password() {
    let result = analyze_password_strength(&UnavailableScorer, "");
    assert!(matches!(result, Err(Error::EmptyPassword)));
}

#[test]
fn strength_crack_time_format() {
    assert_eq!("45 seconds", format_crack_time(45.0));
    assert_eq!("2 minutes", format_crack_time(125.0));
    assert_eq!("2 hours", format_crack_time(7300.0));
    assert_eq!("2 days", format_crack_time(200000.0));
    assert_eq!("1.27 years", format_crack_time(40000000.0));
}
