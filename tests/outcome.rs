use outcome::{
    error::kind_of, ErrorKind, Outcome, SpecificOutcome, StandardError, UnexpectedError,
    UniversalError,
};
use tools::LookupError;


#[test]
fn test_success_resolves_to_value() -> anyhow::Result<()> {
    let outcome: Outcome<i32> = Outcome::from_fn(|| Ok::<_, UniversalError>(42));

    assert!(matches!(outcome, Outcome::Succeeded(42)));
    assert_eq!(outcome.resolve()?, 42);
    assert_eq!(Outcome::from_fn(|| Ok::<_, UniversalError>(42)).ok(), Some(42));

    for v in ["", "a", "many words"] {
        assert_eq!(Outcome::success(v).resolve()?, v);
    }
    Ok(())
}

#[test]
fn test_failure_resolves_to_same_error() {
    let outcome: Outcome<i32> = Outcome::from_fn(|| Err(UniversalError::new("boom")));

    assert!(matches!(&outcome, Outcome::Failed(e) if e.to_string() == "boom"));

    let error = outcome.resolve().unwrap_err();
    assert_eq!(
        error.downcast_ref::<UniversalError>(),
        Some(&UniversalError::new("boom"))
    );
    assert_eq!(kind_of(&error), Some(ErrorKind::Universal));

    let outcome: Outcome<i32> = Outcome::from_fn(|| Err(UniversalError::new("boom")));
    assert_eq!(outcome.ok(), None);
}

#[test]
fn test_question_mark_after_resolve() {
    fn parse_twice(input: &str) -> anyhow::Result<u32> {
        let parsed: Outcome<u32> = input.parse::<u32>().into();
        Ok(parsed.resolve()? * 2)
    }

    assert_eq!(parse_twice("21").ok(), Some(42));
    assert!(parse_twice("forty-two").is_err());
}

#[test]
fn test_exactly_one_state_from_fn() {
    for n in -5i64..5 {
        let outcome = Outcome::from_fn(|| {
            if n < 0 {
                return Err(UniversalError::new("negative"));
            }
            Ok(n)
        });

        assert_ne!(outcome.is_success(), outcome.is_failure());
        assert_eq!(outcome.is_failure(), n < 0);
        assert_eq!(outcome.value().is_some(), outcome.error().is_none());
    }
}

#[test]
fn test_widening_is_lossless() {
    let ok: SpecificOutcome<&str, LookupError> = SpecificOutcome::success("found");
    assert_eq!(ok.into_outcome().ok(), Some("found"));

    let missing = LookupError::Missing("kiwi".to_owned());
    let failed: Outcome<&str> = SpecificOutcome::<&str, _>::failure(missing.clone()).into();

    match failed {
        Outcome::Failed(error) => assert_eq!(error.downcast_ref::<LookupError>(), Some(&missing)),
        Outcome::Succeeded(_) => panic!("widening flipped the discriminant"),
    }
}

#[test]
fn test_unexpected_error_fields() {
    let e = UnexpectedError::new("d");

    assert_eq!(e.error_description(), Some("d"));
    assert_eq!(e.failure_reason(), None);
    assert_eq!(e.recovery_suggestion(), None);
    assert_eq!(e.help_anchor(), None);

    let outcome: Outcome<()> = Outcome::failure(e);
    let error = outcome.resolve().unwrap_err();
    assert_eq!(kind_of(&error), Some(ErrorKind::Unexpected));
}

#[test]
fn test_taxonomy_is_interchangeable_in_mechanics() {
    fn describe<E: StandardError>(e: &E) -> String {
        format!(
            "{} ({}): {}",
            E::KIND,
            e.failure_reason().unwrap_or("-"),
            e
        )
    }

    let unexpected = UnexpectedError::new("x").with_failure_reason("r");
    let universal = UniversalError::new("x").with_failure_reason("r");

    assert_eq!(describe(&unexpected), "unexpected error (r): x");
    assert_eq!(describe(&universal), "universal error (r): x");
}
