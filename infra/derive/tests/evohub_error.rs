use evohub_derive::evohub_error;
use std::borrow::Cow;

#[evohub_error]
pub enum CapError {
    #[error("Cap parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Cap out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal cap error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_cap(raw: &str) -> Result<u32, CapError> {
    let cap = raw.parse::<u32>()?;
    if cap > 10_000 {
        return Err(CapError::OutOfRange {
            message: format!("{cap} exceeds 10000").into(),
            context: None,
        });
    }
    Ok(cap)
}

#[test]
fn evohub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/evohub_error_pass.rs");
}

#[test]
fn question_mark_converts_source_errors() {
    let err = parse_cap("abc").unwrap_err();
    assert!(matches!(err, CapError::Parse { context: None, .. }));
}

#[test]
fn context_is_attached_to_own_errors() {
    let err = parse_cap("20000").context("loading voice table").unwrap_err();
    assert_eq!(err.to_string(), "Cap out of range (loading voice table): 20000 exceeds 10000");
}

#[test]
fn context_converts_foreign_results() {
    let err = "x".parse::<u32>().context("reading override").unwrap_err();
    match err {
        CapError::Parse { context, .. } => {
            assert_eq!(context.as_deref(), Some("reading override"));
        },
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn strings_become_internal_errors() {
    let from_static: CapError = "table missing".into();
    let from_owned: CapError = String::from("table corrupt").into();

    assert_eq!(from_static.to_string(), "Internal cap error: table missing");
    assert!(matches!(from_owned, CapError::Internal { .. }));
}

#[test]
fn ok_results_pass_through_context() {
    let value = parse_cap("42").context("unused").unwrap();
    assert_eq!(value, 42);
}
