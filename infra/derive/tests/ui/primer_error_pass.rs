use primer_derive::primer_error;
use std::borrow::Cow;

#[primer_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected: {reason}")]
    Rejected { reason: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8, DemoError> {
    raw.parse::<u8>().context("parsing a byte")
}

fn main() {
    let err = parse("nope").unwrap_err();
    assert!(matches!(err, DemoError::Parse { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Parse error (parsing a byte): "));

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err = Err::<(), DemoError>(DemoError::from(format!("code {}", 7)))
        .context("late")
        .unwrap_err();
    assert_eq!(err.to_string(), "Internal error (late): code 7");

    let err: DemoError = std::io::Error::other("disk").into();
    assert_eq!(err.to_string(), "IO error: disk");

    let rejected = DemoError::Rejected { reason: "nope".to_owned() };
    assert_eq!(rejected.to_string(), "Rejected: nope");
}
