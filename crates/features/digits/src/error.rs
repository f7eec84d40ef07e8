use std::borrow::Cow;

#[primer_derive::primer_error]
pub enum DigitsError {
    #[error("Invalid number{}: {message}", format_context(.context))]
    InvalidNumber { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
