use std::borrow::Cow;

/// Reasons a submission produces no statistics.
#[primer_derive::primer_error]
pub enum StatisticsError {
    /// A token of the submitted list is not a number.
    #[error("'{token}' is invalid{}", format_context(.context))]
    InvalidToken { token: String, context: Option<Cow<'static, str>> },

    /// The request body could not be decoded as a form.
    #[error("Invalid form submission{}: {message}", format_context(.context))]
    Form { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
