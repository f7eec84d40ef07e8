use crate::error::StatisticsError;
use crate::page::{PageContent, render_page};
use axum::Form;
use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use tracing::{debug, warn};

const NUMBERS_FIELD: &str = "numbers";

/// Decoded form pairs in submission order. Repeated keys are kept.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct StatisticsForm(Vec<(String, String)>);

impl StatisticsForm {
    /// First `numbers` value; later duplicates are ignored.
    #[must_use]
    pub fn numbers(&self) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == NUMBERS_FIELD).map(|(_, value)| value.as_str())
    }
}

/// `GET /` and `POST /`: the form, plus results or an inline error.
///
/// Bad input never fails the request; the page always comes back `200 OK`. A body that is
/// not form-encoded carries no fields, so it renders the bare form.
pub async fn statistics_page(form: Result<Form<StatisticsForm>, FormRejection>) -> Html<String> {
    let outcome = match form {
        Ok(Form(form)) => crate::analyze(form.numbers().unwrap_or_default()),
        Err(FormRejection::InvalidFormContentType(rejection)) => {
            debug!(%rejection, "Submission is not form-encoded");
            Ok(None)
        },
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected form submission");
            Err(StatisticsError::Form { message: rejection.body_text().into(), context: None })
        },
    };

    let html = match &outcome {
        Ok(None) => render_page(&PageContent::Blank),
        Ok(Some(stats)) => render_page(&PageContent::Results(stats)),
        Err(err) => render_page(&PageContent::Error(&err.to_string())),
    };

    Html(html)
}

/// Routes of the statistics slice.
pub fn router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::new().route("/", get(statistics_page).post(statistics_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> StatisticsForm {
        StatisticsForm(pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
    }

    #[test]
    fn first_numbers_value_wins() {
        let form = form(&[("other", "9"), ("numbers", "1 2"), ("numbers", "3")]);
        assert_eq!(form.numbers(), Some("1 2"));
    }

    #[test]
    fn absent_field_is_none() {
        assert_eq!(form(&[("other", "9")]).numbers(), None);
        assert_eq!(StatisticsForm::default().numbers(), None);
    }
}
