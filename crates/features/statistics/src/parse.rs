use crate::error::StatisticsError;

/// Parses a comma- and/or whitespace-separated list of numbers.
///
/// All or nothing: the first token that is not a valid `f64` aborts the whole parse.
/// Blank input is an empty list.
///
/// # Errors
/// Returns [`StatisticsError::InvalidToken`] naming the first offending token.
///
/// ```
/// use primer_statistics::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2.5 -3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert_eq!(parse_numbers("1, x, 3").unwrap_err().to_string(), "'x' is invalid");
/// ```
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, StatisticsError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| StatisticsError::InvalidToken { token: token.to_owned(), context: None })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_and_spaces_are_interchangeable() {
        let expected = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(parse_numbers("1, 2, 3, 4").unwrap(), expected);
        assert_eq!(parse_numbers("1 2 3 4").unwrap(), expected);
        assert_eq!(parse_numbers("1,2,,3\t\n4").unwrap(), expected);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_numbers("").unwrap().is_empty());
        assert!(parse_numbers("  , ,\n").unwrap().is_empty());
    }

    #[test]
    fn scientific_and_signed_forms_parse() {
        assert_eq!(parse_numbers("-1.5 +2 1e3 .5").unwrap(), vec![-1.5, 2.0, 1000.0, 0.5]);
    }

    #[test]
    fn first_bad_token_is_reported() {
        let err = parse_numbers("1, x, 3, y").unwrap_err();
        assert!(matches!(&err, StatisticsError::InvalidToken { token, .. } if token == "x"));
        assert_eq!(err.to_string(), "'x' is invalid");
    }

    #[test]
    fn tokens_glued_to_text_are_rejected_whole() {
        let err = parse_numbers("12abc 4").unwrap_err();
        assert_eq!(err.to_string(), "'12abc' is invalid");
    }
}
