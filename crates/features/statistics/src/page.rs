//! HTML rendering of the statistics form page.

use crate::summary::Statistics;
use std::borrow::Cow;

const PAGE_TOP: &str = r#"<!DOCTYPE HTML><html><head>
<style>.error{color:#FF0000;}</style><title>Statistics</title></head>
<body><h3>Statistics</h3>
<p>Computes basic statistics for a given list of numbers</p>"#;

const FORM: &str = r#"<form action="/" method="POST">
<label for="numbers">Numbers (comma or space-separated):</label><br />
<input type="text" name="numbers" id="numbers" size="30"><br />
<input type="submit" value="Calculate">
</form>"#;

const PAGE_BOTTOM: &str = "</body></html>";

/// What a request produced, ready to be laid out on the page.
#[derive(Debug)]
pub enum PageContent<'a> {
    /// First visit or blank submission.
    Blank,
    Results(&'a Statistics),
    Error(&'a str),
}

/// Renders the whole document: form, then results or an error paragraph.
#[must_use]
pub fn render_page(content: &PageContent<'_>) -> String {
    let mut html = String::with_capacity(PAGE_TOP.len() + FORM.len() + 512);
    html.push_str(PAGE_TOP);
    html.push_str(FORM);

    match content {
        PageContent::Blank => {},
        PageContent::Results(stats) => html.push_str(&render_table(stats)),
        PageContent::Error(message) => {
            html.push_str(&format!(r#"<p class="error">{}</p>"#, escape_html(message)));
        },
    }

    html.push_str(PAGE_BOTTOM);
    html
}

/// Results table; floats in six-digit fixed point, the list in shortest form.
#[must_use]
pub fn render_table(stats: &Statistics) -> String {
    let numbers: Vec<String> = stats.numbers().iter().map(ToString::to_string).collect();

    format!(
        r#"<table border="1">
<tr><th colspan="2">Results</th></tr>
<tr><td>Numbers</td><td>[{}]</td></tr>
<tr><td>Count</td><td>{}</td></tr>
<tr><td>Mean</td><td>{:.6}</td></tr>
<tr><td>Median</td><td>{:.6}</td></tr>
<tr><td>StdDev</td><td>{:.6}</td></tr>
<tr><td>Mode</td><td>{:.6}</td></tr>
</table>"#,
        numbers.join(" "),
        stats.count(),
        stats.mean(),
        stats.median(),
        stats.std_dev(),
        stats.mode(),
    )
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_page_is_the_bare_form() {
        let html = render_page(&PageContent::Blank);
        assert!(html.starts_with("<!DOCTYPE HTML>"));
        assert!(html.contains(r#"name="numbers""#));
        assert!(!html.contains("<table"));
        assert!(!html.contains(r#"class="error""#));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn results_table_uses_fixed_point() {
        let stats = Statistics::compute(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let html = render_page(&PageContent::Results(&stats));

        assert!(html.contains("<td>Numbers</td><td>[1 2 3 4]</td>"));
        assert!(html.contains("<td>Count</td><td>4</td>"));
        assert!(html.contains("<td>Mean</td><td>2.500000</td>"));
        assert!(html.contains("<td>Median</td><td>2.500000</td>"));
        assert!(html.contains("<td>StdDev</td><td>1.118034</td>"));
        assert!(html.contains("<td>Mode</td><td>1.000000</td>"));
    }

    #[test]
    fn error_paragraph_is_escaped() {
        let html = render_page(&PageContent::Error("'<b>' is invalid"));
        assert!(html.contains(r#"<p class="error">'&lt;b&gt;' is invalid</p>"#));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("'x' is invalid"), Cow::Borrowed(_)));
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }
}
