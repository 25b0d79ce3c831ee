//! HTML rendering for the interactive form.

use crate::models::{prime_indicator, Report};
use crate::report::generate_json_report;
use tracing::warn;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#fafafa;color:#262730;margin:0}\
main{max-width:730px;margin:0 auto;padding:3rem 1rem}\
.columns{display:flex;gap:1rem}.columns label{flex:1;display:flex;flex-direction:column;gap:.25rem}\
input{padding:.5rem;font-size:1rem}\
button{margin-top:1rem;padding:.5rem 1rem;font-size:1rem;cursor:pointer}\
pre{background:#f0f2f6;padding:.75rem;border-radius:.25rem;overflow-x:auto}\
.success{background:#dff5e3;color:#176c2c;padding:1rem;border-radius:.25rem}\
.error{background:#fde4e4;color:#9c1c1c;padding:1rem;border-radius:.25rem}\
.caption{color:#808495;font-size:.85rem}";

/// What to show beneath the form.
pub enum Outcome<'a> {
    /// Nothing has been submitted yet.
    Empty,
    /// A successful evaluation.
    Report(&'a Report),
    /// A message explaining why evaluation failed.
    Error(&'a str),
}

/// Render the full form page.
///
/// `a` and `b` are echoed back into the inputs exactly as submitted.
pub fn render_page(title: &str, a: &str, b: &str, outcome: Outcome<'_>) -> String {
    let title = escape_html(title);
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str(&format!("<style>{}</style>\n", STYLE));
    page.push_str("</head>\n<body>\n<main>\n");

    page.push_str(&format!("<h1>🧮 {}</h1>\n", title));
    page.push_str(
        "<p>Public demo agent. Enter two whole numbers. \
         The agent will calculate add / subtract / multiply \
         and tell you if each number is prime.</p>\n",
    );
    page.push_str(&render_form(a, b));

    match outcome {
        Outcome::Empty => {}
        Outcome::Report(report) => page.push_str(&render_results(report)),
        Outcome::Error(message) => page.push_str(&format!(
            "<div class=\"error\">{}</div>\n",
            escape_html(message)
        )),
    }

    page.push_str("<hr>\n");
    page.push_str(
        "<p class=\"caption\">This is a public-safe agent example. \
         No personal data, no API keys, no company secrets.</p>\n",
    );
    page.push_str("</main>\n</body>\n</html>\n");

    page
}

fn render_form(a: &str, b: &str) -> String {
    let mut form = String::new();

    form.push_str("<form method=\"get\" action=\"/evaluate\">\n<div class=\"columns\">\n");
    form.push_str(&format!(
        "<label>Number A <input type=\"number\" name=\"a\" step=\"1\" value=\"{}\"></label>\n",
        escape_html(a)
    ));
    form.push_str(&format!(
        "<label>Number B <input type=\"number\" name=\"b\" step=\"1\" value=\"{}\"></label>\n",
        escape_html(b)
    ));
    form.push_str("</div>\n<button type=\"submit\">Run Agent</button>\n</form>\n");

    form
}

fn render_results(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("<section class=\"results\">\n<h2>Results</h2>\n");

    for (operation, result) in report.operations.iter() {
        section.push_str(&format!(
            "<h4>{} {}</h4>\n<pre><code>{}</code></pre>\n",
            operation.emoji(),
            operation,
            result.equation()
        ));
    }

    section.push_str("<h4>🔍 Prime Check</h4>\n");
    for (n, is_prime) in report.prime_checks() {
        section.push_str(&format!(
            "<p>Is <strong>{}</strong> prime? {}</p>\n",
            n,
            prime_indicator(is_prime)
        ));
    }

    section.push_str("<hr>\n<h4>🗒 Summary (ready to copy/paste)</h4>\n");
    section.push_str(&format!(
        "<div class=\"success\">{}</div>\n",
        escape_html(&report.summary_text)
    ));

    section.push_str(&developer_view(generate_json_report(report)));
    section.push_str("</section>\n");

    section
}

/// Collapsible JSON block, or a visible notice if serialization failed.
fn developer_view(json: anyhow::Result<String>) -> String {
    let body = match json {
        Ok(json) => format!("<pre><code>{}</code></pre>\n", escape_html(&json)),
        Err(e) => {
            warn!("Failed to serialize report for developer view: {:#}", e);
            format!(
                "<p class=\"error\">Developer view unavailable: {}</p>\n",
                escape_html(&format!("{:#}", e))
            )
        }
    };

    format!(
        "<details>\n<summary>Developer View (JSON output)</summary>\n{}</details>\n",
        body
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::evaluate;

    #[test]
    fn test_render_empty_page() {
        let page = render_page("AI Math Agent Demo", "7", "10", Outcome::Empty);

        assert!(page.contains("<title>AI Math Agent Demo</title>"));
        assert!(page.contains("name=\"a\" step=\"1\" value=\"7\""));
        assert!(page.contains("name=\"b\" step=\"1\" value=\"10\""));
        assert!(page.contains("Run Agent"));
        assert!(!page.contains("Results"));
    }

    #[test]
    fn test_render_report_page() {
        let report = evaluate(7, 10).unwrap();
        let page = render_page("Demo", "7", "10", Outcome::Report(&report));

        assert!(page.contains("<h4>➕ Addition</h4>\n<pre><code>7 + 10 = 17</code></pre>"));
        assert!(page.contains("<pre><code>7 - 10 = -3</code></pre>"));
        assert!(page.contains("<pre><code>7 * 10 = 70</code></pre>"));
        assert!(page.contains("Is <strong>7</strong> prime? ✅ Yes"));
        assert!(page.contains("Is <strong>10</strong> prime? ❌ No"));
        assert!(page.contains(&report.summary_text));
        assert!(page.contains("Developer View (JSON output)"));
        assert!(page.contains("&quot;summary_text&quot;"));
    }

    #[test]
    fn test_developer_view_reports_serialization_failure() {
        let view = developer_view(Err(anyhow::anyhow!("boom <x>")));

        assert!(view.contains("Developer View (JSON output)"));
        assert!(view.contains("Developer view unavailable: boom &lt;x&gt;"));
        assert!(!view.contains("<pre>"));
    }

    #[test]
    fn test_render_error_page_escapes_input() {
        let page = render_page(
            "Demo",
            "<script>",
            "10",
            Outcome::Error("Number A must be a number, got '<script>'"),
        );

        assert!(!page.contains("<script>"));
        assert!(page.contains("value=\"&lt;script&gt;\""));
        assert!(page.contains("<div class=\"error\">Number A must be a number, got &#39;&lt;script&gt;&#39;</div>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
