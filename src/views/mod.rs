//! HTML rendering
//!
//! Pages are assembled from typed records; every value that came from the
//! database or a form passes through [`escape`] before it reaches the output.

pub mod pages;

use std::fmt::Write;

/// Escape text for use inside HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document skeleton
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n<p><a href=\"/\">Back to home</a></p>\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

/// Render a table with a header row; cells are escaped
pub fn table<R>(headers: &[&str], rows: &[R], cells: impl Fn(&R) -> Vec<String>) -> String {
    if rows.is_empty() {
        return "<p>No results.</p>".to_string();
    }

    let mut html = String::from("<table>\n<tr>");
    for header in headers {
        let _ = write!(html, "<th>{}</th>", escape(header));
    }
    html.push_str("</tr>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in cells(row) {
            let _ = write!(html, "<td>{}</td>", escape(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}

/// Render a plain bullet list; items are escaped
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    let mut html = String::from("<ul>\n");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape(item.as_ref()));
    }
    html.push_str("</ul>");
    html
}
