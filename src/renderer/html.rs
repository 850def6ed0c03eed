//! HTML document generation for schedule-change reports

use crate::error::ReportError;
use crate::models::{Lesson, ReportContext};
use std::fmt::Write as _;

/// Heading date layout: full weekday name, full month name, zero-padded day,
/// four-digit year ("Friday, March 15, 2024").
const HEADING_DATE_FORMAT: &str = "%A, %B %d, %Y";

const PLACEHOLDER: &str = "(no lesson)";
const CANCELED_MARKER: &str = "(canceled)";

const STYLE: &str = "\
body{margin:0;background:#f7fafc;color:#1f2933;font-family:Segoe UI,system-ui,-apple-system,Arial,sans-serif}\
.container{max-width:860px;margin:0 auto;padding:24px}\
h1{font-size:20px;font-weight:600;margin:0 0 16px 0}\
table{width:100%;border-collapse:collapse;background:#ffffff;border:1px solid #d9e2ec}\
th{background:#eef2f7;text-align:left;font-weight:600;padding:10px;border:1px solid #d9e2ec;width:50%}\
td{padding:10px;border:1px solid #d9e2ec;vertical-align:top}\
.time{color:#52606d;font-size:13px}\
.name{font-weight:600;margin:2px 0}\
.name.canceled{text-decoration:line-through;color:#ab091e}\
.marker{font-weight:400;font-size:13px;color:#ab091e;text-decoration:none;display:inline-block;margin-left:4px}\
.teacher{font-size:13px}\
.room{color:#52606d;font-size:13px}\
.empty{color:#9aa5b1;font-style:italic}";

/// Build the full report document.
///
/// Fails with `MissingField` when `change_info` is blank and with
/// `MalformedDate` when the heading date cannot be formatted; every other
/// context renders.
pub fn render_document(context: &ReportContext) -> Result<String, ReportError> {
    if context.change_info.trim().is_empty() {
        return Err(ReportError::missing("change-info"));
    }
    let heading = heading_text(context)?;

    let mut doc = String::with_capacity(4 * 1024);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(doc, "<title>{}</title>", escape(&context.change_info));
    let _ = writeln!(doc, "<style>{}</style>", STYLE);
    doc.push_str("</head>\n<body>\n<div class=\"container\">\n");
    let _ = writeln!(doc, "<h1>{}</h1>", escape(&heading));

    doc.push_str("<table>\n<thead>\n");
    doc.push_str("<tr><th>Previous Lesson</th><th>New Lesson</th></tr>\n");
    doc.push_str("</thead>\n<tbody>\n");
    for pair in &context.lesson_pairs {
        doc.push_str("<tr class=\"pair\">");
        push_cell(&mut doc, pair.previous.as_ref());
        push_cell(&mut doc, pair.new.as_ref());
        doc.push_str("</tr>\n");
    }
    doc.push_str("</tbody>\n</table>\n");

    doc.push_str("</div>\n</body>\n</html>\n");
    Ok(doc)
}

/// Plain-text heading: `<change_info> for <Weekday>, <Month> <Day>, <Year>`.
/// Escaping happens at embed time.
fn heading_text(context: &ReportContext) -> Result<String, ReportError> {
    let mut date_text = String::new();
    write!(date_text, "{}", context.day_date.format(HEADING_DATE_FORMAT))
        .map_err(|_| ReportError::malformed_date(context.day_date.to_string()))?;
    Ok(format!("{} for {}", context.change_info, date_text))
}

fn push_cell(doc: &mut String, lesson: Option<&Lesson>) {
    let lesson = match lesson {
        Some(lesson) => lesson,
        None => {
            let _ = write!(doc, "<td class=\"empty\">{}</td>", PLACEHOLDER);
            return;
        }
    };

    doc.push_str("<td>");
    let _ = write!(doc, "<div class=\"time\">{}</div>", escape(&lesson.time));
    if lesson.is_canceled {
        let _ = write!(
            doc,
            "<div class=\"name canceled\">{} <span class=\"marker\">{}</span></div>",
            escape(&lesson.name),
            CANCELED_MARKER
        );
    } else {
        let _ = write!(doc, "<div class=\"name\">{}</div>", escape(&lesson.name));
    }
    let _ = write!(doc, "<div class=\"teacher\">{}</div>", escape(&lesson.teacher));
    let _ = write!(doc, "<div class=\"room\">Room: {}</div>", escape(&lesson.classroom));
    doc.push_str("</td>");
}

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
