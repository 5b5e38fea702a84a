//! Built-in CommonMark inline transformation units.

use mdtree_core::{AutolinkKind, Inline};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Transform, TransformFn};
use crate::options::InlineOptions;
use crate::utilities::{is_escaped, run_length, trailing_run};

static AUTOLINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^<(?:",
        r"(?P<uri>[A-Za-z][A-Za-z0-9+.\-]{1,31}:[^<>\x00-\x20]*)",
        r"|",
        r"(?P<email>[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*)",
        r")>",
    ))
    .expect("autolink pattern is valid")
});

static RAW_HTML_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?:"#,
        // open tag with attributes
        r#"<[A-Za-z][A-Za-z0-9\-]*"#,
        r#"(?:\s+[A-Za-z_:][A-Za-z0-9_.:\-]*(?:\s*=\s*(?:[^\s"'=<>`]+|'[^']*'|"[^"]*"))?)*"#,
        r#"\s*/?>"#,
        // closing tag
        r#"|</[A-Za-z][A-Za-z0-9\-]*\s*>"#,
        // comment
        r#"|<!--[\s\S]*?-->"#,
        r#")"#,
    ))
    .expect("raw html pattern is valid")
});

/// Constructs recognized by one left-to-right scan
#[derive(Debug, Clone, Copy)]
struct Constructs {
    code_spans: bool,
    autolinks: bool,
    raw_html: bool,
}

/// Create the enabled built-in units in precedence order.
///
/// Code spans, autolinks and raw HTML bind equally tightly: whichever starts
/// first wins. They are therefore recognized by a single scanning unit,
/// `code_autolinks_html`. Line breaks run afterwards on what is left.
pub fn commonmark_transforms(options: &InlineOptions) -> Vec<Box<dyn Transform>> {
    let mut transforms = Vec::new();
    if options.code_spans || options.autolinks || options.raw_html {
        transforms.push(code_autolink_html_transform(options).boxed());
    }
    if options.line_breaks {
        transforms.push(line_break_transform().boxed());
    }
    transforms
}

/// Code spans, autolinks and raw HTML in one pass, as selected by `options`
pub fn code_autolink_html_transform(options: &InlineOptions) -> TransformFn {
    let constructs = Constructs {
        code_spans: options.code_spans,
        autolinks: options.autolinks,
        raw_html: options.raw_html,
    };
    TransformFn::raw("code_autolinks_html", move |text| split_constructs(text, constructs))
}

pub fn code_span_transform() -> TransformFn {
    let constructs = Constructs {
        code_spans: true,
        autolinks: false,
        raw_html: false,
    };
    TransformFn::raw("code_spans", move |text| split_constructs(text, constructs))
}

pub fn autolink_transform() -> TransformFn {
    let constructs = Constructs {
        code_spans: false,
        autolinks: true,
        raw_html: false,
    };
    TransformFn::raw("autolinks", move |text| split_constructs(text, constructs))
}

pub fn raw_html_transform() -> TransformFn {
    let constructs = Constructs {
        code_spans: false,
        autolinks: false,
        raw_html: true,
    };
    TransformFn::raw("raw_html", move |text| split_constructs(text, constructs))
}

pub fn line_break_transform() -> TransformFn {
    TransformFn::raw("line_breaks", split_line_breaks)
}

/// Scan left to right, claiming the first construct that starts at each
/// unescaped backtick or `<`. A backtick run without a matching closer stays
/// literal as a whole.
fn split_constructs(text: &str, constructs: Constructs) -> Vec<Inline> {
    let bytes = text.as_bytes();
    let mut result = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        if (byte != b'`' && byte != b'<') || is_escaped(bytes, pos) {
            pos += 1;
            continue;
        }

        let found = match byte {
            b'`' if constructs.code_spans => {
                let open_len = run_length(bytes, pos, b'`');
                let content_start = pos + open_len;
                match find_closing_run(bytes, content_start, open_len) {
                    Some(close) => Some((
                        Inline::Code(normalize_code(&text[content_start..close])),
                        close + open_len,
                    )),
                    None => {
                        pos = content_start;
                        continue;
                    }
                }
            }
            b'<' => match_angle(&text[pos..], constructs).map(|(inline, len)| (inline, pos + len)),
            _ => None,
        };

        match found {
            Some((inline, end)) => {
                result.push(Inline::Text(text[literal_start..pos].to_string()));
                result.push(inline);
                pos = end;
                literal_start = end;
            }
            None => pos += 1,
        }
    }

    result.push(Inline::Text(text[literal_start..].to_string()));
    result
}

/// Autolink or raw HTML at the start of `rest`, with its byte length
fn match_angle(rest: &str, constructs: Constructs) -> Option<(Inline, usize)> {
    if constructs.autolinks {
        if let Some(captures) = AUTOLINK_REGEX.captures(rest) {
            let len = captures.get(0).map_or(0, |m| m.end());
            let (kind, target) = match (captures.name("uri"), captures.name("email")) {
                (Some(uri), _) => (AutolinkKind::Uri, uri.as_str()),
                (None, email) => (AutolinkKind::Email, email.map_or("", |m| m.as_str())),
            };
            return Some((
                Inline::Autolink {
                    kind,
                    target: target.to_string(),
                },
                len,
            ));
        }
    }
    if constructs.raw_html {
        if let Some(html) = RAW_HTML_REGEX.find(rest) {
            return Some((Inline::Html(html.as_str().to_string()), html.end()));
        }
    }
    None
}

fn find_closing_run(bytes: &[u8], from: usize, len: usize) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos] == b'`' {
            let run = run_length(bytes, pos, b'`');
            if run == len {
                return Some(pos);
            }
            pos += run;
        } else {
            pos += 1;
        }
    }
    None
}

fn normalize_code(content: &str) -> String {
    let content = content.replace("\r\n", " ").replace('\n', " ");
    let padded = content.len() >= 2 && content.starts_with(' ') && content.ends_with(' ');
    if padded && !content.bytes().all(|b| b == b' ') {
        content[1..content.len() - 1].to_string()
    } else {
        content
    }
}

/// Two or more trailing spaces or an unescaped trailing backslash make a
/// hard break
fn split_line_breaks(text: &str) -> Vec<Inline> {
    let mut result = Vec::new();
    let mut lines = text.split('\n').enumerate().peekable();

    while let Some((i, line)) = lines.next() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line = if i == 0 { line } else { line.trim_start_matches(' ') };

        if lines.peek().is_none() {
            result.push(Inline::Text(line.to_string()));
            break;
        }

        let trimmed = line.trim_end_matches(' ');
        let backslashes = trailing_run(line.as_bytes(), line.len(), b'\\');
        if backslashes % 2 == 1 {
            result.push(Inline::Text(line[..line.len() - 1].to_string()));
            result.push(Inline::LineBreak);
        } else if line.len() - trimmed.len() >= 2 {
            result.push(Inline::Text(trimmed.to_string()));
            result.push(Inline::LineBreak);
        } else {
            result.push(Inline::Text(trimmed.to_string()));
            result.push(Inline::SoftBreak);
        }
    }

    result
}
