//! Strategy 4: per-field regex fallback.
//!
//! Last resort for responses that no longer resemble JSON. Each field is
//! recovered independently by trying six increasingly permissive patterns;
//! the first match per field wins. Captured values still carry their escape
//! sequences, so they are manually unescaped afterwards.

use regex::Regex;

use crate::artifact::ExtractedCodeArtifact;

lazy_static::lazy_static! {
    static ref HTML_PATTERNS: Vec<Regex> = field_patterns("html");
    static ref CSS_PATTERNS: Vec<Regex> = field_patterns("css");
    static ref JS_PATTERNS: Vec<Regex> = field_patterns("js");
    static ref DESCRIPTION_PATTERNS: Vec<Regex> = field_patterns("description");
}

/// The six patterns, most strict first: plain double-quoted, escape-aware
/// double-quoted, backtick-delimited, single-quoted, loose key spacing,
/// end-of-object tolerant.
fn field_patterns(field: &str) -> Vec<Regex> {
    [
        format!(r#"(?s)"{field}"\s*:\s*"([^"\\]*)""#),
        format!(r#"(?s)"{field}"\s*:\s*"((?:\\.|[^"\\])*)""#),
        format!(r#"(?s)"{field}"\s*:\s*`([^`]*)`"#),
        format!(r#"(?s)"{field}"\s*:\s*'((?:\\.|[^'\\])*)'"#),
        format!(r#"(?s)['"]?{field}['"]?\s*:\s*["'`]((?:\\.|[^"'`\\])*)["'`]"#),
        format!(r#"(?s)"{field}"\s*:\s*"(.*?)"\s*[,}}]"#),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

fn capture_field(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .map(|caps| unescape(caps.get(1).unwrap().as_str()))
    })
}

/// Manually resolve the escape sequences a captured value may carry:
/// `\n \r \t \f \b \" \' \/ \\`, `\uXXXX` and `\xNN`. Unknown escapes are
/// kept verbatim.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('f') => out.push('\x0c'),
            Some('b') => out.push('\x08'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('/') => out.push('/'),
            Some('\\') => out.push('\\'),
            Some('u') => push_hex_escape(&mut out, &mut chars, 4, "\\u"),
            Some('x') => push_hex_escape(&mut out, &mut chars, 2, "\\x"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn push_hex_escape(out: &mut String, chars: &mut std::str::Chars, len: usize, prefix: &str) {
    let digits: String = chars.clone().take(len).collect();
    if digits.len() == len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let code = u32::from_str_radix(&digits, 16).unwrap_or(0);
        match char::from_u32(code) {
            Some(c) => out.push(c),
            None => {
                out.push_str(prefix);
                out.push_str(&digits);
            }
        }
        for _ in 0..len {
            chars.next();
        }
    } else {
        out.push_str(prefix);
    }
}

pub fn run(text: &str) -> Option<ExtractedCodeArtifact> {
    let html = capture_field(&HTML_PATTERNS, text)?;
    let css = capture_field(&CSS_PATTERNS, text)?;
    let js = capture_field(&JS_PATTERNS, text)?;
    let artifact =
        ExtractedCodeArtifact::new(html, css, js, capture_field(&DESCRIPTION_PATTERNS, text));
    artifact.has_required_fields().then_some(artifact)
}

/// Which of html/css/js did NOT match any pattern. Used by the chain to
/// distinguish "partial" from "nothing recognizable" after all strategies
/// fail.
pub fn missing_required_fields(text: &str) -> Vec<String> {
    let tables: [(&str, &Vec<Regex>); 3] = [
        ("html", &HTML_PATTERNS),
        ("css", &CSS_PATTERNS),
        ("js", &JS_PATTERNS),
    ];
    tables
        .iter()
        .filter(|(_, patterns)| capture_field(patterns, text).is_none())
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_double_quoted_fields_with_escapes() {
        let text = r#"html: broken json "html": "<h1>\"Hi\"</h1>", "css": "h1{}\n", "js": "f(\t1)""#;
        let artifact = run(text).unwrap();
        assert_eq!(artifact.html, "<h1>\"Hi\"</h1>");
        assert_eq!(artifact.css, "h1{}\n");
        assert_eq!(artifact.js, "f(\t1)");
    }

    #[test]
    fn recovers_single_quoted_fields() {
        let text = r#""html": '<p>x</p>', "css": 'p{}', "js": 'f()'"#;
        assert!(run(text).is_some());
    }

    #[test]
    fn unescapes_unicode_and_hex() {
        assert_eq!(unescape(r"A\x42"), "AB");
        assert_eq!(unescape(r"\uZZZZ"), "\\uZZZZ");
    }

    #[test]
    fn keeps_unknown_escapes_verbatim() {
        assert_eq!(unescape(r"a\qb"), "a\\qb");
    }

    #[test]
    fn reports_missing_fields() {
        let text = r#""html": "<p>x</p>" and some prose"#;
        let missing = missing_required_fields(text);
        assert_eq!(missing, vec!["css".to_string(), "js".to_string()]);
    }
}
