//! Strategy 1: direct backtick-field extraction.
//!
//! Matches `"html": `...``-shaped fields independently anywhere in the text,
//! in any order. Succeeds only when html, css and js all match. Backticks
//! nested inside a value are not supported; the value simply ends at the
//! first closing backtick.

use regex::Regex;

use crate::artifact::ExtractedCodeArtifact;

lazy_static::lazy_static! {
    static ref HTML: Regex = field_pattern("html");
    static ref CSS: Regex = field_pattern("css");
    static ref JS: Regex = field_pattern("js");
    static ref DESCRIPTION: Regex = field_pattern("description");
}

fn field_pattern(field: &str) -> Regex {
    Regex::new(&format!(r#"(?s)"{}"\s*:\s*`([^`]*)`"#, field)).unwrap()
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps.get(1).unwrap().as_str().to_string())
}

pub fn run(text: &str) -> Option<ExtractedCodeArtifact> {
    let html = capture(&HTML, text)?;
    let css = capture(&CSS, text)?;
    let js = capture(&JS, text)?;
    let artifact = ExtractedCodeArtifact::new(html, css, js, capture(&DESCRIPTION, text));
    artifact.has_required_fields().then_some(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backtick_fields_in_any_order() {
        let text = r#"{
  "css": `h1 { color: blue; }`,
  "html": `<h1>Hi</h1>`,
  "description": `demo`,
  "js": `console.log(1)`
}"#;
        let artifact = run(text).unwrap();
        assert_eq!(artifact.html, "<h1>Hi</h1>");
        assert_eq!(artifact.css, "h1 { color: blue; }");
        assert_eq!(artifact.js, "console.log(1)");
        assert_eq!(artifact.description, "demo");
    }

    #[test]
    fn multiline_values() {
        let text = "\"html\": `<div>\n<p>two lines</p>\n</div>`, \"css\": `p{}`, \"js\": `f()`";
        let artifact = run(text).unwrap();
        assert!(artifact.html.contains("two lines"));
    }

    #[test]
    fn fails_when_a_required_field_is_absent() {
        let text = r#""html": `<p>x</p>`, "css": `p{}`"#;
        assert!(run(text).is_none());
    }

    #[test]
    fn ignores_quoted_fields() {
        let text = r#""html": "<p>x</p>", "css": "p{}", "js": "f()""#;
        assert!(run(text).is_none());
    }
}
