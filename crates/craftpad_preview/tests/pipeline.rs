//! Full pipeline: raw model text to a served preview locator.

use craftpad_bundle::{assemble, CodeFileMap};
use craftpad_extract::{extract, ExtractedCodeArtifact};
use craftpad_preview::{InMemoryHost, PreviewSession};

fn file_map(artifact: &ExtractedCodeArtifact) -> CodeFileMap {
    let mut files = CodeFileMap::new();
    files.insert("index.html", artifact.html.clone());
    files.insert("style.css", artifact.css.clone());
    files.insert("script.js", artifact.js.clone());
    files
}

#[test]
fn model_response_becomes_a_preview() {
    let raw = "Here is your page:\n```json\n{\"html\":\"<html><head></head><body><h1>Hi</h1></body></html>\",\"css\":\"h1{color:blue}\",\"js\":\"console.log(1)\",\"description\":\"demo\"}\n```";
    let artifact = extract(raw).unwrap();
    let doc = assemble(&file_map(&artifact), "demo", &artifact.description, "en");
    assert_eq!(doc.csp_tag_count(), 1);

    let mut session = PreviewSession::new(InMemoryHost::new());
    let id = session.materialize(&doc).unwrap().id();
    let served = session.host().document(id).unwrap();
    assert!(served.contains("<h1>Hi</h1>"));
    assert!(served.contains("h1{color:blue}"));
}

#[test]
fn garbage_response_still_previews_via_placeholder() {
    let artifact = extract("I could not generate anything useful.")
        .unwrap_or_else(|_| ExtractedCodeArtifact::placeholder());
    let mut files = CodeFileMap::new();
    files.insert("index.html", artifact.html);
    files.insert("style.css", artifact.css);
    let doc = assemble(&files, "demo", &artifact.description, "en");

    let mut session = PreviewSession::new(InMemoryHost::new());
    let id = session.materialize(&doc).unwrap().id();
    assert!(session
        .host()
        .document(id)
        .unwrap()
        .contains("Generation incomplete"));
}
