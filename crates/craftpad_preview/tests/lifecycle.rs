//! Locator accounting and failure-handling across the session lifecycle.

use craftpad_bundle::{assemble, CodeFileMap, PreviewDocument};
use craftpad_preview::{
    InMemoryHost, LocatorId, PreviewError, PreviewSession, ResourceHost, SessionState,
};

fn doc(marker: &str) -> PreviewDocument {
    let files: CodeFileMap = [("main.js".to_string(), format!("console.log(\"{marker}\");"))]
        .into_iter()
        .collect();
    assemble(&files, "t", "d", "en")
}

/// Host that fails every create attempt inside `fail_from..=fail_to`, by
/// attempt number, and delegates otherwise.
struct FlakyHost {
    inner: InMemoryHost,
    fail_from: u32,
    fail_to: u32,
    attempts: u32,
}

impl FlakyHost {
    fn failing(fail_from: u32, fail_to: u32) -> Self {
        Self {
            inner: InMemoryHost::new(),
            fail_from,
            fail_to,
            attempts: 0,
        }
    }
}

impl ResourceHost for FlakyHost {
    fn create(&mut self, doc: &PreviewDocument) -> craftpad_preview::Result<LocatorId> {
        self.attempts += 1;
        if self.attempts >= self.fail_from && self.attempts <= self.fail_to {
            return Err(PreviewError::HostFailed("out of blob memory".to_string()));
        }
        self.inner.create(doc)
    }

    fn revoke(&mut self, id: LocatorId) {
        self.inner.revoke(id);
    }
}

#[test]
fn sequential_regenerates_never_leak() {
    let mut session = PreviewSession::new(InMemoryHost::new());
    session.materialize(&doc("v0")).unwrap();

    for n in 1..=10 {
        session.regenerate(&doc(&format!("v{n}"))).unwrap();
        let host = session.host();
        // After every call: one live locator, and each create paired with
        // a revoke except the newest.
        assert_eq!(host.revoked(), host.created() - 1);
        assert_eq!(host.live(), 1);
    }

    let host = session.host();
    assert_eq!(host.created(), 11);
    assert_eq!(host.revoked(), 10);
}

#[test]
fn locator_serves_the_latest_document() {
    let mut session = PreviewSession::new(InMemoryHost::new());
    session.materialize(&doc("old")).unwrap();
    let id = session.regenerate(&doc("new")).unwrap().id();
    let served = session.host().document(id).unwrap();
    assert!(served.contains("new"));
}

#[test]
fn single_failure_is_retried_transparently() {
    let mut session = PreviewSession::new(FlakyHost::failing(1, 1));
    assert!(session.materialize(&doc("v0")).is_ok());
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn persistent_failure_keeps_last_good_locator() {
    // First materialize succeeds; every later attempt (including the retry)
    // fails.
    let mut session = PreviewSession::new(FlakyHost::failing(2, u32::MAX));
    let good = session.materialize(&doc("good")).unwrap().clone();

    let result = session.materialize(&doc("bad"));
    assert!(result.is_err());
    assert_eq!(session.state(), SessionState::Unavailable);
    assert_eq!(session.locator(), Some(&good));
    assert_eq!(session.host().inner.live(), 1);
    assert!(session.host().attempts >= 3);
}

#[test]
fn regenerate_failure_releases_and_flags_unavailable() {
    // Regenerate is release-then-create, so a persistent host failure
    // leaves the session with no locator rather than serving a stale one.
    let mut session = PreviewSession::new(FlakyHost::failing(2, u32::MAX));
    session.materialize(&doc("good")).unwrap();

    assert!(session.regenerate(&doc("bad")).is_err());
    assert_eq!(session.state(), SessionState::Unavailable);
    assert!(session.locator().is_none());
    assert_eq!(session.host().inner.live(), 0);
}

#[test]
fn regenerate_without_current_just_creates() {
    let mut session = PreviewSession::new(InMemoryHost::new());
    session.regenerate(&doc("v0")).unwrap();
    assert_eq!(session.host().created(), 1);
    assert_eq!(session.host().revoked(), 0);
}

#[test]
fn dispose_twice_is_a_noop_both_times() {
    let mut session = PreviewSession::new(InMemoryHost::new());
    session.materialize(&doc("v0")).unwrap();
    session.dispose();
    let after_first = session.host().revoked();
    session.dispose();
    assert_eq!(session.host().revoked(), after_first);
}

#[test]
fn recovery_after_unavailable() {
    let mut session = PreviewSession::new(FlakyHost::failing(1, 2));
    assert!(session.materialize(&doc("v0")).is_err());
    assert_eq!(session.state(), SessionState::Unavailable);

    // Host recovered; the next materialize succeeds and clears the flag.
    assert!(session.materialize(&doc("v1")).is_ok());
    assert_eq!(session.state(), SessionState::Ready);
}
