use herald_core::{EventKind, TriggerContext};

fn context(event: EventKind) -> TriggerContext {
    TriggerContext {
        event,
        owner: "octocat".into(),
        repo: "hello-world".into(),
        git_ref: "refs/heads/feature/scan".into(),
        pr_head_ref: Some("feature/scan".into()),
        workflow: "Scan artifact".into(),
        job: Some("notify".into()),
    }
}

#[test]
fn supported_events_resolve_to_the_same_head() {
    for event in [
        EventKind::Push,
        EventKind::PullRequest,
        EventKind::WorkflowDispatch,
    ] {
        let head = context(event).head_identity();
        assert_eq!(head.as_deref(), Some("octocat:feature/scan"), "{event:?}");
    }
}

#[test]
fn unsupported_event_resolves_to_nothing() {
    assert_eq!(context(EventKind::Unsupported).head_identity(), None);
}

#[test]
fn branch_names_with_slashes_survive_prefix_stripping() {
    let ctx = TriggerContext {
        git_ref: "refs/heads/release/2025-08".into(),
        pr_head_ref: None,
        ..context(EventKind::Push)
    };
    assert_eq!(ctx.head_identity().as_deref(), Some("octocat:release/2025-08"));
}
