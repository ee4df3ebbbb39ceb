use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn assessment_smoke_starts_at_intake() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Before we begin"), "missing intake title in {html}");
    assert!(
        html.contains("Start the Assessment"),
        "missing start button in {html}"
    );
    assert!(html.contains("Yes, 12+ years"), "missing education buttons in {html}");
    assert!(
        html.contains("No, less than 12 years"),
        "missing education buttons in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn about_smoke_renders_copy() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("About Recall"), "missing title in {html}");
    assert!(html.contains("screening aid"), "missing disclaimer in {html}");
}
