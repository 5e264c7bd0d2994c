//! Overview, interface and application commands over the embedded catalog.

mod support;

use slawatch_domain::SlaStatus;
use slawatch_lib::{
    get_application_health, get_interface, get_organization, get_overview, get_status_summary,
    list_interfaces, search_applications,
};
use support::setup_context;

#[tokio::test(flavor = "multi_thread")]
async fn overview_counts_the_catalog() {
    let (ctx, _dir) = setup_context().await;

    let overview = get_overview(&ctx).await.unwrap();

    assert_eq!((overview.applications, overview.interfaces, overview.datasets), (5, 6, 12));
    assert_eq!(overview.summary.total, 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_summary_includes_percentages() {
    let (ctx, _dir) = setup_context().await;

    let response = get_status_summary(&ctx).await.unwrap();

    assert_eq!(response.summary.count(SlaStatus::Breached), 2);
    assert_eq!(response.summary.count(SlaStatus::AtRisk), 1);
    assert_eq!(response.summary.count(SlaStatus::OnSchedule), 3);
    assert!((response.percentages.on_schedule - 50.0).abs() < 1e-9);
    let sum = response.percentages.breached
        + response.percentages.at_risk
        + response.percentages.on_schedule;
    assert!((sum - 100.0).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread")]
async fn organization_sums_match_first_interface_per_application() {
    let (ctx, _dir) = setup_context().await;

    let org = get_organization(&ctx).await.unwrap();
    let it = org.department("dept1").unwrap();

    assert_eq!((it.metrics.breached, it.metrics.at_risk, it.metrics.on_schedule), (1, 1, 0));
    assert_eq!(org.metrics().total(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_interfaces_filters_by_tab() {
    let (ctx, _dir) = setup_context().await;

    let breached = list_interfaces(&ctx, "breached").await.unwrap();
    let ids: Vec<_> = breached.iter().map(|iface| iface.id.as_str()).collect();
    assert_eq!(ids, ["if1", "if6"]);

    assert_eq!(list_interfaces(&ctx, "all").await.unwrap().len(), 6);
    assert_eq!(list_interfaces(&ctx, "At-Risk").await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_tab_is_invalid_input() {
    let (ctx, _dir) = setup_context().await;

    let err = list_interfaces(&ctx, "late").await.unwrap_err();

    assert!(err.starts_with("Invalid input"), "unexpected error: {err}");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_interface_notifies_and_fails() {
    let (ctx, _dir) = setup_context().await;
    let mut rx = ctx.notifications.subscribe();

    assert_eq!(get_interface(&ctx, "if3").await.unwrap().name, "Financial Reports");
    let err = get_interface(&ctx, "if99").await.unwrap_err();

    assert!(err.contains("if99"));
    let note = rx.try_recv().unwrap();
    assert_eq!(note.title, "Interface not found");
    assert!(note.is_destructive());
}

#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_insensitive() {
    let (ctx, _dir) = setup_context().await;

    let hits = search_applications(&ctx, "PORTAL").await.unwrap();
    let names: Vec<_> = hits.iter().map(|app| app.name.as_str()).collect();

    assert_eq!(names, ["Finance Portal", "Customer Portal"]);
    assert_eq!(search_applications(&ctx, "  ").await.unwrap().len(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn application_health_is_worst_of_all_interfaces() {
    let (ctx, _dir) = setup_context().await;

    let health = get_application_health(&ctx, "Inventory Management").await.unwrap();

    assert_eq!(health.interfaces.len(), 2);
    assert_eq!(health.status, SlaStatus::Breached);
}
