use api::InMemoryApi;
use tracker_core::model::{Difficulty, Question, QuestionId, Sheet, SheetId};

use super::test_harness::{ViewKind, setup_view_harness};

fn question(id: &str, title: &str, topic: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        title,
        vec![topic.to_string()],
        Difficulty::Medium,
        None,
    )
    .unwrap()
}

fn seeded_api() -> InMemoryApi {
    let api = InMemoryApi::new();
    let sheet = Sheet::new(
        SheetId::new("s1"),
        "Top 150",
        Some("The essential interview set".into()),
        None,
        Some("Medium".into()),
    )
    .unwrap();
    api.seed_sheet(
        sheet,
        vec![
            question("q1", "Two Sum", "Arrays"),
            question("q2", "Rotate Array", "Arrays"),
            question("q3", "Course Schedule", "Graphs"),
        ],
    );
    api
}

async fn sign_in(harness: &mut super::test_harness::ViewHarness) {
    harness
        .services
        .auth()
        .sign_in_with_google("credential")
        .await
        .expect("sign in");
}

#[tokio::test(flavor = "current_thread")]
async fn sheets_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Sheets, seeded_api());
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Top 150"), "missing sheet title in {html}");
    assert!(
        html.contains("The essential interview set"),
        "missing description in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn sheet_detail_smoke_groups_by_topic() {
    let mut harness = setup_view_harness(ViewKind::SheetDetail("s1".into()), seeded_api());
    sign_in(&mut harness).await;
    harness
        .services
        .progress()
        .toggle_solved(&QuestionId::new("q1"))
        .await
        .expect("toggle");
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Arrays"), "missing topic in {html}");
    assert!(html.contains("Graphs"), "missing topic in {html}");
    assert!(html.contains("1 / 2"), "missing solved count in {html}");
    assert!(html.contains("0 / 1"), "missing solved count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sheet_detail_smoke_requires_sign_in() {
    let mut harness = setup_view_harness(ViewKind::SheetDetail("s1".into()), seeded_api());
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(
        html.contains("Sign in to see this page."),
        "missing sign-in prompt in {html}"
    );
    assert!(html.contains("Go to sign in"), "missing login link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sheet_progress_smoke_renders_breakdown() {
    let mut harness = setup_view_harness(ViewKind::SheetProgress("s1".into()), seeded_api());
    sign_in(&mut harness).await;
    harness
        .services
        .progress()
        .toggle_solved(&QuestionId::new("q1"))
        .await
        .expect("toggle");
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Solved 1 of 3"), "missing completion in {html}");
    assert!(html.contains("Arrays"), "missing topic row in {html}");
    assert!(html.contains("chip"), "missing active topic chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_dashboard_smoke_requires_sign_in() {
    let mut harness = setup_view_harness(ViewKind::Progress, seeded_api());
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(
        html.contains("Sign in to see this page."),
        "missing sign-in prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn bookmarks_view_smoke_lists_saved_questions() {
    let mut harness = setup_view_harness(ViewKind::Bookmarks, seeded_api());
    sign_in(&mut harness).await;
    harness
        .services
        .bookmarks()
        .add_bookmark(&QuestionId::new("q3"))
        .await
        .expect("bookmark");
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Course Schedule"), "missing bookmark in {html}");
    assert!(html.contains("Remove"), "missing remove button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_smoke_renders_user_and_stats() {
    let mut harness = setup_view_harness(ViewKind::Profile, seeded_api());
    sign_in(&mut harness).await;
    harness
        .services
        .progress()
        .toggle_solved(&QuestionId::new("q1"))
        .await
        .expect("toggle");
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Test User"), "missing user name in {html}");
    assert!(html.contains("Solve rate"), "missing stats in {html}");
    assert!(html.contains("Sign out"), "missing sign out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_greets_signed_in_user() {
    let mut harness = setup_view_harness(ViewKind::Home, seeded_api());
    sign_in(&mut harness).await;
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(
        html.contains("Welcome back, Test User."),
        "missing greeting in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn admin_login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::AdminLogin, seeded_api());
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Admin Login"), "missing heading in {html}");
    assert!(html.contains("Password"), "missing password field in {html}");
}

async fn admin_login(harness: &mut super::test_harness::ViewHarness) {
    harness
        .services
        .admin()
        .login("admin@example.com", "secret")
        .await
        .expect("admin login");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_dashboard_smoke_gates_without_a_token() {
    let mut harness = setup_view_harness(ViewKind::AdminDashboard, seeded_api());
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(
        html.contains("This area needs an admin login."),
        "missing gate prompt in {html}"
    );
    assert!(
        html.contains("Go to admin login"),
        "missing gate link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn admin_dashboard_smoke_renders_menu_when_logged_in() {
    let mut harness = setup_view_harness(ViewKind::AdminDashboard, seeded_api());
    admin_login(&mut harness).await;
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Create a sheet"), "missing menu in {html}");
    assert!(html.contains("Manage sheets"), "missing menu in {html}");
    assert!(html.contains("Log out"), "missing log out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_create_sheet_smoke_renders_form_when_logged_in() {
    let mut harness = setup_view_harness(ViewKind::AdminCreateSheet, seeded_api());
    admin_login(&mut harness).await;
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Create Sheet"), "missing heading in {html}");
    assert!(html.contains("Title"), "missing title field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_all_sheets_smoke_lists_sheets_when_logged_in() {
    let mut harness = setup_view_harness(ViewKind::AdminAllSheets, seeded_api());
    admin_login(&mut harness).await;
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Top 150"), "missing sheet row in {html}");
    assert!(html.contains("Delete"), "missing delete button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_import_smoke_renders_form_when_logged_in() {
    let mut harness = setup_view_harness(ViewKind::AdminImport, seeded_api());
    admin_login(&mut harness).await;
    harness.run_until_settled().await;

    let html = harness.render();
    assert!(html.contains("Import Questions"), "missing heading in {html}");
    assert!(
        html.contains("Server file name"),
        "missing file field in {html}"
    );
}
