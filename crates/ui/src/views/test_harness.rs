use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::{InMemoryApi, MemoryVault, Vault};
use services::AppServices;
use services::app_services::ApiHandles;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    AdminAllSheetsView, AdminCreateSheetView, AdminDashboardView, AdminImportView,
    AdminLoginView, BookmarksView, HomeView, ProfileView, ProgressDashboardView,
    SheetDetailView, SheetProgressView, SheetsView,
};

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Sheets,
    SheetDetail(String),
    SheetProgress(String),
    Progress,
    Bookmarks,
    Profile,
    AdminLogin,
    AdminDashboard,
    AdminCreateSheet,
    AdminAllSheets,
    AdminImport,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(app.sessions().session()));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Sheets => rsx! { SheetsView {} },
        ViewKind::SheetDetail(id) => rsx! { SheetDetailView { id } },
        ViewKind::SheetProgress(id) => rsx! { SheetProgressView { id } },
        ViewKind::Progress => rsx! { ProgressDashboardView {} },
        ViewKind::Bookmarks => rsx! { BookmarksView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::AdminLogin => rsx! { AdminLoginView {} },
        ViewKind::AdminDashboard => rsx! { AdminDashboardView {} },
        ViewKind::AdminCreateSheet => rsx! { AdminCreateSheetView {} },
        ViewKind::AdminAllSheets => rsx! { AdminAllSheetsView {} },
        ViewKind::AdminImport => rsx! { AdminImportView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryApi,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then give pending resources a few rounds to settle.
    pub async fn run_until_settled(&mut self) {
        self.rebuild();
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: InMemoryApi) -> ViewHarness {
    let handle = Arc::new(api.clone());
    let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
    let services = AppServices::assemble(
        ApiHandles {
            sheets: handle.clone(),
            progress: handle.clone(),
            bookmarks: handle.clone(),
            auth: handle.clone(),
            admin: handle,
        },
        vault,
    );

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(services.clone()),
            view,
        },
    );

    ViewHarness { dom, api, services }
}
