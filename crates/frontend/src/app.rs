use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::activity::ui::RecentActivityList;
use crate::domain::inventory::ui::BulkUploadWidget;

#[component]
fn PharmacyDashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Pharmacy dashboard"</h1>
            <RecentActivityList />
        </div>
    }
}

#[component]
fn InventoryUploadPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Inventory"</h1>
            <BulkUploadWidget />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <nav class="top-nav">
                <span class="top-nav__brand">"Pharmy"</span>
                <A href="/">"Dashboard"</A>
                <A href="/pharmacy/inventory">"Inventory upload"</A>
            </nav>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="empty-message">"Page not found."</p> }>
                    <Route path=path!("/") view=PharmacyDashboardPage />
                    <Route path=path!("/pharmacy/inventory") view=InventoryUploadPage />
                </Routes>
            </main>
        </Router>
    }
}
