pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use header::Header;
use sidebar::Sidebar;

/// Application shell: fixed sidebar on the left, header on top, page content
/// in the remaining area.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div style="display: flex; min-height: 100vh;">
            <Sidebar />
            <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                <Header />
                <main style="flex: 1; padding: 20px; background: #f7f7f8;">
                    {content()}
                </main>
            </div>
        </div>
    }
}
