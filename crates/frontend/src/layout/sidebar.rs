//! Sidebar with one entry per top-level screen

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn menu_entries() -> Vec<(Page, &'static str, &'static str)> {
    vec![
        (Page::Dashboard, "Dashboard", "dashboard"),
        (Page::Articles, "Articles", "package"),
        (Page::Arrivals, "Arrivals", "truck"),
        (Page::Distributions, "Distributions", "arrow-right-left"),
        (Page::Reparations, "Repairs", "wrench"),
        (Page::Persons, "Persons", "users"),
        (Page::Structures, "Structures", "building"),
        (Page::Operations, "Operations", "history"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside style="width: 220px; background: #111827; color: #d1d5db; display: flex; flex-direction: column; flex-shrink: 0;">
            <div style="padding: 18px 16px; font-size: 16px; font-weight: 600; color: white; border-bottom: 1px solid #1f2937;">
                "IT Inventory"
            </div>
            <nav style="flex: 1; padding: 8px 0;">
                {menu_entries()
                    .into_iter()
                    .map(|(page, label, icon_name)| {
                        let is_active = move || ctx.page.get().section() == page;
                        view! {
                            <div
                                style=move || format!(
                                    "display: flex; align-items: center; gap: 10px; padding: 9px 16px; cursor: pointer; font-size: 14px; {}",
                                    if is_active() {
                                        "background: #1f2937; color: white; border-left: 3px solid #2563eb;"
                                    } else {
                                        "border-left: 3px solid transparent;"
                                    }
                                )
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
