use contracts::domain::persons::Person;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::persons::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::toast::ToastService;

#[component]
pub fn PersonsList() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Person>::new());
    let (total_pages, set_total_pages) = signal(0usize);
    let (total_elements, set_total_elements) = signal(0usize);
    let (is_loading, set_is_loading) = signal(false);
    let generation = RequestGeneration::new();

    let load = {
        let generation = generation.clone();
        Callback::new(move |params: FetchParams| {
            let generation = generation.clone();
            let current = generation.begin();
            set_is_loading.set(true);
            spawn_local(async move {
                match api::fetch_persons(params.page_index, params.page_size, &params.query).await {
                    Ok(page) => {
                        if generation.is_current(current) {
                            set_rows.set(page.content);
                            set_total_pages.set(page.total_pages);
                            set_total_elements.set(page.total_elements as usize);
                            set_is_loading.set(false);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load persons: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load persons.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Name", |p: &Person| {
            view! { <span>{p.full_name()}</span> }.into_any()
        }),
        Column::new("Grade", |p: &Person| {
            view! { <span>{p.grade.clone()}</span> }.into_any()
        }),
        Column::new("Matricule", |p: &Person| {
            view! { <span style="font-family: monospace;">{p.matricule.clone()}</span> }.into_any()
        }),
        Column::new("Structure", |p: &Person| {
            let name = p
                .structure
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "N/A".to_string());
            view! { <span>{name}</span> }.into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Persons" subtitle="Equipment beneficiaries">
                {()}
            </PageHeader>
            <DataTable
                columns=columns
                rows=rows
                total_pages=total_pages
                total_elements=total_elements
                is_loading=is_loading
                on_fetch=load
                search_placeholder="Filter by name..."
                on_row_click=Callback::new(move |p: Person| {
                    ctx.navigate(Page::PersonDetails(p.id));
                })
                state_key="persons"
            />
        </div>
    }
}
