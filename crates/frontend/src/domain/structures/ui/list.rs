use contracts::domain::structures::Structure;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::structures::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::toast::ToastService;

#[component]
pub fn StructuresList() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Structure>::new());
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
                match api::fetch_structures(params.page_index, params.page_size, &params.query)
                    .await
                {
                    Ok(page) => {
                        if generation.is_current(current) {
                            set_rows.set(page.content);
                            set_total_pages.set(page.total_pages);
                            set_total_elements.set(page.total_elements as usize);
                            set_is_loading.set(false);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load structures: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load structures.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Name", |s: &Structure| {
            view! { <span>{s.name.clone()}</span> }.into_any()
        }),
        Column::new("Manager", |s: &Structure| {
            let name = s
                .chef
                .as_deref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "N/A".to_string());
            view! { <span>{name}</span> }.into_any()
        }),
        Column::new("Level", |s: &Structure| {
            let (label, color) = if s.is_direction() {
                ("Direction", BadgeColor::Brand)
            } else {
                ("Sub-direction", BadgeColor::Informative)
            };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    <span>{label}</span>
                </Badge>
            }
            .into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Structures" subtitle="Directions and sub-directions">
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
                on_row_click=Callback::new(move |s: Structure| {
                    ctx.navigate(Page::StructureDetails(s.id));
                })
                state_key="structures"
            />
        </div>
    }
}
