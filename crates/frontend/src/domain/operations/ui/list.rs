use contracts::domain::operations::Operation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::operations::api;
use crate::domain::operations::ui::operation_badge_color;
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::toast::ToastService;

#[component]
pub fn OperationsList() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Operation>::new());
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
                match api::fetch_operations(params.page_index, params.page_size, &params.query)
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
                        log::error!("Failed to load operations: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load operations.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Type", |op: &Operation| {
            let label = op.operation_type.label();
            let color = operation_badge_color(op.operation_type);
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    <span>{label}</span>
                </Badge>
            }
            .into_any()
        }),
        Column::new("Date", |op: &Operation| {
            view! { <span>{format_datetime(&op.date)}</span> }.into_any()
        }),
        Column::new("Article", |op: &Operation| {
            view! { <span>{op.first_article_label()}</span> }.into_any()
        }),
        Column::new("Items", |op: &Operation| {
            view! { <span>{op.item_count().to_string()}</span> }.into_any()
        }),
        Column::new("Beneficiary", |op: &Operation| {
            view! { <span>{op.beneficiary_name()}</span> }.into_any()
        }),
        Column::new("Recorded By", |op: &Operation| {
            view! { <span>{op.user_name()}</span> }.into_any()
        }),
        Column::new("Remarks", |op: &Operation| {
            view! { <span style="color: #666;">{op.remarks.clone()}</span> }.into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Operations" subtitle="Full inventory journal">
                {()}
            </PageHeader>
            <DataTable
                columns=columns
                rows=rows
                total_pages=total_pages
                total_elements=total_elements
                is_loading=is_loading
                on_fetch=load
                search_placeholder="Filter operations..."
                state_key="operations"
            />
        </div>
    }
}
