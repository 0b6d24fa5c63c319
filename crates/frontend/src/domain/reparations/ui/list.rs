use contracts::domain::operations::Operation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::reparations::api;
use crate::domain::reparations::ui::add_reparation::open_add_reparation;
use crate::domain::reparations::ui::item_actions::RepairItemActions;
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;

#[component]
pub fn ReparationsList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService should be provided");
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Operation>::new());
    let (total_pages, set_total_pages) = signal(0usize);
    let (total_elements, set_total_elements) = signal(0usize);
    let (is_loading, set_is_loading) = signal(false);
    let reload = Trigger::new();
    let generation = RequestGeneration::new();

    let load = {
        let generation = generation.clone();
        Callback::new(move |params: FetchParams| {
            let generation = generation.clone();
            let current = generation.begin();
            set_is_loading.set(true);
            spawn_local(async move {
                match api::fetch_reparations(params.page_index, params.page_size, &params.query)
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
                        log::error!("Failed to load repairs: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load repairs.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let refetch = Callback::new(move |_: ()| reload.notify());

    let columns = vec![
        Column::new("Date", |op: &Operation| {
            view! { <span>{format_datetime(&op.date)}</span> }.into_any()
        }),
        Column::new("Article", |op: &Operation| {
            view! { <span>{op.first_article_label()}</span> }.into_any()
        }),
        Column::new("Serial Number", |op: &Operation| {
            let serial = op
                .items
                .as_deref()
                .and_then(|items| items.first())
                .map(|item| item.serial_number.clone())
                .unwrap_or_else(|| "N/A".to_string());
            view! { <span style="font-family: monospace;">{serial}</span> }.into_any()
        }),
        Column::new("Recorded By", |op: &Operation| {
            view! { <span>{op.user_name()}</span> }.into_any()
        }),
        Column::new("Remarks", |op: &Operation| {
            view! { <span style="color: #666;">{op.remarks.clone()}</span> }.into_any()
        }),
        Column::new("Actions", move |op: &Operation| {
            let item = op.items.as_deref().and_then(|items| items.first()).cloned();
            match item {
                Some(item) => view! {
                    <RepairItemActions item=item on_changed=refetch />
                }
                .into_any(),
                None => view! { <span style="color: #888;">"-"</span> }.into_any(),
            }
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Repairs" subtitle="Items sent for repair">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        open_add_reparation(modal, toasts, refetch);
                    }
                >
                    {icon("plus")}
                    " Register Repair"
                </Button>
            </PageHeader>
            <DataTable
                columns=columns
                rows=rows
                total_pages=total_pages
                total_elements=total_elements
                is_loading=is_loading
                on_fetch=load
                reload=reload
                search_placeholder="Filter repairs..."
                state_key="reparations"
            />
        </div>
    }
}
