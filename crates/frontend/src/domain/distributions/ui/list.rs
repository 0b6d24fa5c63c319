use contracts::domain::operations::Distribution;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::distributions::api;
use crate::domain::distributions::ui::add_distribution::open_add_distribution;
use crate::domain::distributions::ui::attestation::{AttestationDownload, AttestationUpload};
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;

#[component]
pub fn DistributionsList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService should be provided");
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Distribution>::new());
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
                match api::fetch_distributions(params.page_index, params.page_size, &params.query)
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
                        log::error!("Failed to load distributions: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load distributions.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Date", |d: &Distribution| {
            view! { <span>{format_datetime(&d.date)}</span> }.into_any()
        }),
        Column::new("Beneficiary", |d: &Distribution| {
            let name = d
                .beneficiary
                .as_ref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "N/A".to_string());
            view! { <span>{name}</span> }.into_any()
        }),
        Column::new("Items", |d: &Distribution| {
            let count = d
                .items
                .as_deref()
                .map(|items| items.len())
                .unwrap_or(d.item_ids.len());
            view! { <span>{count.to_string()}</span> }.into_any()
        }),
        Column::new("Recorded By", |d: &Distribution| {
            let name = d
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            view! { <span>{name}</span> }.into_any()
        }),
        Column::new("Remarks", |d: &Distribution| {
            view! { <span style="color: #666;">{d.remarks.clone()}</span> }.into_any()
        }),
        Column::new("Attestation", |d: &Distribution| {
            let id = d.id;
            view! {
                <div style="display: flex; gap: 6px;">
                    <AttestationDownload distribution_id=id />
                    <AttestationUpload distribution_id=id />
                </div>
            }
            .into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Distributions" subtitle="Equipment handed to beneficiaries">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        open_add_distribution(modal, toasts, Callback::new(move |_| reload.notify()));
                    }
                >
                    {icon("plus")}
                    " Add Distribution"
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
                search_placeholder="Filter distributions..."
                state_key="distributions"
            />
        </div>
    }
}
