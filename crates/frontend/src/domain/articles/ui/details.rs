use contracts::domain::articles::{Article, ArticleType};
use contracts::domain::items::Item;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::articles::api;
use crate::domain::items::api as items_api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::toast::ToastService;

#[component]
pub fn ArticleDetails(id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (article, set_article) = signal(None::<Article>);

    spawn_local(async move {
        match api::fetch_article(id).await {
            Ok(a) => set_article.set(Some(a)),
            Err(e) => {
                log::error!("Failed to load article {}: {}", id, e);
                toasts.error("Failed to load the article.");
            }
        }
    });

    let (rows, set_rows) = signal(Vec::<Item>::new());
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
                match items_api::fetch_items_for_article(
                    id,
                    params.page_index,
                    params.page_size,
                    &params.query,
                )
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
                        log::error!("Failed to load items of article {}: {}", id, e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load items.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Serial Number", |item: &Item| {
            view! { <span style="font-family: monospace;">{item.serial_number.clone()}</span> }
                .into_any()
        }),
        Column::new("Status", |item: &Item| {
            let status = item.status;
            view! { <StatusBadge status=Signal::derive(move || status) /> }.into_any()
        }),
    ];

    let card = move || {
        let Some(a) = article.get() else {
            return view! {
                <div style="padding: 18px; color: #888;">"Loading..."</div>
            }
            .into_any();
        };
        let color = match a.article_type {
            ArticleType::Hardware => BadgeColor::Brand,
            ArticleType::Consumable => BadgeColor::Informative,
        };
        view! {
            <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 18px; display: flex; flex-direction: column; gap: 8px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    <h2 style="margin: 0; font-size: 18px;">{a.model.clone()}</h2>
                    <Badge appearance=BadgeAppearance::Tint color=color>
                        <span>{a.article_type.label()}</span>
                    </Badge>
                </div>
                <div style="color: #555;">{a.designation.clone()}</div>
                <div style="color: #888; font-size: 13px;">
                    {format!("{} item(s) registered", a.quantity)}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <PageHeader title="Article" subtitle="Details and registered items">
                <Button on_click=move |_| ctx.navigate(Page::Articles)>
                    {icon("arrow-left")}
                    " Back to Articles"
                </Button>
            </PageHeader>
            {card}
            <div style="margin-top: 16px;">
                <DataTable
                    columns=columns
                    rows=rows
                    total_pages=total_pages
                    total_elements=total_elements
                    is_loading=is_loading
                    on_fetch=load
                    search_placeholder="Filter by serial number..."
                />
            </div>
        </div>
    }
}
