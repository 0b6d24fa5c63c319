use contracts::domain::articles::{Article, ArticleType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::articles::api;
use crate::domain::articles::ui::add_article::open_add_article;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::data_table::{Column, DataTable, FetchParams};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::RequestGeneration;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;

#[component]
pub fn ArticlesList() -> impl IntoView {
    let ctx = use_app_context();
    let modal = use_context::<ModalService>().expect("ModalService should be provided");
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (rows, set_rows) = signal(Vec::<Article>::new());
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
                match api::fetch_articles(params.page_index, params.page_size, &params.query).await
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
                        log::error!("Failed to load articles: {}", e);
                        if generation.is_current(current) {
                            toasts.error("Failed to load articles.");
                            set_is_loading.set(false);
                        }
                    }
                }
            });
        })
    };

    let columns = vec![
        Column::new("Model", |a: &Article| {
            view! { <span>{a.model.clone()}</span> }.into_any()
        }),
        Column::new("Designation", |a: &Article| {
            view! { <span>{a.designation.clone()}</span> }.into_any()
        }),
        Column::new("Type", |a: &Article| {
            let label = a.article_type.label();
            let color = match a.article_type {
                ArticleType::Hardware => BadgeColor::Brand,
                ArticleType::Consumable => BadgeColor::Informative,
            };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    <span>{label}</span>
                </Badge>
            }
            .into_any()
        }),
        Column::new("Items Count", |a: &Article| {
            view! { <span>{a.quantity.to_string()}</span> }.into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title="Articles" subtitle="Equipment catalog">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        open_add_article(modal, toasts, Callback::new(move |_| reload.notify()));
                    }
                >
                    {icon("plus")}
                    " Add Article"
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
                search_placeholder="Filter by designation..."
                on_row_click=Callback::new(move |a: Article| {
                    ctx.navigate(Page::ArticleDetails(a.id));
                })
                state_key="articles"
            />
        </div>
    }
}
