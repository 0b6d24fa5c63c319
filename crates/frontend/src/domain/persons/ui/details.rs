use contracts::domain::items::Item;
use contracts::domain::persons::Person;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::items::api as items_api;
use crate::domain::persons::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{debounce, RequestGeneration, SearchInput};
use crate::shared::toast::ToastService;

const SERIAL_DEBOUNCE_MS: i32 = 300;

#[component]
pub fn PersonDetails(id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (person, set_person) = signal(None::<Person>);

    spawn_local(async move {
        match api::fetch_person(id).await {
            Ok(p) => set_person.set(Some(p)),
            Err(e) => {
                log::error!("Failed to load person {}: {}", id, e);
                toasts.error("Failed to load the person.");
            }
        }
    });

    // Items the person currently holds, narrowed by serial number. The
    // backend only exposes this as a search, so an empty query shows nothing.
    let serial = RwSignal::new(String::new());
    let (items, set_items) = signal(Vec::<Item>::new());
    let (searched, set_searched) = signal(false);
    let generation = RequestGeneration::new();
    let debounce_slot = StoredValue::new(None::<i32>);

    let run_search = {
        let generation = generation.clone();
        move |query: String| {
            let generation = generation.clone();
            let current = generation.begin();
            spawn_local(async move {
                match items_api::search_items_of_person(id, &query).await {
                    Ok(found) => {
                        if generation.is_current(current) {
                            set_items.set(found);
                            set_searched.set(query.trim().len() >= 2);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to search items of person {}: {}", id, e);
                        if generation.is_current(current) {
                            toasts.error("Failed to search items.");
                        }
                    }
                }
            });
        }
    };

    let card = move || {
        let Some(p) = person.get() else {
            return view! {
                <div style="padding: 18px; color: #888;">"Loading..."</div>
            }
            .into_any();
        };
        let structure = p
            .structure
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "N/A".to_string());
        view! {
            <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 18px; display: flex; flex-direction: column; gap: 8px;">
                <h2 style="margin: 0; font-size: 18px;">{p.full_name()}</h2>
                <div style="color: #555;">{p.grade.clone()}</div>
                <div style="color: #888; font-size: 13px; font-family: monospace;">{p.matricule.clone()}</div>
                <div style="color: #555; font-size: 13px;">{structure}</div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <PageHeader title="Person" subtitle="Details and assigned equipment">
                <Button on_click=move |_| ctx.navigate(Page::Persons)>
                    {icon("arrow-left")}
                    " Back to Persons"
                </Button>
            </PageHeader>
            {card}
            <div style="margin-top: 16px; display: flex; flex-direction: column; gap: 10px;">
                <SearchInput
                    value=Signal::derive(move || serial.get())
                    on_change=Callback::new({
                        let run_search = run_search.clone();
                        move |v: String| {
                            serial.set(v.clone());
                            let run_search = run_search.clone();
                            debounce(debounce_slot, SERIAL_DEBOUNCE_MS, move || {
                                run_search(v.clone());
                            });
                        }
                    })
                    placeholder="Search by serial number..."
                />
                {move || {
                    let found = items.get();
                    if found.is_empty() {
                        let hint = if searched.get() {
                            "No items match this serial number."
                        } else {
                            "Type a serial number to list this person's items."
                        };
                        return view! {
                            <div style="color: #888; font-size: 13px;">{hint}</div>
                        }
                        .into_any();
                    }
                    found
                        .into_iter()
                        .map(|item| {
                            let status = item.status;
                            view! {
                                <div style="display: flex; align-items: center; gap: 12px; background: white; border: 1px solid #eee; border-radius: 6px; padding: 10px 14px;">
                                    <span style="flex: 1;">{item.display_label()}</span>
                                    <StatusBadge status=Signal::derive(move || status) />
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
