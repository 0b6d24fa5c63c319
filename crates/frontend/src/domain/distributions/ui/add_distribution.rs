use contracts::domain::items::{Item, ItemStatus};
use contracts::domain::operations::DistributionRequest;
use contracts::domain::persons::Person;
use contracts::domain::structures::Structure;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::domain::distributions::api;
use crate::domain::items::api as items_api;
use crate::domain::persons::api as persons_api;
use crate::domain::structures::api as structures_api;
use crate::shared::components::search_select::SearchSelect;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::current_user_id;

/// Opens the distribution dialog. The beneficiary is picked through a
/// direction, sub-direction, person cascade; items come from the in-stock
/// serial search. A successful POST also saves the generated discharge
/// documents.
pub fn open_add_distribution(modal: ModalService, toasts: ToastService, on_created: Callback<()>) {
    modal.open_sized("Add Distribution", Some("560px".to_string()), move |handle| {
        let (directions, set_directions) = signal(Vec::<Structure>::new());
        let (sub_directions, set_sub_directions) = signal(Vec::<Structure>::new());
        let (persons, set_persons) = signal(Vec::<Person>::new());
        let beneficiary_id = RwSignal::new(0i64);

        let selected_items = RwSignal::new(Vec::<Item>::new());
        let (suggestions, set_suggestions) = signal(Vec::<Item>::new());
        let remarks = RwSignal::new(String::new());
        let error = RwSignal::new(None::<String>);
        let is_saving = RwSignal::new(false);

        spawn_local(async move {
            match structures_api::fetch_directions().await {
                Ok(found) => set_directions.set(found),
                Err(e) => {
                    log::error!("Failed to load directions: {}", e);
                    toasts.error("Failed to load directions.");
                }
            }
        });

        let pick_direction = move |id_text: String| {
            set_sub_directions.set(Vec::new());
            set_persons.set(Vec::new());
            beneficiary_id.set(0);
            let Ok(direction_id) = id_text.parse::<i64>() else {
                return;
            };
            spawn_local(async move {
                match structures_api::fetch_sub_directions(direction_id).await {
                    Ok(found) => set_sub_directions.set(found),
                    Err(e) => {
                        log::error!("Failed to load sub-directions: {}", e);
                        toasts.error("Failed to load sub-directions.");
                    }
                }
            });
        };

        let pick_sub_direction = move |id_text: String| {
            set_persons.set(Vec::new());
            beneficiary_id.set(0);
            let Ok(structure_id) = id_text.parse::<i64>() else {
                return;
            };
            spawn_local(async move {
                match persons_api::fetch_persons_of_structure(structure_id).await {
                    Ok(found) => set_persons.set(found),
                    Err(e) => {
                        log::error!("Failed to load persons of structure: {}", e);
                        toasts.error("Failed to load persons.");
                    }
                }
            });
        };

        let search = Callback::new(move |query: String| {
            spawn_local(async move {
                match items_api::search_items(&query).await {
                    Ok(found) => {
                        let in_stock = found
                            .into_iter()
                            .filter(|item| item.status == ItemStatus::InStock)
                            .collect();
                        set_suggestions.set(in_stock);
                    }
                    Err(e) => {
                        log::error!("Item search failed: {}", e);
                        set_suggestions.set(Vec::new());
                    }
                }
            });
        });

        let add_item = Callback::new(move |item: Item| {
            selected_items.update(|items| {
                if !items.iter().any(|i| i.id == item.id) {
                    items.push(item);
                }
            });
        });

        let submit = {
            let handle = handle.clone();
            move |_| {
                let request = DistributionRequest {
                    item_ids: selected_items
                        .get_untracked()
                        .iter()
                        .map(|i| i.id)
                        .collect(),
                    beneficiary_id: beneficiary_id.get_untracked(),
                    user_id: current_user_id(),
                    remarks: remarks.get_untracked(),
                };
                if let Err(msg) = request.validate() {
                    error.set(Some(msg));
                    return;
                }
                error.set(None);
                is_saving.set(true);
                let handle = handle.clone();
                spawn_local(async move {
                    match api::create_distribution(&request).await {
                        Ok(()) => {
                            toasts.success("Distribution registered.");
                            is_saving.set(false);
                            handle.close();
                            on_created.run(());
                        }
                        Err(e) => {
                            log::error!("Failed to register distribution: {}", e);
                            toasts.error("Failed to register the distribution.");
                            is_saving.set(false);
                        }
                    }
                });
            }
        };

        let chips = move || {
            selected_items
                .get()
                .into_iter()
                .map(|item| {
                    let item_id = item.id;
                    view! {
                        <span style="display: inline-flex; align-items: center; gap: 4px; background: #eef2ff; border-radius: 12px; padding: 2px 10px; font-size: 12px;">
                            {item.display_label()}
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 0; line-height: 1; color: #666;"
                                on:click=move |_| {
                                    selected_items.update(|items| items.retain(|i| i.id != item_id));
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                })
                .collect_view()
        };

        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Direction"
                    <select
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        on:change=move |ev| pick_direction(event_target_value(&ev))
                    >
                        <option value="">"Select a direction..."</option>
                        <For
                            each=move || directions.get()
                            key=|s| s.id
                            children=|s| view! { <option value=s.id.to_string()>{s.name.clone()}</option> }
                        />
                    </select>
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Sub-direction"
                    <select
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        disabled=move || sub_directions.get().is_empty()
                        on:change=move |ev| pick_sub_direction(event_target_value(&ev))
                    >
                        <option value="">"Select a sub-direction..."</option>
                        <For
                            each=move || sub_directions.get()
                            key=|s| s.id
                            children=|s| view! { <option value=s.id.to_string()>{s.name.clone()}</option> }
                        />
                    </select>
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Beneficiary"
                    <select
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        disabled=move || persons.get().is_empty()
                        on:change=move |ev| {
                            beneficiary_id.set(event_target_value(&ev).parse().unwrap_or(0));
                        }
                    >
                        <option value="">"Select a beneficiary..."</option>
                        <For
                            each=move || persons.get()
                            key=|p| p.id
                            children=|p| view! { <option value=p.id.to_string()>{p.full_name()}</option> }
                        />
                    </select>
                </label>
                <div style="display: flex; flex-direction: column; gap: 6px;">
                    <span style="font-size: 13px;">"Items (in stock)"</span>
                    <SearchSelect
                        placeholder="Search by serial number..."
                        on_search=search
                        suggestions=suggestions
                        label_of=Arc::new(|item: &Item| item.display_label())
                        on_select=add_item
                    />
                    <div style="display: flex; flex-wrap: wrap; gap: 6px;">{chips}</div>
                </div>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Remarks"
                    <textarea
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; min-height: 60px; resize: vertical;"
                        prop:value=move || remarks.get()
                        on:input=move |ev| remarks.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <div style="color: #b91c1c; font-size: 13px;">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <div style="display: flex; justify-content: flex-end; gap: 8px;">
                    <Button on_click={
                        let handle = handle.clone();
                        move |_| handle.close()
                    }>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_saving.get())
                        on_click=submit.clone()
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save Distribution" }}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
