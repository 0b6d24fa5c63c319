use contracts::domain::items::Item;
use contracts::domain::operations::ReparationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::domain::items::api as items_api;
use crate::domain::reparations::api;
use crate::shared::components::search_select::SearchSelect;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::current_user_id;

/// Opens the repair registration dialog: pick an item by serial number,
/// describe the defect, submit.
pub fn open_add_reparation(modal: ModalService, toasts: ToastService, on_created: Callback<()>) {
    modal.open("Register Repair", move |handle| {
        let selected = RwSignal::new(None::<Item>);
        let (suggestions, set_suggestions) = signal(Vec::<Item>::new());
        let remarks = RwSignal::new(String::new());
        let error = RwSignal::new(None::<String>);
        let is_saving = RwSignal::new(false);

        let search = Callback::new(move |query: String| {
            spawn_local(async move {
                match items_api::search_items(&query).await {
                    Ok(found) => set_suggestions.set(found),
                    Err(e) => {
                        log::error!("Item search failed: {}", e);
                        set_suggestions.set(Vec::new());
                    }
                }
            });
        });

        let submit = {
            let handle = handle.clone();
            move |_| {
                let request = ReparationRequest {
                    item_id: selected.get_untracked().map(|i| i.id).unwrap_or(0),
                    remarks: remarks.get_untracked(),
                    user_id: current_user_id(),
                };
                if let Err(msg) = request.validate() {
                    error.set(Some(msg));
                    return;
                }
                error.set(None);
                is_saving.set(true);
                let handle = handle.clone();
                spawn_local(async move {
                    match api::register_reparations(&[request]).await {
                        Ok(()) => {
                            toasts.success("Repair registered.");
                            is_saving.set(false);
                            handle.close();
                            on_created.run(());
                        }
                        Err(e) => {
                            log::error!("Failed to register repair: {}", e);
                            toasts.error("Failed to register the repair.");
                            is_saving.set(false);
                        }
                    }
                });
            }
        };

        let selected_card = move || {
            let Some(item) = selected.get() else {
                return view! {
                    <div style="color: #888; font-size: 13px;">"No item selected yet."</div>
                }
                .into_any();
            };
            let status = item.status;
            let article = item
                .article
                .as_ref()
                .map(|a| format!("{} - {}", a.model, a.designation))
                .unwrap_or_else(|| "N/A".to_string());
            view! {
                <div style="border: 1px solid #eee; border-radius: 6px; padding: 10px 12px; display: flex; align-items: center; gap: 10px;">
                    <div style="flex: 1; display: flex; flex-direction: column; gap: 2px;">
                        <strong style="font-size: 14px;">{article}</strong>
                        <span style="font-family: monospace; font-size: 12px; color: #666;">
                            {item.serial_number.clone()}
                        </span>
                    </div>
                    <StatusBadge status=Signal::derive(move || status) />
                </div>
            }
            .into_any()
        };

        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <SearchSelect
                    placeholder="Search by serial number..."
                    on_search=search
                    suggestions=suggestions
                    label_of=Arc::new(|item: &Item| item.display_label())
                    on_select=Callback::new(move |item: Item| selected.set(Some(item)))
                />
                {selected_card}
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Remarks (defect description)"
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
                        {move || if is_saving.get() { "Saving..." } else { "Register" }}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
