use contracts::domain::items::{Item, ItemStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::items::api as items_api;
use crate::shared::icons::icon;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::current_user_id;

/// Outcome buttons for an item under repair: either the repair succeeded or
/// the item is written off. Both ask for confirmation first.
#[component]
pub fn RepairItemActions(item: Item, on_changed: Callback<()>) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService should be provided");
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    if item.status != ItemStatus::UnderRepair {
        return view! { <span style="color: #888;">"-"</span> }.into_any();
    }

    let item_id = item.id;
    let label = StoredValue::new(item.display_label());

    let confirm_repaired = move |_| {
        modal.open("Mark as Repaired", move |handle| {
            confirm_dialog(
                handle,
                format!("Mark {} as repaired?", label.get_value()),
                "Mark Repaired",
                Callback::new(move |_: ()| {
                    let user_id = current_user_id();
                    spawn_local(async move {
                        match items_api::mark_repaired(item_id, user_id).await {
                            Ok(()) => {
                                toasts.success("Item marked as repaired.");
                                on_changed.run(());
                            }
                            Err(e) => {
                                log::error!("Failed to mark item {} repaired: {}", item_id, e);
                                toasts.error("Failed to mark the item as repaired.");
                            }
                        }
                    });
                }),
            )
        });
    };

    let confirm_reformed = move |_| {
        modal.open("Mark as Reformed", move |handle| {
            confirm_dialog(
                handle,
                format!(
                    "Write off {}? A reformed item leaves the inventory for good.",
                    label.get_value()
                ),
                "Mark Reformed",
                Callback::new(move |_: ()| {
                    let user_id = current_user_id();
                    spawn_local(async move {
                        match items_api::mark_reformed(item_id, user_id).await {
                            Ok(()) => {
                                toasts.success("Item marked as reformed.");
                                on_changed.run(());
                            }
                            Err(e) => {
                                log::error!("Failed to mark item {} reformed: {}", item_id, e);
                                toasts.error("Failed to mark the item as reformed.");
                            }
                        }
                    });
                }),
            )
        });
    };

    view! {
        <div style="display: flex; gap: 6px;">
            <button
                style="background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; padding: 4px 8px; display: inline-flex; align-items: center; color: #1b5e20;"
                title="Mark repaired"
                on:click=confirm_repaired
            >
                {icon("check")}
            </button>
            <button
                style="background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; padding: 4px 8px; display: inline-flex; align-items: center; color: #b91c1c;"
                title="Mark reformed"
                on:click=confirm_reformed
            >
                {icon("trash")}
            </button>
        </div>
    }
    .into_any()
}

fn confirm_dialog(
    handle: crate::shared::modal::ModalHandle,
    message: String,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
) -> AnyView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 14px;">
            <p style="margin: 0; font-size: 14px;">{message}</p>
            <div style="display: flex; justify-content: flex-end; gap: 8px;">
                <Button on_click={
                    let handle = handle.clone();
                    move |_| handle.close()
                }>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        handle.close();
                        on_confirm.run(());
                    }
                >
                    {confirm_label}
                </Button>
            </div>
        </div>
    }
    .into_any()
}
