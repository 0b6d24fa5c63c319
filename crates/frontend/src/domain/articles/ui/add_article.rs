use contracts::domain::articles::{ArticleDraft, ArticleType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::articles::api;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;

/// Opens the "Add Article" dialog. `on_created` fires after a successful
/// POST so the list can refetch.
pub fn open_add_article(modal: ModalService, toasts: ToastService, on_created: Callback<()>) {
    modal.open("Add Article", move |handle| {
        let model = RwSignal::new(String::new());
        let designation = RwSignal::new(String::new());
        let article_type = RwSignal::new(String::new());
        let is_saving = RwSignal::new(false);
        let error = RwSignal::new(None::<String>);

        let submit = {
            let handle = handle.clone();
            move |_| {
                let draft = ArticleDraft {
                    model: model.get_untracked(),
                    designation: designation.get_untracked(),
                    article_type: match article_type.get_untracked().as_str() {
                        "HARDWARE" => Some(ArticleType::Hardware),
                        "CONSUMABLE" => Some(ArticleType::Consumable),
                        _ => None,
                    },
                };
                if let Err(msg) = draft.validate() {
                    error.set(Some(msg));
                    return;
                }
                error.set(None);
                is_saving.set(true);
                let handle = handle.clone();
                spawn_local(async move {
                    match api::create_article(&draft).await {
                        Ok(created) => {
                            toasts.success(format!("Article \"{}\" created.", created.model));
                            is_saving.set(false);
                            handle.close();
                            on_created.run(());
                        }
                        Err(e) => {
                            log::error!("Failed to create article: {}", e);
                            toasts.error("Failed to create article.");
                            is_saving.set(false);
                        }
                    }
                });
            }
        };

        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Model"
                    <input
                        type="text"
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || model.get()
                        on:input=move |ev| model.set(event_target_value(&ev))
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Designation"
                    <input
                        type="text"
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || designation.get()
                        on:input=move |ev| designation.set(event_target_value(&ev))
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                    "Type"
                    <select
                        style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        on:change=move |ev| article_type.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || article_type.get().is_empty()>
                            "Select a type..."
                        </option>
                        <option value="HARDWARE">"HARDWARE"</option>
                        <option value="CONSUMABLE">"CONSUMABLE"</option>
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <div style="color: #b91c1c; font-size: 13px;">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 6px;">
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
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
