use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::domain::distributions::api::{self, AttestationError};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

/// Download button for a distribution's scanned attestation. A 404 gets its
/// own message since it only means nothing has been uploaded yet.
#[component]
pub fn AttestationDownload(distribution_id: i64) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");
    let is_busy = RwSignal::new(false);

    let download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if is_busy.get_untracked() {
            return;
        }
        is_busy.set(true);
        spawn_local(async move {
            match api::download_attestation(distribution_id).await {
                Ok(()) => {}
                Err(AttestationError::NotFound) => {
                    toasts.error("The attestation for this distribution has not been uploaded yet.");
                }
                Err(AttestationError::Other(e)) => {
                    log::error!(
                        "Failed to download attestation of distribution {}: {}",
                        distribution_id,
                        e
                    );
                    toasts.error("Failed to download the attestation.");
                }
            }
            is_busy.set(false);
        });
    };

    view! {
        <button
            style="background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; padding: 4px 8px; display: inline-flex; align-items: center; color: #444;"
            title="Download attestation"
            disabled=move || is_busy.get()
            on:click=download
        >
            {icon("download")}
        </button>
    }
}

/// Upload button. Opens a hidden file input and posts the chosen file.
#[component]
pub fn AttestationUpload(distribution_id: i64) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");
    let is_busy = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let pick = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let upload = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        is_busy.set(true);
        spawn_local(async move {
            match api::upload_attestation(distribution_id, &file).await {
                Ok(()) => {
                    toasts.success(format!(
                        "Attestation for distribution #{} has been uploaded.",
                        distribution_id
                    ));
                }
                Err(e) => {
                    log::error!(
                        "Failed to upload attestation of distribution {}: {}",
                        distribution_id,
                        e
                    );
                    toasts.error("Failed to upload the attestation.");
                }
            }
            is_busy.set(false);
        });
    };

    view! {
        <button
            style="background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; padding: 4px 8px; display: inline-flex; align-items: center; color: #444;"
            title="Upload attestation"
            disabled=move || is_busy.get()
            on:click=pick
        >
            {icon("upload")}
        </button>
        <input
            type="file"
            accept="application/pdf,image/*"
            style="display: none;"
            node_ref=input_ref
            on:change=upload
        />
    }
}
