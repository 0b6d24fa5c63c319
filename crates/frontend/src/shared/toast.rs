use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Transient notifications shown in the bottom-right corner.
///
/// Every toast dismisses itself after a few seconds; errors can also be
/// dismissed by clicking.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| {
            t.push(ToastEntry { id, kind, message });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|e| e.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active toasts. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div style="position: fixed; bottom: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px;">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let background = match entry.kind {
                        ToastKind::Success => "#1b5e20",
                        ToastKind::Error => "#b71c1c",
                    };
                    view! {
                        <div
                            style=format!(
                                "background: {}; color: white; padding: 10px 16px; border-radius: 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); max-width: 360px; cursor: pointer; font-size: 14px;",
                                background
                            )
                            on:click=move |_| svc.dismiss(id)
                        >
                            {entry.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
