use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    width: Option<String>,
}

/// A handle returned by `ModalService::open`.
///
/// Can be cloned and used inside event handlers to close the dialog.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Centralized dialog stack. Confirmation dialogs open on top of forms,
/// so the stack can hold more than one entry.
///
/// Escape closes only the topmost dialog (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Defer to next tick to avoid "closure invoked ... after being dropped"
            // when a dialog is removed synchronously during the originating DOM
            // event dispatch.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    /// Open a dialog. `builder` receives a `ModalHandle` so the dialog can
    /// close itself.
    pub fn open<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.open_sized(title, None, builder)
    }

    /// Open a dialog with an explicit CSS width for the surface.
    pub fn open_sized<F>(
        &self,
        title: impl Into<String>,
        width: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title: title.into(),
                builder,
                width,
            });
        });

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the dialog stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler: closes only the topmost dialog.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && !svc.stack.get_untracked().is_empty() {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "keydown",
                closure.as_ref().unchecked_ref(),
            );
        }
        closure.forget();
    });

    view! {
        <For
            each=move || svc.stack.get()
            key=|entry| entry.id
            children=move |entry| {
                let id = entry.id;
                let handle = ModalHandle { id, svc };
                let content = (entry.builder)(handle.clone());
                let surface_style = format!(
                    "background: white; border-radius: 8px; box-shadow: 0 8px 30px rgba(0,0,0,0.3); width: {}; max-width: 95vw; max-height: 90vh; overflow: auto;",
                    entry.width.clone().unwrap_or_else(|| "480px".to_string())
                );
                view! {
                    <div
                        style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 1000;"
                        on:click=move |_| svc.close_deferred(id)
                    >
                        <div
                            style=surface_style
                            on:click=move |ev| ev.stop_propagation()
                        >
                            <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 18px; border-bottom: 1px solid #eee;">
                                <h3 style="margin: 0; font-size: 16px;">{entry.title.clone()}</h3>
                                <button
                                    style="background: none; border: none; cursor: pointer; color: #666; padding: 4px; line-height: 1;"
                                    on:click=move |_| handle.close()
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                            <div style="padding: 18px;">{content}</div>
                        </div>
                    </div>
                }
            }
        />
    }
}
