/// Utilities shared by list screens (search input, sorting, request tracking)
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use wasm_bindgen::JsCast;

/// Monotonic counter used to discard stale list responses.
///
/// Every fetch calls `begin()` and keeps the returned number; when the
/// response arrives, `is_current(n)` tells whether a newer fetch has started
/// in the meantime. Late responses from abandoned queries are dropped
/// instead of overwriting fresher rows.
#[derive(Clone, Default)]
pub struct RequestGeneration(Arc<AtomicU64>);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier ones.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// UI state of one list screen, persisted across reloads.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListState {
    pub page: usize,
    pub page_size: usize,
    pub query: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
            query: String::new(),
        }
    }
}

fn list_state_storage_key(key: &str) -> String {
    format!("inventory.list.{}", key)
}

pub fn load_list_state(key: &str) -> ListState {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(&list_state_storage_key(key)).ok().flatten());
    match stored {
        Some(json) => serde_json::from_str(&json).unwrap_or_default(),
        None => ListState::default(),
    }
}

pub fn save_list_state(key: &str, state: &ListState) {
    let Ok(json) = serde_json::to_string(state) else {
        return;
    };
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(&list_state_storage_key(key), &json);
    }
}

/// Sort indicator suffix for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search input with a clear button. The value is pushed through `on_change`
/// on every keystroke; debouncing is the consumer's concern.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Filter...".to_string()
    } else {
        placeholder
    };

    let clear = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                class="search-input"
                placeholder={placeholder}
                style="width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Run `f` after `delay_ms`, cancelling the timer stored in `timeout_slot`.
///
/// Trailing-edge debounce: only the timer armed by the last call fires.
pub fn debounce(timeout_slot: StoredValue<Option<i32>>, delay_ms: i32, f: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || f()) as Box<dyn Fn()>);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref::<js_sys::Function>(),
        delay_ms,
    ) {
        Ok(timeout_id) => {
            closure.forget();
            let mut slot = timeout_slot.get_value();
            // timers cannot fire mid-task, so cancelling after arming is safe
            if let Some(stale) = arm_timer(&mut slot, timeout_id) {
                window.clear_timeout_with_handle(stale);
            }
            timeout_slot.set_value(slot);
        }
        Err(e) => {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}

/// Record `new_id` as the armed timer and hand back the one it supersedes,
/// which the caller must cancel.
fn arm_timer(slot: &mut Option<i32>, new_id: i32) -> Option<i32> {
    slot.replace(new_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_invalidates_older_requests() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn rearming_cancels_every_superseded_timer() {
        // three keystrokes in a burst: only the last armed timer survives
        let mut slot = None;
        let mut cancelled = Vec::new();
        for id in [1, 2, 3] {
            if let Some(stale) = arm_timer(&mut slot, id) {
                cancelled.push(stale);
            }
        }
        assert_eq!(cancelled, vec![1, 2]);
        assert_eq!(slot, Some(3));
    }

    #[test]
    fn sort_indicator_tracks_active_field() {
        assert_eq!(get_sort_indicator("model", "model", true), " ▲");
        assert_eq!(get_sort_indicator("model", "model", false), " ▼");
        assert_eq!(get_sort_indicator("model", "designation", true), " ⇅");
    }
}
