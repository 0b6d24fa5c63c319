use crate::shared::list_utils::debounce;
use leptos::prelude::*;
use std::sync::Arc;

const SUGGEST_DEBOUNCE_MS: i32 = 300;
const MIN_QUERY_LEN: usize = 2;

/// Text input with a remote suggestion dropdown.
///
/// The owner performs the search: `on_search` fires with the debounced
/// query and the owner writes matches into `suggestions`. Picking an entry
/// clears the input and closes the dropdown.
#[component]
pub fn SearchSelect<T: Clone + Send + Sync + 'static>(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
    #[prop(into)] suggestions: Signal<Vec<T>>,
    label_of: Arc<dyn Fn(&T) -> String + Send + Sync>,
    on_select: Callback<T>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let open = RwSignal::new(false);
    let debounce_slot = StoredValue::new(None::<i32>);

    let handle_input = move |text: String| {
        input.set(text.clone());
        if text.trim().len() < MIN_QUERY_LEN {
            open.set(false);
            return;
        }
        debounce(debounce_slot, SUGGEST_DEBOUNCE_MS, move || {
            on_search.run(text.clone());
            open.set(true);
        });
    };

    let label_for_list = label_of.clone();

    view! {
        <div style="position: relative; width: 100%;">
            <input
                type="text"
                placeholder={placeholder}
                style="width: 100%; padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; box-sizing: border-box;"
                prop:value=move || input.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                if !open.get() {
                    return view! { <></> }.into_any();
                }
                let entries = suggestions.get();
                if entries.is_empty() {
                    return view! {
                        <div style="position: absolute; top: 100%; left: 0; right: 0; background: white; border: 1px solid #ddd; border-radius: 4px; padding: 8px 10px; color: #888; font-size: 13px; z-index: 100;">
                            "No matches."
                        </div>
                    }.into_any();
                }
                let label_of = label_for_list.clone();
                view! {
                    <div style="position: absolute; top: 100%; left: 0; right: 0; background: white; border: 1px solid #ddd; border-radius: 4px; max-height: 220px; overflow: auto; z-index: 100; box-shadow: 0 4px 12px rgba(0,0,0,0.12);">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                let text = label_of(&entry);
                                view! {
                                    <div
                                        style="padding: 7px 10px; cursor: pointer; font-size: 14px; border-bottom: 1px solid #f3f3f3;"
                                        on:click=move |_| {
                                            on_select.run(entry.clone());
                                            input.set(String::new());
                                            open.set(false);
                                        }
                                    >
                                        {text}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
