use contracts::domain::articles::{Article, ArticleType};
use contracts::domain::operations::{ArrivalLine, ArrivalRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;
use web_sys::HtmlInputElement;

use crate::domain::articles::api as articles_api;
use crate::shared::components::search_select::SearchSelect;
use crate::shared::icons::icon;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::current_user_id;

const BUDGETS: [&str; 3] = ["BUDGET_2023", "BUDGET_2024", "EXCEPTIONAL"];

/// Opens the arrival registration dialog. Hardware articles collect serial
/// numbers one per Enter keypress; consumables collect a quantity.
pub fn open_add_arrival(modal: ModalService, toasts: ToastService, on_created: Callback<()>) {
    modal.open_sized("Register Arrival", Some("640px".to_string()), move |handle| {
        let budget = RwSignal::new(String::new());
        let type_filter = RwSignal::new("ALL".to_string());
        let lines = RwSignal::new(Vec::<ArrivalLine>::new());
        let remarks = RwSignal::new(String::new());
        let error = RwSignal::new(None::<String>);
        let is_saving = RwSignal::new(false);

        let (suggestions, set_suggestions) = signal(Vec::<Article>::new());

        let search = Callback::new(move |query: String| {
            let filter = type_filter.get_untracked();
            spawn_local(async move {
                match articles_api::search_articles(&query, &filter).await {
                    Ok(found) => set_suggestions.set(found),
                    Err(e) => {
                        log::error!("Article search failed: {}", e);
                        set_suggestions.set(Vec::new());
                    }
                }
            });
        });

        let add_line = Callback::new(move |article: Article| {
            lines.update(|ls| {
                if ls.iter().any(|l| l.article.id == article.id) {
                    return;
                }
                ls.push(ArrivalLine::new(article));
            });
        });

        let add_serial = move |article_id: i64, serial: String| {
            let serial = serial.trim().to_string();
            if serial.is_empty() {
                return;
            }
            let duplicate = lines.with_untracked(|ls| {
                ls.iter()
                    .any(|l| l.serial_numbers.iter().any(|s| s == &serial))
            });
            if duplicate {
                toasts.error("This serial number has already been added.");
                return;
            }
            lines.update(|ls| {
                if let Some(line) = ls.iter_mut().find(|l| l.article.id == article_id) {
                    line.serial_numbers.push(serial);
                }
            });
        };

        let submit = {
            let handle = handle.clone();
            move |_| {
                let current_budget = budget.get_untracked();
                let current_lines = lines.get_untracked();
                if let Err(msg) = ArrivalRequest::validate(&current_budget, &current_lines) {
                    error.set(Some(msg));
                    return;
                }
                error.set(None);
                is_saving.set(true);
                let request = ArrivalRequest::from_lines(
                    current_budget,
                    &current_lines,
                    current_user_id(),
                    remarks.get_untracked(),
                );
                let handle = handle.clone();
                spawn_local(async move {
                    match crate::domain::arrivals::api::create_arrival(&request).await {
                        Ok(()) => {
                            toasts.success("Arrival registered.");
                            is_saving.set(false);
                            handle.close();
                            on_created.run(());
                        }
                        Err(e) => {
                            log::error!("Failed to register arrival: {}", e);
                            toasts.error("Failed to register the arrival.");
                            is_saving.set(false);
                        }
                    }
                });
            }
        };

        let line_views = move || {
            lines
                .get()
                .into_iter()
                .map(|line| {
                    let article_id = line.article.id;
                    let is_hardware = line.article.article_type == ArticleType::Hardware;
                    let chips = line
                        .serial_numbers
                        .iter()
                        .cloned()
                        .map(|serial| {
                            let chip_serial = serial.clone();
                            view! {
                                <span style="display: inline-flex; align-items: center; gap: 4px; background: #eef2ff; border-radius: 12px; padding: 2px 10px; font-size: 12px; font-family: monospace;">
                                    {serial}
                                    <button
                                        style="background: none; border: none; cursor: pointer; padding: 0; line-height: 1; color: #666;"
                                        on:click=move |_| {
                                            let chip_serial = chip_serial.clone();
                                            lines.update(|ls| {
                                                if let Some(l) = ls.iter_mut().find(|l| l.article.id == article_id) {
                                                    l.serial_numbers.retain(|s| s != &chip_serial);
                                                }
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view();

                    let detail = if is_hardware {
                        view! {
                            <div style="display: flex; flex-direction: column; gap: 6px;">
                                <input
                                    type="text"
                                    placeholder="Serial number, press Enter to add"
                                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 13px;"
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            let input: HtmlInputElement = event_target(&ev);
                                            add_serial(article_id, input.value());
                                            input.set_value("");
                                        }
                                    }
                                />
                                <div style="display: flex; flex-wrap: wrap; gap: 6px;">{chips}</div>
                            </div>
                        }
                        .into_any()
                    } else {
                        let quantity = line.quantity;
                        view! {
                            <label style="display: flex; align-items: center; gap: 8px; font-size: 13px;">
                                "Quantity"
                                <input
                                    type="number"
                                    min="1"
                                    style="width: 90px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 13px;"
                                    prop:value=quantity.to_string()
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                        lines.update(|ls| {
                                            if let Some(l) = ls.iter_mut().find(|l| l.article.id == article_id) {
                                                l.quantity = parsed.max(1);
                                            }
                                        });
                                    }
                                />
                            </label>
                        }
                        .into_any()
                    };

                    view! {
                        <div style="border: 1px solid #eee; border-radius: 6px; padding: 10px 12px; display: flex; flex-direction: column; gap: 8px;">
                            <div style="display: flex; align-items: center; gap: 8px;">
                                <strong style="flex: 1; font-size: 14px;">
                                    {format!("{} - {}", line.article.model, line.article.designation)}
                                </strong>
                                <span style="color: #888; font-size: 12px;">{line.article.article_type.label()}</span>
                                <button
                                    style="background: none; border: none; cursor: pointer; color: #b91c1c; padding: 2px; line-height: 1;"
                                    on:click=move |_| {
                                        lines.update(|ls| ls.retain(|l| l.article.id != article_id));
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                            {detail}
                        </div>
                    }
                })
                .collect_view()
        };

        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <div style="display: flex; gap: 12px;">
                    <label style="flex: 1; display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                        "Budget"
                        <select
                            style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                            on:change=move |ev| budget.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || budget.get().is_empty()>
                                "Select a budget..."
                            </option>
                            {BUDGETS
                                .iter()
                                .map(|b| view! { <option value=*b>{*b}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label style="flex: 1; display: flex; flex-direction: column; gap: 4px; font-size: 13px;">
                        "Article type"
                        <select
                            style="padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                            on:change=move |ev| type_filter.set(event_target_value(&ev))
                        >
                            <option value="ALL">"ALL"</option>
                            <option value="HARDWARE">"HARDWARE"</option>
                            <option value="CONSUMABLE">"CONSUMABLE"</option>
                        </select>
                    </label>
                </div>
                <SearchSelect
                    placeholder="Search articles by name..."
                    on_search=search
                    suggestions=suggestions
                    label_of=Arc::new(|a: &Article| format!("{} - {}", a.model, a.designation))
                    on_select=add_line
                />
                {line_views}
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
                        {move || if is_saving.get() { "Saving..." } else { "Register" }}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
