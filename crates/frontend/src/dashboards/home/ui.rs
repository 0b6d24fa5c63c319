use std::collections::BTreeMap;

use contracts::domain::operations::Operation;
use contracts::shared::stats::Stats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::home::aggregate::{items_by_status, operations_by_type, operations_per_month};
use crate::dashboards::home::api;
use crate::domain::operations::api as operations_api;
use crate::domain::operations::ui::operation_badge_color;
use crate::shared::charts::BarChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_datetime;
use crate::shared::toast::ToastService;

const RECENT_OPERATIONS_COUNT: usize = 5;

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (stats, set_stats) = signal(None::<Stats>);
    let (in_stock, set_in_stock) = signal(BTreeMap::<String, u64>::new());
    let (per_month, set_per_month) = signal(Vec::<(String, u64)>::new());
    let (per_type, set_per_type) = signal(Vec::<(String, u64)>::new());
    let (per_status, set_per_status) = signal(Vec::<(String, u64)>::new());
    let (recent, set_recent) = signal(Vec::<Operation>::new());

    spawn_local(async move {
        match api::get_stats().await {
            Ok(s) => set_stats.set(Some(s)),
            Err(e) => {
                log::error!("Failed to load stats: {}", e);
                toasts.error("Failed to load dashboard stats.");
            }
        }
    });

    spawn_local(async move {
        match api::get_articles_in_stock().await {
            Ok(counts) => set_in_stock.set(counts),
            Err(e) => log::error!("Failed to load stock counts: {}", e),
        }
    });

    spawn_local(async move {
        match operations_api::fetch_all_operations().await {
            Ok(ops) => {
                set_per_month.set(operations_per_month(&ops));
                set_per_type.set(operations_by_type(&ops));
            }
            Err(e) => log::error!("Failed to load operations for the charts: {}", e),
        }
    });

    spawn_local(async move {
        match api::get_all_items().await {
            Ok(items) => set_per_status.set(items_by_status(&items)),
            Err(e) => log::error!("Failed to load items for the chart: {}", e),
        }
    });

    spawn_local(async move {
        match operations_api::fetch_operations(0, RECENT_OPERATIONS_COUNT, "").await {
            Ok(page) => set_recent.set(page.content),
            Err(e) => log::error!("Failed to load recent operations: {}", e),
        }
    });

    let stat = move |f: fn(&Stats) -> u64| Signal::derive(move || stats.get().map(|s| f(&s)));

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Inventory at a glance">
                {()}
            </PageHeader>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;">
                <StatCard
                    label="Total Articles".to_string()
                    icon_name="package".to_string()
                    value=stat(|s| s.total_articles)
                />
                <StatCard
                    label="Items In Stock".to_string()
                    icon_name="truck".to_string()
                    value=stat(|s| s.items_in_stock)
                />
                <StatCard
                    label="Distributed Items".to_string()
                    icon_name="arrow-right-left".to_string()
                    value=stat(|s| s.distributed_items)
                />
                <StatCard
                    label="Under Repair".to_string()
                    icon_name="wrench".to_string()
                    value=stat(|s| s.under_repair)
                />
                <StatCard
                    label="Reformed".to_string()
                    icon_name="trash".to_string()
                    value=stat(|s| s.reformed_count)
                />
                <StatCard
                    label="Structures".to_string()
                    icon_name="building".to_string()
                    value=stat(|s| s.structures_count)
                />
            </div>

            <div style="margin-top: 18px;">
                <h3 style="font-size: 15px; margin: 0 0 8px 0;">"In Stock by Designation"</h3>
                {move || {
                    let counts = in_stock.get();
                    if counts.is_empty() {
                        return view! {
                            <div style="color: #888; font-size: 13px;">"Nothing in stock."</div>
                        }
                        .into_any();
                    }
                    view! {
                        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 10px;">
                            {counts
                                .into_iter()
                                .map(|(designation, count)| {
                                    view! {
                                        <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 12px 14px;">
                                            <div style="font-size: 13px; color: #666;">{designation}</div>
                                            <div style="font-size: 20px; font-weight: 600;">{count.to_string()}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <div style="display: flex; flex-wrap: wrap; gap: 24px; margin-top: 18px;">
                <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 16px;">
                    <h3 style="font-size: 15px; margin: 0 0 10px 0;">"Operations per Month"</h3>
                    <BarChart data=per_month />
                </div>
                <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 16px;">
                    <h3 style="font-size: 15px; margin: 0 0 10px 0;">"Operations by Type"</h3>
                    <BarChart data=per_type color="#7c3aed" />
                </div>
                <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 16px;">
                    <h3 style="font-size: 15px; margin: 0 0 10px 0;">"Items by Status"</h3>
                    <BarChart data=per_status color="#16a34a" />
                </div>
            </div>

            <div style="margin-top: 18px;">
                <h3 style="font-size: 15px; margin: 0 0 8px 0;">"Recent Operations"</h3>
                {move || {
                    let operations = recent.get();
                    if operations.is_empty() {
                        return view! {
                            <div style="color: #888; font-size: 13px;">"No operations recorded yet."</div>
                        }
                        .into_any();
                    }
                    operations
                        .into_iter()
                        .map(|op| {
                            let color = operation_badge_color(op.operation_type);
                            view! {
                                <div style="display: flex; align-items: center; gap: 12px; background: white; border: 1px solid #eee; border-radius: 6px; padding: 10px 14px; margin-bottom: 6px;">
                                    <Badge appearance=BadgeAppearance::Tint color=color>
                                        <span>{op.operation_type.label()}</span>
                                    </Badge>
                                    <span style="flex: 1; color: #555; font-size: 14px;">
                                        {if op.remarks.is_empty() {
                                            op.first_article_label()
                                        } else {
                                            op.remarks.clone()
                                        }}
                                    </span>
                                    <span style="color: #888; font-size: 13px;">{op.user_name()}</span>
                                    <span style="color: #888; font-size: 13px;">{format_datetime(&op.date)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
