use contracts::domain::items::ItemStatus;
use leptos::prelude::*;
use thaw::*;

/// Colored badge for an item lifecycle status.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<ItemStatus>) -> impl IntoView {
    view! {
        {move || {
            let status = status.get();
            let color = match status {
                ItemStatus::InStock => BadgeColor::Success,
                ItemStatus::Distributed => BadgeColor::Brand,
                ItemStatus::UnderRepair => BadgeColor::Warning,
                ItemStatus::Repaired => BadgeColor::Informative,
                ItemStatus::Reformed => BadgeColor::Danger,
            };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    <span>{status.label()}</span>
                </Badge>
            }
        }}
    }
}
