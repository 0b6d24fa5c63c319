use contracts::domain::persons::Person;
use contracts::domain::structures::Structure;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::persons::api as persons_api;
use crate::domain::structures::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;

#[component]
pub fn StructureDetails(id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_context::<ToastService>().expect("ToastService should be provided");

    let (structure, set_structure) = signal(None::<Structure>);
    let (sub_directions, set_sub_directions) = signal(Vec::<Structure>::new());
    let (members, set_members) = signal(Vec::<Person>::new());

    spawn_local(async move {
        match api::fetch_structure(id).await {
            Ok(s) => {
                let is_direction = s.is_direction();
                set_structure.set(Some(s));
                if is_direction {
                    match api::fetch_sub_directions(id).await {
                        Ok(subs) => set_sub_directions.set(subs),
                        Err(e) => {
                            log::error!("Failed to load sub-directions of {}: {}", id, e);
                            toasts.error("Failed to load sub-directions.");
                        }
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to load structure {}: {}", id, e);
                toasts.error("Failed to load the structure.");
            }
        }
    });

    spawn_local(async move {
        match persons_api::fetch_persons_of_structure(id).await {
            Ok(persons) => set_members.set(persons),
            Err(e) => {
                log::error!("Failed to load members of structure {}: {}", id, e);
                toasts.error("Failed to load members.");
            }
        }
    });

    let card = move || {
        let Some(s) = structure.get() else {
            return view! {
                <div style="padding: 18px; color: #888;">"Loading..."</div>
            }
            .into_any();
        };
        let manager = s
            .chef
            .as_deref()
            .map(|p| p.full_name())
            .unwrap_or_else(|| "N/A".to_string());
        let (level, color) = if s.is_direction() {
            ("Direction", BadgeColor::Brand)
        } else {
            ("Sub-direction", BadgeColor::Informative)
        };
        view! {
            <div style="background: white; border: 1px solid #eee; border-radius: 8px; padding: 18px; display: flex; flex-direction: column; gap: 8px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    <h2 style="margin: 0; font-size: 18px;">{s.name.clone()}</h2>
                    <Badge appearance=BadgeAppearance::Tint color=color>
                        <span>{level}</span>
                    </Badge>
                </div>
                <div style="color: #555; font-size: 13px;">{format!("Manager: {}", manager)}</div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <PageHeader title="Structure" subtitle="Organizational unit">
                <Button on_click=move |_| ctx.navigate(Page::Structures)>
                    {icon("arrow-left")}
                    " Back to Structures"
                </Button>
            </PageHeader>
            {card}
            <Show when=move || !sub_directions.get().is_empty()>
                <div style="margin-top: 16px;">
                    <h3 style="font-size: 15px; margin: 0 0 8px 0;">"Sub-directions"</h3>
                    <div style="display: flex; flex-direction: column; gap: 6px;">
                        <For
                            each=move || sub_directions.get()
                            key=|s| s.id
                            children=move |s| {
                                let sub_id = s.id;
                                view! {
                                    <div
                                        style="background: white; border: 1px solid #eee; border-radius: 6px; padding: 10px 14px; cursor: pointer;"
                                        on:click=move |_| ctx.navigate(Page::StructureDetails(sub_id))
                                    >
                                        {s.name.clone()}
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
            <div style="margin-top: 16px;">
                <h3 style="font-size: 15px; margin: 0 0 8px 0;">"Members"</h3>
                {move || {
                    let persons = members.get();
                    if persons.is_empty() {
                        return view! {
                            <div style="color: #888; font-size: 13px;">"No members registered."</div>
                        }
                        .into_any();
                    }
                    persons
                        .into_iter()
                        .map(|p| {
                            let person_id = p.id;
                            view! {
                                <div
                                    style="display: flex; align-items: center; gap: 12px; background: white; border: 1px solid #eee; border-radius: 6px; padding: 10px 14px; cursor: pointer;"
                                    on:click=move |_| ctx.navigate(Page::PersonDetails(person_id))
                                >
                                    <span style="flex: 1;">{p.full_name()}</span>
                                    <span style="color: #888; font-size: 13px;">{p.grade.clone()}</span>
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
