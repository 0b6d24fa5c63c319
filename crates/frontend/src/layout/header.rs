use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::auth_enabled;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_user_name, do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (_, set_auth_state) = use_auth();
    let user_name = current_user_name();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <header style="display: flex; align-items: center; justify-content: space-between; padding: 12px 20px; background: white; border-bottom: 1px solid #e5e7eb;">
            <h2 style="margin: 0; font-size: 18px;">
                {move || ctx.page.get().title()}
            </h2>
            <div style="display: flex; align-items: center; gap: 14px;">
                <span style="font-size: 14px; color: #555;">{user_name}</span>
                <Show when=auth_enabled>
                    <button
                        style="display: inline-flex; align-items: center; gap: 6px; background: none; border: 1px solid #ddd; border-radius: 4px; padding: 5px 10px; cursor: pointer; font-size: 13px; color: #444;"
                        on:click=logout
                    >
                        {icon("log-out")}
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
