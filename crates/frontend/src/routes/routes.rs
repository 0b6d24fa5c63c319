use crate::dashboards::home::ui::HomeDashboard;
use crate::domain::arrivals::ui::list::ArrivalsList;
use crate::domain::articles::ui::details::ArticleDetails;
use crate::domain::articles::ui::list::ArticlesList;
use crate::domain::distributions::ui::list::DistributionsList;
use crate::domain::operations::ui::list::OperationsList;
use crate::domain::persons::ui::details::PersonDetails;
use crate::domain::persons::ui::list::PersonsList;
use crate::domain::reparations::ui::list::ReparationsList;
use crate::domain::structures::ui::details::StructureDetails;
use crate::domain::structures::ui::list::StructuresList;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::shared::api_utils::auth_enabled;
use crate::shared::modal::ModalHost;
use crate::shared::toast::ToastHost;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell content=move || {
            match ctx.page.get() {
                Page::Dashboard => view! { <HomeDashboard /> }.into_any(),
                Page::Articles => view! { <ArticlesList /> }.into_any(),
                Page::ArticleDetails(id) => view! { <ArticleDetails id=id /> }.into_any(),
                Page::Arrivals => view! { <ArrivalsList /> }.into_any(),
                Page::Distributions => view! { <DistributionsList /> }.into_any(),
                Page::Reparations => view! { <ReparationsList /> }.into_any(),
                Page::Persons => view! { <PersonsList /> }.into_any(),
                Page::PersonDetails(id) => view! { <PersonDetails id=id /> }.into_any(),
                Page::Structures => view! { <StructuresList /> }.into_any(),
                Page::StructureDetails(id) => view! { <StructureDetails id=id /> }.into_any(),
                Page::Operations => view! { <OperationsList /> }.into_any(),
            }
        } />
        <ModalHost />
        <ToastHost />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_enabled() || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
