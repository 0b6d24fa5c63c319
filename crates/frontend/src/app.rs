use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal::ModalService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Application-wide services, available everywhere via context.
    provide_context(AppGlobalContext::new());
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
