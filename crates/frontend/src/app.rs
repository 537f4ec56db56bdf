use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::I18nProvider;
use crate::shared::notice::{NoticeService, NoticeStack};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Active dashboard tab, synced with `?active=` in the URL.
    provide_context(AppGlobalContext::new());

    // Toasts raised from any screen.
    provide_context(NoticeService::new());

    view! {
        <I18nProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
            <NoticeStack />
        </I18nProvider>
    }
}
