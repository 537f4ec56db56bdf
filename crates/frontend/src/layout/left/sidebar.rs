//! Sidebar with the dashboard tabs, language switcher and logout.

use crate::layout::global_context::{AppGlobalContext, DashboardTab};
use crate::shared::i18n::{use_i18n, LanguageSwitcher};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__title">{move || i18n.t("app.title")}</span>
                <span class="app-sidebar__user">{user_name}</span>
            </div>

            {DashboardTab::ALL.into_iter().map(|tab| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == tab
                        on:click=move |_| ctx.activate_tab(tab)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(tab.icon())}
                            <span>{move || i18n.t(tab.label_key())}</span>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div class="app-sidebar__footer">
                <LanguageSwitcher />
                <div
                    class="app-sidebar__item app-sidebar__item--logout"
                    on:click=move |_| do_logout(set_auth_state)
                >
                    <div class="app-sidebar__item-content">
                        {icon("logout")}
                        <span>{move || i18n.t("nav.logout")}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
