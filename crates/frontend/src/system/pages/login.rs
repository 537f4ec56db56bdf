use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::{use_i18n, LanguageSwitcher};
use crate::shared::notice::use_notice;
use crate::system::auth::api;
use crate::system::auth::context::{start_session, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let notice = use_notice();
    let (_, set_auth_state) = use_auth();

    let (is_signup, set_is_signup) = signal(false);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        if is_signup.get_untracked() {
            let request = SignupRequest::new(
                email_val,
                password_val,
                full_name.get_untracked().trim().to_string(),
                &phone.get_untracked(),
            );
            spawn_local(async move {
                match api::signup(request).await {
                    Ok(()) => {
                        notice.success(
                            i18n.t_untracked("common.success"),
                            i18n.t_untracked("auth.signupSuccess"),
                        );
                        set_is_signup.set(false);
                    }
                    Err(e) => {
                        set_error_message
                            .set(Some(format!("{}: {}", i18n.t_untracked("auth.signupError"), e)));
                    }
                }
                set_is_loading.set(false);
            });
        } else {
            spawn_local(async move {
                match api::login(email_val, password_val).await {
                    // Switching auth state swaps the login page for the dashboard.
                    Ok(session) => start_session(session, set_auth_state),
                    Err(e) => {
                        set_error_message
                            .set(Some(format!("{}: {}", i18n.t_untracked("auth.loginError"), e)));
                    }
                }
                set_is_loading.set(false);
            });
        }
    };

    let submit_label = move || match (is_signup.get(), is_loading.get()) {
        (false, false) => i18n.t("auth.login"),
        (false, true) => i18n.t("auth.loggingIn"),
        (true, false) => i18n.t("auth.signup"),
        (true, true) => i18n.t("auth.signingUp"),
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__toolbar">
                    <LanguageSwitcher />
                </div>
                <h1>{move || i18n.t("app.title")}</h1>
                <h2>{move || if is_signup.get() { i18n.t("auth.signup") } else { i18n.t("auth.login") }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || is_signup.get()>
                        <div class="form-group">
                            <label for="full_name">{move || i18n.t("auth.fullName")}</label>
                            <input
                                type="text"
                                id="full_name"
                                prop:value=move || full_name.get()
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">{move || i18n.t("auth.phone")}</label>
                            <input
                                type="tel"
                                id="phone"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">{move || i18n.t("auth.email")}</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || i18n.t("auth.password")}</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {submit_label}
                    </button>
                </form>

                <button
                    class="button button--ghost login-box__toggle"
                    disabled=move || is_loading.get()
                    on:click=move |_| {
                        set_error_message.set(None);
                        set_is_signup.update(|v| *v = !*v);
                    }
                >
                    {move || if is_signup.get() { i18n.t("auth.haveAccount") } else { i18n.t("auth.noAccount") }}
                </button>
            </div>
        </div>
    }
}
