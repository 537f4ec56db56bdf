use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm;
use crate::shared::modal::Modal;
use crate::shared::notice::use_notice;
use crate::shared::rest;
use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let i18n = use_i18n();
    let notice = use_notice();

    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let (name, set_name) = signal(String::new());

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match rest::fetch_all::<Category>().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    notice.error(i18n.t_untracked("common.error"), i18n.t_untracked("common.loadError"));
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    let open_create = move || {
        set_editing_id.set(None);
        set_name.set(String::new());
        set_show_modal.set(true);
    };

    let open_edit = move |category: Category| {
        set_editing_id.set(category.category_id.clone());
        set_name.set(category.name);
        set_show_modal.set(true);
    };

    let save = move || {
        let dto = match CategoryDto::from_input(&name.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                notice.error(i18n.t_untracked("common.error"), i18n.validation_message(&e));
                return;
            }
        };
        let id = editing_id.get_untracked();
        spawn_local(async move {
            let (result, ok_key, err_key) = match id {
                Some(id) => (
                    rest::update::<Category, _>(&id, &dto).await,
                    "common.updateSuccess",
                    "common.updateError",
                ),
                None => (
                    rest::insert::<Category, _>(&dto).await.map(|_| ()),
                    "common.createSuccess",
                    "common.createError",
                ),
            };
            match result {
                Ok(()) => {
                    notice.success(i18n.t_untracked("common.success"), i18n.t_untracked(ok_key));
                    set_show_modal.set(false);
                    fetch();
                }
                Err(e) => {
                    log::error!("Save category failed: {}", e);
                    notice.error(i18n.t_untracked("common.error"), i18n.t_untracked(err_key));
                }
            }
        });
    };

    let delete = move |id: String| {
        if !confirm(i18n.t_untracked("common.confirmDelete")) {
            return;
        }
        spawn_local(async move {
            match rest::delete::<Category>(&id).await {
                Ok(()) => {
                    notice.success(i18n.t_untracked("common.success"), i18n.t_untracked("common.deleteSuccess"));
                    fetch();
                }
                Err(_) => {
                    notice.error(i18n.t_untracked("common.error"), i18n.t_untracked("common.deleteError"));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || i18n.t("categories.title").to_string())
                subtitle=Signal::derive(move || Some(i18n.t("categories.description").to_string()))
            >
                <button class="button button--primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    {move || i18n.t("categories.addNew")}
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card">
                <div class="card__header">
                    <h3>{move || i18n.t("categories.list")}</h3>
                    <span class="card__meta">
                        {move || format!("{}: {}", i18n.t("categories.count"), items.get().len())}
                    </span>
                </div>

                <Show
                    when=move || !is_loading.get()
                    fallback=move || view! { <div class="loading">{i18n.t("common.loading")}</div> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{move || i18n.t("categories.name")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categories.createdAt")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categories.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || items.get().into_iter().map(|category| {
                                    let id = category.category_id.clone().unwrap_or_default();
                                    let created = category
                                        .created_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "-".to_string());
                                    let name = category.name.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{created}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    on:click=move |_| open_edit(category.clone())
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    on:click=move |_| delete(id.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                <Modal
                    title=Signal::derive(move || {
                        let key = if editing_id.get().is_some() { "categories.edit" } else { "categories.add" };
                        i18n.t(key).to_string()
                    })
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                >
                    <div class="details-form">
                        <div class="form-group">
                            <label for="category_name">{move || i18n.t("categories.name")}</label>
                            <input
                                type="text"
                                id="category_name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                placeholder=move || i18n.t("categories.placeholder")
                            />
                        </div>
                    </div>
                    <div class="details-actions">
                        <button class="button button--primary" on:click=move |_| save()>
                            {move || if editing_id.get().is_some() { i18n.t("common.update") } else { i18n.t("common.add") }}
                        </button>
                        <button class="button button--secondary" on:click=move |_| set_show_modal.set(false)>
                            {move || i18n.t("common.cancel")}
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
