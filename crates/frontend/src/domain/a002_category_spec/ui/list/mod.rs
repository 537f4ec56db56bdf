use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, or_fallback};
use crate::shared::modal::Modal;
use crate::shared::notice::use_notice;
use crate::shared::rest;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_category_spec::{CategorySpec, CategorySpecDto, SPEC_VALUE_TYPES};
use contracts::domain::common::lookup_name;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Form state of the category spec dialog
#[derive(Clone, Debug, Default, PartialEq)]
struct SpecForm {
    id: Option<String>,
    name: String,
    category_id: String,
    spec_type: String,
}

impl From<CategorySpec> for SpecForm {
    fn from(spec: CategorySpec) -> Self {
        Self {
            id: spec.category_spec_id,
            name: spec.name,
            category_id: spec.category_id.unwrap_or_default(),
            spec_type: spec.spec_type.unwrap_or_default(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategorySpecList() -> impl IntoView {
    let i18n = use_i18n();
    let notice = use_notice();

    let (items, set_items) = signal::<Vec<CategorySpec>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (is_loading, set_is_loading) = signal(true);
    let (show_modal, set_show_modal) = signal(false);
    let form = RwSignal::new(SpecForm::default());

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            let specs = rest::fetch_all::<CategorySpec>().await;
            let cats = rest::fetch_all::<Category>().await;
            match (specs, cats) {
                (Ok(specs), Ok(cats)) => {
                    set_items.set(specs);
                    set_categories.set(cats);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Load category specs failed: {}", e);
                    notice.error(i18n.t_untracked("common.error"), i18n.t_untracked("common.loadError"));
                }
            }
            set_is_loading.set(false);
        });
    };

    let open_form = move |initial: SpecForm| {
        form.set(initial);
        set_show_modal.set(true);
    };

    let save = move || {
        let current = form.get_untracked();
        let dto = match CategorySpecDto::from_input(&current.name, &current.category_id, &current.spec_type) {
            Ok(dto) => dto,
            Err(e) => {
                notice.error(i18n.t_untracked("common.error"), i18n.validation_message(&e));
                return;
            }
        };
        spawn_local(async move {
            let (result, ok_key, err_key) = match current.id {
                Some(id) => (
                    rest::update::<CategorySpec, _>(&id, &dto).await,
                    "common.updateSuccess",
                    "common.updateError",
                ),
                None => (
                    rest::insert::<CategorySpec, _>(&dto).await.map(|_| ()),
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
                    log::error!("Save category spec failed: {}", e);
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
            match rest::delete::<CategorySpec>(&id).await {
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
                title=Signal::derive(move || i18n.t("categorySpecs.title").to_string())
                subtitle=Signal::derive(move || Some(i18n.t("categorySpecs.description").to_string()))
            >
                <button class="button button--primary" on:click=move |_| open_form(SpecForm::default())>
                    {icon("plus")}
                    {move || i18n.t("categorySpecs.addNew")}
                </button>
            </PageHeader>

            <div class="card">
                <div class="card__header">
                    <h3>{move || i18n.t("categorySpecs.list")}</h3>
                    <span class="card__meta">
                        {move || format!("{}: {}", i18n.t("categorySpecs.count"), items.get().len())}
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
                                    <th class="table__header-cell">{move || i18n.t("categorySpecs.name")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categorySpecs.category")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categorySpecs.type")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categorySpecs.createdAt")}</th>
                                    <th class="table__header-cell">{move || i18n.t("categorySpecs.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let cats = categories.get();
                                    let not_specified = i18n.t("common.notSpecified");
                                    items.get().into_iter().map(|spec| {
                                        let id = spec.category_spec_id.clone().unwrap_or_default();
                                        let category_name = or_fallback(
                                            lookup_name(&cats, spec.category_id.as_deref()),
                                            not_specified,
                                        );
                                        let spec_type = or_fallback(spec.spec_type.as_deref(), "-");
                                        let created = spec
                                            .created_at
                                            .as_deref()
                                            .map(format_datetime)
                                            .unwrap_or_else(|| "-".to_string());
                                        let name = spec.name.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{name}</td>
                                                <td class="table__cell">{category_name}</td>
                                                <td class="table__cell">{spec_type}</td>
                                                <td class="table__cell">{created}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--ghost button--small"
                                                        on:click=move |_| open_form(SpecForm::from(spec.clone()))
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
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                <Modal
                    title=Signal::derive(move || {
                        let key = if form.get().id.is_some() { "categorySpecs.edit" } else { "categorySpecs.add" };
                        i18n.t(key).to_string()
                    })
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                >
                    <div class="details-form">
                        <div class="form-group">
                            <label for="spec_name">{move || i18n.t("categorySpecs.name")}</label>
                            <input
                                type="text"
                                id="spec_name"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                placeholder=move || i18n.t("categorySpecs.enterName")
                            />
                        </div>
                        <div class="form-group">
                            <label for="spec_category">{move || i18n.t("categorySpecs.category")}</label>
                            <select
                                id="spec_category"
                                prop:value=move || form.get().category_id
                                on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                            >
                                <option value="">{move || i18n.t("categorySpecs.selectCategory")}</option>
                                {move || categories.get().into_iter().map(|c| {
                                    let id = c.category_id.clone().unwrap_or_default();
                                    view! { <option value=id>{c.name}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="spec_type">{move || i18n.t("categorySpecs.type")}</label>
                            <select
                                id="spec_type"
                                prop:value=move || form.get().spec_type
                                on:change=move |ev| form.update(|f| f.spec_type = event_target_value(&ev))
                            >
                                <option value="">{move || i18n.t("categorySpecs.selectType")}</option>
                                {SPEC_VALUE_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="details-actions">
                        <button class="button button--primary" on:click=move |_| save()>
                            {move || if form.get().id.is_some() { i18n.t("common.update") } else { i18n.t("common.add") }}
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
