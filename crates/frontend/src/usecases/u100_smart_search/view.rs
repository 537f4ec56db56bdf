use super::results::SearchResults;
use super::view_model::SmartSearchViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::button::{Button, ButtonVariant};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use contracts::shared::smart_search::{CriterionAttribute, SearchCriterion};
use leptos::prelude::*;

#[component]
pub fn SmartSearchPage() -> impl IntoView {
    let i18n = use_i18n();
    let vm = SmartSearchViewModel::new(i18n, use_notice());

    view! {
        <div class="page smart-search">
            <PageHeader
                title=Signal::derive(move || i18n.t("search.title").to_string())
                subtitle=Signal::derive(move || Some(i18n.t("search.description").to_string()))
            >
                <Button
                    variant=ButtonVariant::Secondary
                    icon_name="plus"
                    on_click=Callback::new(move |_| vm.add_command())
                >
                    {move || i18n.t("search.addCriteria")}
                </Button>
            </PageHeader>

            <div class="card">
                <div class="criteria-list">
                    <For
                        each=move || vm.criteria.get().items().to_vec()
                        key=|c: &SearchCriterion| c.id.clone()
                        let:criterion
                    >
                        <CriterionRow vm=vm id=criterion.id />
                    </For>
                </div>

                <div class="criteria-actions">
                    <Button
                        icon_name="search"
                        disabled=Signal::derive(move || vm.is_searching.get())
                        on_click=Callback::new(move |_| vm.search_command())
                    >
                        {move || if vm.is_searching.get() { i18n.t("search.searching") } else { i18n.t("search.search") }}
                    </Button>
                </div>
            </div>

            <SearchResults vm=vm />
        </div>
    }
}

/// One field/operator/value line of the editor
#[component]
fn CriterionRow(vm: SmartSearchViewModel, id: String) -> impl IntoView {
    let i18n = use_i18n();
    let current = {
        let id = id.clone();
        Memo::new(move |_| {
            vm.criteria
                .with(|list| list.items().iter().find(|c| c.id == id).cloned())
                .unwrap_or_default()
        })
    };
    let catalog = vm.criteria.with_untracked(|list| list.catalog());

    let set = {
        let id = id.clone();
        move |attribute: CriterionAttribute, value: String| vm.update_command(&id, attribute, value)
    };
    let set_field = set.clone();
    let set_operator = set.clone();
    let set_value = set;

    view! {
        <div class="criterion-row">
            <div class="form-group">
                <label>{move || i18n.t("search.field")}</label>
                <select
                    prop:value=move || current.get().field
                    on:change=move |ev| set_field(CriterionAttribute::Field, event_target_value(&ev))
                >
                    <option value="">{move || i18n.t("search.selectField")}</option>
                    {catalog.fields().iter().map(|field| {
                        let label_key = field.label_key;
                        view! { <option value=field.name>{move || i18n.t(label_key)}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label>{move || i18n.t("search.operator")}</label>
                <select
                    prop:value=move || current.get().operator
                    disabled=move || current.get().field.is_empty()
                    on:change=move |ev| set_operator(CriterionAttribute::Operator, event_target_value(&ev))
                >
                    <option value="">{move || i18n.t("search.selectOperator")}</option>
                    {move || {
                        let field = current.get().field;
                        vm.operators_for(&field).iter().map(|op| {
                            let label_key = op.label_key();
                            view! { <option value=op.token()>{move || i18n.t(label_key)}</option> }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="form-group criterion-row__value">
                <label>{move || i18n.t("search.value")}</label>
                <input
                    type="text"
                    prop:value=move || current.get().value
                    on:input=move |ev| set_value(CriterionAttribute::Value, event_target_value(&ev))
                    placeholder=move || i18n.t("search.enterValue")
                />
            </div>

            <button
                class="button button--ghost button--small criterion-row__remove"
                title=move || i18n.t("search.remove")
                on:click=move |_| vm.remove_command(&id)
            >
                {icon("x")}
            </button>
        </div>
    }
}
