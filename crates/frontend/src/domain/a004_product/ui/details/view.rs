use super::view_model::ProductDetailsViewModel;
use crate::shared::i18n::use_i18n;
use crate::shared::notice::use_notice;
use contracts::domain::a001_category::Category;
use contracts::domain::a003_product_owner::ProductOwner;
use contracts::domain::a004_product::ProductForm;
use leptos::prelude::*;

/// Numeric input bound to one text field of the form
fn number_field(
    vm: ProductDetailsViewModel,
    id: &'static str,
    label: Signal<&'static str>,
    step: &'static str,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{move || label.get()}</label>
            <input
                type="number"
                id=id
                min="0"
                step=step
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ProductDetails(
    initial: ProductForm,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] owners: Signal<Vec<ProductOwner>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = ProductDetailsViewModel::new(initial, i18n, use_notice());

    view! {
        <div class="details-container product-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product_sku">{move || i18n.t("products.sku")}</label>
                    <input
                        type="text"
                        id="product_sku"
                        prop:value=move || vm.form.get().sku
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|f| f.sku = value);
                        }
                        placeholder=move || i18n.t("products.enterSku")
                    />
                </div>

                <div class="form-group">
                    <label for="product_name">{move || i18n.t("products.name")}</label>
                    <input
                        type="text"
                        id="product_name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|f| f.name = value);
                        }
                        placeholder=move || i18n.t("products.enterName")
                    />
                </div>

                <div class="form-group">
                    <label for="product_description">{move || i18n.t("products.descriptionField")}</label>
                    <textarea
                        id="product_description"
                        rows="3"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit(|f| f.description = value);
                        }
                    />
                </div>

                <div class="form-row">
                    {number_field(vm, "retail_price", Signal::derive(move || i18n.t("products.retailPrice")), "0.01",
                        |f| f.retail_price.clone(), |f, v| f.retail_price = v)}
                    {number_field(vm, "wholesale_price", Signal::derive(move || i18n.t("products.wholesalePrice")), "0.01",
                        |f| f.wholesale_price.clone(), |f, v| f.wholesale_price = v)}
                    {number_field(vm, "weight", Signal::derive(move || i18n.t("products.weight")), "0.01",
                        |f| f.weight.clone(), |f, v| f.weight = v)}
                </div>

                <div class="form-row">
                    {number_field(vm, "stock_quantity", Signal::derive(move || i18n.t("products.stock")), "1",
                        |f| f.stock_quantity.clone(), |f, v| f.stock_quantity = v)}
                    {number_field(vm, "reserved", Signal::derive(move || i18n.t("products.reserved")), "1",
                        |f| f.reserved.clone(), |f, v| f.reserved = v)}
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product_category">{move || i18n.t("products.category")}</label>
                        <select
                            id="product_category"
                            prop:value=move || vm.form.get().category_id
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit(|f| f.category_id = value);
                            }
                        >
                            <option value="">{move || i18n.t("products.selectCategory")}</option>
                            {move || categories.get().into_iter().map(|c| {
                                let id = c.category_id.clone().unwrap_or_default();
                                view! { <option value=id>{c.name}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="product_owner">{move || i18n.t("products.owner")}</label>
                        <select
                            id="product_owner"
                            prop:value=move || vm.form.get().product_owner_id
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit(|f| f.product_owner_id = value);
                            }
                        >
                            <option value="">{move || i18n.t("products.selectOwner")}</option>
                            {move || owners.get().into_iter().map(|o| {
                                let id = o.product_owner_id.clone().unwrap_or_default();
                                view! { <option value=id>{o.name}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().visible
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.edit(|f| f.visible = checked);
                            }
                        />
                        <span>{move || i18n.t("products.visible")}</span>
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.get().override_available
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.edit(|f| f.override_available = checked);
                            }
                        />
                        <span>{move || i18n.t("products.overrideAvailable")}</span>
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.is_saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.is_edit_mode() { i18n.t("common.update") } else { i18n.t("common.add") }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {move || i18n.t("common.cancel")}
                </button>
            </div>
        </div>
    }
}
