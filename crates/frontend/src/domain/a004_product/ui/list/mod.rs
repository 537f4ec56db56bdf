use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, or_fallback};
use crate::shared::modal::Modal;
use crate::shared::notice::use_notice;
use crate::shared::rest;
use contracts::domain::a001_category::Category;
use contracts::domain::a003_product_owner::ProductOwner;
use contracts::domain::a004_product::{Product, ProductForm};
use contracts::domain::common::lookup_name;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let i18n = use_i18n();
    let notice = use_notice();

    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (owners, set_owners) = signal::<Vec<ProductOwner>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);
    // Form the dialog was opened with; `None` keeps the dialog closed.
    let (editing, set_editing) = signal::<Option<ProductForm>>(None);

    let fetch = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            let result = async {
                let products = rest::fetch_all::<Product>().await?;
                let cats = rest::fetch_all::<Category>().await?;
                let product_owners = rest::fetch_all::<ProductOwner>().await?;
                Ok::<_, String>((products, cats, product_owners))
            }
            .await;

            match result {
                Ok((products, cats, product_owners)) => {
                    set_items.set(products);
                    set_categories.set(cats);
                    set_owners.set(product_owners);
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

    let delete = move |id: String| {
        if !confirm(i18n.t_untracked("common.confirmDelete")) {
            return;
        }
        spawn_local(async move {
            match rest::delete::<Product>(&id).await {
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

    let on_saved = Callback::new(move |_| {
        set_editing.set(None);
        fetch();
    });
    let on_close = Callback::new(move |_| set_editing.set(None));

    fetch();

    view! {
        <div class="page">
            <PageHeader
                title=Signal::derive(move || i18n.t("products.title").to_string())
                subtitle=Signal::derive(move || Some(i18n.t("products.description").to_string()))
            >
                <button class="button button--primary" on:click=move |_| set_editing.set(Some(ProductForm::default()))>
                    {icon("plus")}
                    {move || i18n.t("products.addNew")}
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
                    <h3>{move || i18n.t("products.list")}</h3>
                    <span class="card__meta">
                        {move || format!("{}: {}", i18n.t("products.count"), items.get().len())}
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
                                    <th class="table__header-cell">{move || i18n.t("products.sku")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.name")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.category")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.owner")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.price")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.stock")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.status")}</th>
                                    <th class="table__header-cell">{move || i18n.t("products.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let cats = categories.get();
                                    let product_owners = owners.get();
                                    let not_specified = i18n.t("common.notSpecified");
                                    let currency = i18n.t("common.currency");
                                    items.get().into_iter().map(|product| {
                                        let id = product.product_id.clone().unwrap_or_default();
                                        let category_name = or_fallback(
                                            lookup_name(&cats, product.category_id.as_deref()),
                                            not_specified,
                                        );
                                        let owner_name = or_fallback(
                                            lookup_name(&product_owners, product.product_owner_id.as_deref()),
                                            not_specified,
                                        );
                                        let (variant, status_key) = if product.is_available_for_sale() {
                                            ("success", "products.available")
                                        } else {
                                            ("error", "products.unavailable")
                                        };
                                        let price = format_money(product.retail_price, currency);
                                        let form = ProductForm::from_product(&product);
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--mono">{product.sku}</td>
                                                <td class="table__cell">{product.name}</td>
                                                <td class="table__cell">{category_name}</td>
                                                <td class="table__cell">{owner_name}</td>
                                                <td class="table__cell">{price}</td>
                                                <td class="table__cell">{product.stock}</td>
                                                <td class="table__cell">
                                                    <Badge variant=variant>{move || i18n.t(status_key)}</Badge>
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--ghost button--small"
                                                        on:click=move |_| set_editing.set(Some(form.clone()))
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

            {move || editing.get().map(|form| {
                let title_key = if form.is_editing() { "products.edit" } else { "products.add" };
                view! {
                    <Modal
                        title=Signal::derive(move || i18n.t(title_key).to_string())
                        on_close=on_close
                    >
                        <ProductDetails
                            initial=form
                            categories=categories
                            owners=owners
                            on_saved=on_saved
                            on_cancel=on_close
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
