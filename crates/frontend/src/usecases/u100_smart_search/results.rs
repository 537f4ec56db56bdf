use super::view_model::SmartSearchViewModel;
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::icons::icon;
use crate::shared::list_utils::or_fallback;
use contracts::projections::p900_order_search::dto::{
    OrderAggregate, OrderLine, Payment, ProductRef, Refund, Shipment, StatusTone,
};
use leptos::prelude::*;
use std::collections::HashSet;

/// Result list of the last successful search
#[component]
pub fn SearchResults(vm: SmartSearchViewModel) -> impl IntoView {
    let i18n = use_i18n();
    // Cards are tracked by order key so expansion survives re-renders.
    let expanded = RwSignal::new(HashSet::<String>::new());

    let toggle = move |key: String| {
        expanded.update(|set| {
            if !set.remove(&key) {
                set.insert(key);
            }
        });
    };

    view! {
        <Show when=move || vm.has_searched.get()>
            <div class="card search-results">
                <div class="card__header">
                    <h3>{move || i18n.t("search.results")}</h3>
                    <span class="card__meta">{move || vm.results.with(|r| r.len())}</span>
                </div>
                {move || {
                    let orders = vm.results.get();
                    if orders.is_empty() {
                        return view! { <div class="empty-state">{i18n.t("search.noResults")}</div> }.into_any();
                    }
                    orders.into_iter().map(|order| {
                        let key = order.display_key().to_string();
                        let is_open = {
                            let key = key.clone();
                            Signal::derive(move || expanded.with(|set| set.contains(&key)))
                        };
                        view! {
                            <OrderCard order=order is_open=is_open on_toggle=Callback::new(move |_| toggle(key.clone())) />
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </Show>
    }
}

#[component]
fn OrderCard(order: OrderAggregate, is_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let currency = move || i18n.t("common.currency");
    let variant = order.tone().badge_variant();
    let total = order.total_amount;
    let customer = order.customer_name().map(str::to_string);
    let date = format_datetime(&order.timestamp);
    let number = order.order_number.clone();
    let status = order.status.clone();

    view! {
        <div class="order-card">
            <div class="order-card__header" on:click=move |_| on_toggle.run(())>
                <span class="order-card__chevron">
                    {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                </span>
                <div class="order-card__summary">
                    <span class="order-card__number">{move || i18n.t("order.number")}": "{number}</span>
                    <span class="order-card__date">{date}</span>
                    <Badge variant=variant>{status}</Badge>
                    <span class="order-card__total">{move || format_money(total, currency())}</span>
                    <span class="order-card__customer">
                        {move || format!(
                            "{}: {}",
                            i18n.t("order.customer"),
                            or_fallback(customer.as_deref(), i18n.t("common.notSpecified"))
                        )}
                    </span>
                </div>
            </div>
            <Show when=move || is_open.get()>
                {order_sections(&order, i18n)}
            </Show>
        </div>
    }
}

fn order_sections(order: &OrderAggregate, i18n: I18n) -> impl IntoView {
    view! {
        <div class="order-card__body">
            {(!order.order_products.is_empty()).then(|| products_section(&order.order_products, i18n))}
            {(!order.order_shipment.is_empty()).then(|| shipments_section(&order.order_shipment, i18n))}
            {(!order.order_payment.is_empty()).then(|| payments_section(&order.order_payment, i18n))}
            {(!order.refunds.is_empty()).then(|| refunds_section(&order.refunds, i18n))}
        </div>
    }
}

fn product_label(product: Option<&ProductRef>, i18n: I18n) -> String {
    match product {
        Some(p) if !p.sku.is_empty() => format!("{} ({})", p.name, p.sku),
        Some(p) => p.name.clone(),
        None => i18n.t_untracked("common.notSpecified").to_string(),
    }
}

fn products_section(lines: &[OrderLine], i18n: I18n) -> impl IntoView {
    let currency = i18n.t_untracked("common.currency");
    let rows = lines
        .iter()
        .map(|line| {
            let category = or_fallback(
                line.product.as_ref().and_then(ProductRef::category_name),
                "-",
            );
            view! {
                <tr class="table__row">
                    <td class="table__cell">{product_label(line.product.as_ref(), i18n)}</td>
                    <td class="table__cell">{category}</td>
                    <td class="table__cell">{line.quantity}</td>
                    <td class="table__cell">{format_money(line.retail_price, currency)}</td>
                    <td class="table__cell">{format_money(line.line_total(), currency)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="order-section">
            <h4 class="order-section__title">{icon("products")}{move || i18n.t("order.products")}</h4>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{move || i18n.t("order.product")}</th>
                        <th class="table__header-cell">{move || i18n.t("order.category")}</th>
                        <th class="table__header-cell">{move || i18n.t("order.quantity")}</th>
                        <th class="table__header-cell">{move || i18n.t("order.unitPrice")}</th>
                        <th class="table__header-cell">{move || i18n.t("order.lineTotal")}</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

fn shipments_section(shipments: &[Shipment], i18n: I18n) -> impl IntoView {
    let items = shipments
        .iter()
        .map(|shipment| {
            let provider = or_fallback(
                shipment.shipping_providers.as_ref().map(|p| p.name.as_str()),
                i18n.t_untracked("common.notSpecified"),
            );
            let lines = shipment
                .shipment_products
                .iter()
                .map(|line| {
                    view! {
                        <li>{product_label(line.product.as_ref(), i18n)}" × "{line.quantity}</li>
                    }
                })
                .collect_view();
            view! {
                <div class="order-section__item">
                    <div>{move || i18n.t("order.shipmentNumber")}": "{shipment.number.clone()}</div>
                    <div>{move || i18n.t("order.service")}": "{shipment.service.clone()}</div>
                    <div>{move || i18n.t("order.provider")}": "{provider}</div>
                    <div>{move || i18n.t("order.createdAt")}": "{format_datetime(&shipment.created_at)}</div>
                    <ul class="order-section__lines">{lines}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="order-section">
            <h4 class="order-section__title">{icon("shipments")}{move || i18n.t("order.shipments")}</h4>
            {items}
        </section>
    }
}

/// Amount, status badge and date of a payment or refund
fn money_row(amount: f64, detail: String, status: &str, created_at: &str, i18n: I18n) -> impl IntoView {
    let variant = StatusTone::for_status(status).badge_variant();
    let status = status.to_string();
    view! {
        <div class="order-section__item order-section__item--inline">
            <span>{format_money(amount, i18n.t_untracked("common.currency"))}</span>
            <span>{detail}</span>
            <Badge variant=variant>{status}</Badge>
            <span>{format_datetime(created_at)}</span>
        </div>
    }
}

fn payments_section(payments: &[Payment], i18n: I18n) -> impl IntoView {
    let items = payments
        .iter()
        .map(|p| {
            let detail = format!("{}: {}", i18n.t_untracked("order.method"), p.method);
            money_row(p.amount, detail, &p.status, &p.created_at, i18n)
        })
        .collect_view();

    view! {
        <section class="order-section">
            <h4 class="order-section__title">{icon("payments")}{move || i18n.t("order.payments")}</h4>
            {items}
        </section>
    }
}

fn refunds_section(refunds: &[Refund], i18n: I18n) -> impl IntoView {
    let items = refunds
        .iter()
        .map(|r| {
            let detail = format!("{}: {}", i18n.t_untracked("order.reason"), r.reason);
            money_row(r.amount, detail, &r.status, &r.created_at, i18n)
        })
        .collect_view();

    view! {
        <section class="order-section">
            <h4 class="order-section__title">{icon("refunds")}{move || i18n.t("order.refunds")}</h4>
            {items}
        </section>
    }
}
