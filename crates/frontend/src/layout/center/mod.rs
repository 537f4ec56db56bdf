use leptos::prelude::*;

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_category_spec::ui::list::CategorySpecList;
use crate::domain::a003_product_owner::ui::list::ProductOwnerList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::layout::global_context::{AppGlobalContext, DashboardTab};
use crate::usecases::u100_smart_search::view::SmartSearchPage;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="center">
            {children()}
        </div>
    }
}

/// Screen of the active tab; switching tabs remounts it.
#[component]
pub fn DashboardContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match ctx.active.get() {
        DashboardTab::Products => view! { <ProductList /> }.into_any(),
        DashboardTab::Categories => view! { <CategoryList /> }.into_any(),
        DashboardTab::CategorySpecs => view! { <CategorySpecList /> }.into_any(),
        DashboardTab::ProductOwners => view! { <ProductOwnerList /> }.into_any(),
        DashboardTab::SmartSearch => view! { <SmartSearchPage /> }.into_any(),
    }
}
