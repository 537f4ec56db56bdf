use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Screens of the dashboard, one per sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Products,
    Categories,
    CategorySpecs,
    ProductOwners,
    SmartSearch,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Products,
        DashboardTab::Categories,
        DashboardTab::CategorySpecs,
        DashboardTab::ProductOwners,
        DashboardTab::SmartSearch,
    ];

    /// Key used in `?active=`
    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Products => "products",
            DashboardTab::Categories => "categories",
            DashboardTab::CategorySpecs => "category-specs",
            DashboardTab::ProductOwners => "product-owners",
            DashboardTab::SmartSearch => "smart-search",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            DashboardTab::Products => "nav.products",
            DashboardTab::Categories => "nav.categories",
            DashboardTab::CategorySpecs => "nav.categorySpecs",
            DashboardTab::ProductOwners => "nav.productOwners",
            DashboardTab::SmartSearch => "nav.smartSearch",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Products => "products",
            DashboardTab::Categories => "tag",
            DashboardTab::CategorySpecs => "list",
            DashboardTab::ProductOwners => "users",
            DashboardTab::SmartSearch => "search",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<DashboardTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DashboardTab::default()),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("active").and_then(|key| DashboardTab::from_key(key)) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", active.key())])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: DashboardTab) {
        log::debug!("activate_tab: {}", tab.key());
        self.active.set(tab);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(DashboardTab::from_key("orders"), None);
    }
}
