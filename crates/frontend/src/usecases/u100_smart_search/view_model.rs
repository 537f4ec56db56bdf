use super::api;
use crate::shared::i18n::I18n;
use crate::shared::notice::NoticeService;
use contracts::projections::p900_order_search::dto::OrderAggregate;
use contracts::shared::smart_search::{CriteriaList, CriterionAttribute, FilterOperator, SearchError};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// State of the Smart Search screen
#[derive(Clone, Copy)]
pub struct SmartSearchViewModel {
    pub criteria: RwSignal<CriteriaList>,
    pub results: RwSignal<Vec<OrderAggregate>>,
    pub is_searching: RwSignal<bool>,
    pub has_searched: RwSignal<bool>,
    i18n: I18n,
    notice: NoticeService,
}

impl SmartSearchViewModel {
    pub fn new(i18n: I18n, notice: NoticeService) -> Self {
        Self {
            criteria: RwSignal::new(CriteriaList::default()),
            results: RwSignal::new(Vec::new()),
            is_searching: RwSignal::new(false),
            has_searched: RwSignal::new(false),
            i18n,
            notice,
        }
    }

    pub fn add_command(&self) {
        self.criteria.update(|list| {
            list.add_criterion();
        });
    }

    pub fn remove_command(&self, id: &str) {
        self.criteria.update(|list| list.remove_criterion(id));
    }

    pub fn update_command(&self, id: &str, attribute: CriterionAttribute, value: String) {
        self.criteria
            .update(|list| list.update_criterion(id, attribute, value));
    }

    /// Operators offered for the criterion's current field
    pub fn operators_for(&self, field: &str) -> &'static [FilterOperator] {
        self.criteria.with_untracked(|list| list.operators_for(field))
    }

    /// Run the search; previous results stay on screen when it fails.
    pub fn search_command(&self) {
        if self.is_searching.get_untracked() {
            return;
        }
        let items = self.criteria.with_untracked(|list| list.items().to_vec());
        if items.is_empty() {
            self.report(SearchError::EmptyCriteria);
            return;
        }

        let vm = *self;
        vm.is_searching.set(true);
        spawn_local(async move {
            match api::execute_search(&items).await {
                Ok(orders) => {
                    let count = orders.len();
                    vm.results.set(orders);
                    vm.has_searched.set(true);
                    vm.notice.success(
                        vm.i18n.t_untracked("search.success"),
                        format!("{}: {}", vm.i18n.t_untracked("search.results"), count),
                    );
                }
                Err(e) => vm.report(e),
            }
            vm.is_searching.set(false);
        });
    }

    fn report(&self, error: SearchError) {
        self.notice.error(
            self.i18n.t_untracked("search.error"),
            self.i18n.t_untracked(error.message_key()),
        );
    }
}
