use super::model;
use crate::shared::i18n::I18n;
use crate::shared::notice::NoticeService;
use contracts::domain::a004_product::ProductForm;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the product details form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    i18n: I18n,
    notice: NoticeService,
}

impl ProductDetailsViewModel {
    pub fn new(initial: ProductForm, i18n: I18n, notice: NoticeService) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            i18n,
            notice,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_editing())
    }

    /// Apply a change to the form and clear a stale error
    pub fn edit(&self, apply: impl FnOnce(&mut ProductForm)) {
        self.form.update(apply);
        self.error.set(None);
    }

    /// Validate and send the form; `on_saved` runs after a successful save.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        let payload = match current.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(self.i18n.validation_message(&e)));
                return;
            }
        };

        let (ok_key, err_key) = if current.is_editing() {
            ("common.updateSuccess", "common.updateError")
        } else {
            ("common.createSuccess", "common.createError")
        };

        let vm = *self;
        vm.is_saving.set(true);
        spawn_local(async move {
            match model::save_product(&payload).await {
                Ok(()) => {
                    vm.notice.success(
                        vm.i18n.t_untracked("common.success"),
                        vm.i18n.t_untracked(ok_key),
                    );
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Save product failed: {}", e);
                    vm.error.set(Some(vm.i18n.t_untracked(err_key).to_string()));
                    vm.notice
                        .error(vm.i18n.t_untracked("common.error"), vm.i18n.t_untracked(err_key));
                }
            }
            vm.is_saving.set(false);
        });
    }
}
