pub mod center;
pub mod global_context;
pub mod left;

use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

/// Dashboard shell: sidebar on the start side, active screen next to it.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |        Active screen         |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let i18n = use_i18n();

    view! {
        <div class="app-layout" dir=move || i18n.language.get().dir()>
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
