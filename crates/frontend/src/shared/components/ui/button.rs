use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Secondary => "button button--secondary",
            ButtonVariant::Ghost => "button button--ghost",
            ButtonVariant::Danger => "button button--danger",
        }
    }
}

/// Toolbar button with an optional leading icon
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Icon name from `shared::icons`
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| on_click.run(())
        >
            {icon_name.map(icon)}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::Danger.class(), "button button--danger");
        assert!(ButtonVariant::Ghost.class().starts_with("button "));
    }
}
