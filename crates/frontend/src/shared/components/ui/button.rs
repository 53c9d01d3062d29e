use leptos::prelude::*;

fn button_classes(variant: &str, size: &str, extra: &str) -> String {
    let mut classes = String::from("button");
    classes.push_str(match variant {
        "secondary" => " button--secondary",
        "danger" => " button--danger",
        "ghost" => " button--ghost",
        _ => " button--primary",
    });
    if size == "sm" {
        classes.push_str(" button--small");
    }
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

/// Action button: `variant` "primary", "secondary", "danger" or "ghost";
/// `size` "sm" for table rows and toolbars.
#[component]
pub fn Button(
    #[prop(default = "primary")] variant: &'static str,
    #[prop(default = "md")] size: &'static str,
    #[prop(default = "")] class: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, size, class)
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(button_classes("primary", "md", ""), "button button--primary");
        assert_eq!(
            button_classes("danger", "sm", "row-action"),
            "button button--danger button--small row-action"
        );
    }
}
