use leptos::prelude::*;

fn tone_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Inline status label. `variant` is one of "primary", "success",
/// "warning", "error" or "neutral".
#[component]
pub fn Badge(
    #[prop(default = "neutral")] variant: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("badge {} {}", tone_class(variant), class);

    view! { <span class=classes.trim_end().to_string()>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_is_neutral() {
        assert_eq!(tone_class("error"), "badge--error");
        assert_eq!(tone_class("whatever"), "badge--neutral");
    }
}
