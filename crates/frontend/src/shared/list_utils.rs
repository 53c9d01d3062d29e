/// Shared list helpers: search box with debounce and match highlighting
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Search debounce delay
const DEBOUNCE_MS: u32 = 300;

/// Highlight case-insensitive matches of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // lowercasing may change byte lengths (e.g. some accented letters), fall back to plain text
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Skip the debounce, for small in-memory lists
    #[prop(optional)]
    immediate: bool,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por código ou descrição...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        if immediate {
            on_change.run(new_value);
            return;
        }
        // dropping the previous timeout cancels it
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if value.get().is_empty() { "search-input__field" } else { "search-input__field search-input__field--active" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
