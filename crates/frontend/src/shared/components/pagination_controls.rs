use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page reached by one of the navigation buttons, `None` when it would
/// leave the current page unchanged.
fn step_target(step: Step, current: usize, total: usize) -> Option<usize> {
    let last = total.checked_sub(1)?;
    let target = match step {
        Step::First => 0,
        Step::Previous => current.checked_sub(1)?,
        Step::Next => current + 1,
        Step::Last => last,
    };
    (target <= last && target != current).then_some(target)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Previous,
    Next,
    Last,
}

#[component]
fn StepButton(
    step: Step,
    icon_name: &'static str,
    title: &'static str,
    current_page: Signal<usize>,
    total_pages: Signal<usize>,
    disabled: Signal<bool>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let target = move || step_target(step, current_page.get(), total_pages.get());

    view! {
        <button
            class="pagination-btn"
            title=title
            disabled=move || disabled.get() || target().is_none()
            on:click=move |_| {
                if let Some(page) = target() {
                    on_page_change.run(page);
                }
            }
        >
            {icon(icon_name)}
        </button>
    }
}

/// Grid pagination (0-indexed pages) with a page size select.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);
    let step = move |step: Step, icon_name: &'static str, title: &'static str| {
        view! {
            <StepButton
                step=step
                icon_name=icon_name
                title=title
                current_page=current_page
                total_pages=total_pages
                disabled=disabled
                on_page_change=on_page_change
            />
        }
    };

    view! {
        <div class="pagination-controls">
            {step(Step::First, "chevrons-left", "Primeira página")}
            {step(Step::Previous, "chevron-left", "Página anterior")}
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            {step(Step::Next, "chevron-right", "Próxima página")}
            {step(Step::Last, "chevrons-right", "Última página")}
            <select
                class="page-size-select"
                disabled=move || disabled.get()
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} por página", size)}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_targets() {
        assert_eq!(step_target(Step::First, 0, 3), None);
        assert_eq!(step_target(Step::Previous, 0, 3), None);
        assert_eq!(step_target(Step::Next, 0, 3), Some(1));
        assert_eq!(step_target(Step::Last, 0, 3), Some(2));
        assert_eq!(step_target(Step::Next, 2, 3), None);
        assert_eq!(step_target(Step::First, 2, 3), Some(0));
    }

    #[test]
    fn test_no_pages_disables_everything() {
        for step in [Step::First, Step::Previous, Step::Next, Step::Last] {
            assert_eq!(step_target(step, 0, 0), None);
        }
    }
}
