use leptos::prelude::*;

/// Overlay modal driven by an external signal.
///
/// Clicking the overlay calls `on_close`; the owner decides whether the
/// modal actually closes.
#[component]
pub fn Modal(
    #[prop(into)]
    open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)]
    title: String,
    #[prop(optional, into)]
    class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);
    let class = format!("modal-content {}", class);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class=class.clone()
                    role="dialog"
                    on:click=|e| e.stop_propagation()
                >
                    <Show when=move || title.with_value(|t| !t.is_empty())>
                        <h2 class="modal-content__title">{title.get_value()}</h2>
                    </Show>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

/// Yes/no confirmation on top of [`Modal`]
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into)]
    confirm_label: String,
    #[prop(into)]
    cancel_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);
    let cancel_label = StoredValue::new(cancel_label);

    view! {
        <Modal open=open on_close=on_cancel title=title class="modal-content--confirm">
            <p class="modal-content__message">{move || message.get()}</p>
            <div class="modal-content__actions">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {cancel_label.get_value()}
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                    {confirm_label.get_value()}
                </button>
            </div>
        </Modal>
    }
}

