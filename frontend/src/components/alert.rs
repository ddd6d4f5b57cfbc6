use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

/// Closable error banner shown above the submit button.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="alert alert-error" role="alert">
            <span class="alert-icon">{ "!" }</span>
            <span class="alert-message">{ &*props.message }</span>
            <button type="button" class="alert-close" aria-label="Close" onclick={on_close_click}>
                { "×" }
            </button>
        </div>
    }
}
