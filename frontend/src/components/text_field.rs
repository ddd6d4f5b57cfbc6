use shared::FieldError;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<FieldError>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    let error_html = match props.error {
        Some(err) => html! { <div class="form-error">{ err.to_string() }</div> },
        None => html! {},
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
            { error_html }
        </div>
    }
}
