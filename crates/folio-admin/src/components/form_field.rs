use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::{Field, FieldKind};

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: Field,
    pub value: AttrValue,
    /// Emits `(field name, new raw value)`.
    pub on_change: Callback<(&'static str, String)>,
    #[prop_or(false)]
    pub disabled: bool,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500";

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let field = props.field;
    let id = format!("field-{}", field.name);

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit((field.name, input.value()));
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_change.emit((field.name, area.value()));
            }
        })
    };

    let on_toggle = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit((field.name, input.checked().to_string()));
            }
        })
    };

    let control = match field.kind {
        FieldKind::Checkbox => {
            return html! {
                <label for={id.clone()} class="flex items-center space-x-2 mb-4">
                    <input
                        id={id}
                        type="checkbox"
                        checked={props.value.as_str() == "true"}
                        onchange={on_toggle}
                        disabled={props.disabled}
                    />
                    <span class="text-sm font-medium text-gray-700">{ field.label }</span>
                </label>
            };
        }
        FieldKind::TextArea => html! {
            <textarea
                id={id.clone()}
                class={INPUT_CLASS}
                rows="6"
                placeholder={field.placeholder}
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
        },
        FieldKind::Text | FieldKind::Url | FieldKind::Number => {
            let input_type = match field.kind {
                FieldKind::Url => "url",
                FieldKind::Number => "number",
                _ => "text",
            };
            html! {
                <input
                    id={id.clone()}
                    type={input_type}
                    class={INPUT_CLASS}
                    min={(field.kind == FieldKind::Number).then_some("0")}
                    placeholder={field.placeholder}
                    value={props.value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
            }
        }
    };

    html! {
        <div class="mb-4">
            <label for={id} class="block text-sm font-medium text-gray-700 mb-1">{ field.label }</label>
            { control }
        </div>
    }
}
