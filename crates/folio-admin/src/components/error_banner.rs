use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="mb-4 p-4 bg-red-100 text-red-700 rounded" role="alert">
                <p>{ message }</p>
            </div>
        },
        None => html! {},
    }
}
