use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use folio::log::{debug, info};
use folio::{async_callback, spawn_with};

use crate::components::ErrorBanner;
use crate::providers::api;
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    // Warm the CSRF cookie and skip the form when already signed in.
    {
        let api = api.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_with!([api, navigator] {
                if api.get_csrf_token().await.is_none() {
                    debug!("CSRF warm-up returned no token");
                }
                let session = api.fetch_session().await;
                if session.ok && session.data.is_some_and(|s| s.authenticated) {
                    info!("Session already active, skipping login");
                    if let Some(navigator) = &navigator {
                        navigator.replace(&Route::Overview);
                    }
                }
            });
        });
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let submit = async_callback!([api, navigator, username, password, loading, error_msg] {
        if *loading {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        let envelope = api.login_admin(username.trim(), &password).await;
        loading.set(false);

        let authenticated = envelope.data.as_ref().is_some_and(|s| s.authenticated);
        if envelope.ok && authenticated {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Overview);
            }
        } else {
            error_msg.set(Some(envelope.first_error_or("Login failed.")));
        }
    });

    let on_submit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit.emit(());
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form class="w-full max-w-sm p-8 bg-white border border-gray-200 rounded shadow" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold mb-6 text-gray-900">{ "Folio Admin" }</h1>

                <ErrorBanner message={(*error_msg).clone()} />

                <label for="username" class="block text-sm font-medium text-gray-700 mb-1">{ "Username" }</label>
                <input
                    id="username"
                    type="text"
                    autocomplete="username"
                    class="w-full mb-4 px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    value={(*username).clone()}
                    oninput={on_username}
                />

                <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{ "Password" }</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    class="w-full mb-6 px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    value={(*password).clone()}
                    oninput={on_password}
                />

                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                    disabled={*loading || username.trim().is_empty() || password.is_empty()}
                >
                    { if *loading { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
