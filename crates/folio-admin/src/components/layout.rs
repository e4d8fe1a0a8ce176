//! Chrome shared by every dashboard screen, plus the session gate.

use yew::prelude::*;
use yew_router::prelude::*;

use folio::data::AdminSession;
use folio::log::{info, warn};
use folio::{async_callback, spawn_with};

use crate::components::Spinner;
use crate::providers::api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Html,
}

const NAV: [(&str, Route); 3] = [
    ("Overview", Route::Overview),
    ("Content", Route::Content),
    ("Appointments", Route::Appointments),
];

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let session = use_state(|| None::<AdminSession>);

    // Anything short of an authenticated session sends the user to login.
    {
        let api = api.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_with!([api, session, navigator] {
                let envelope = api.fetch_session().await;
                let ok = envelope.ok;
                match envelope.data {
                    Some(found) if ok && found.authenticated => session.set(Some(found)),
                    _ => {
                        let status = envelope.status;
                        info!("No admin session (status {status}), redirecting to login");
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::Login);
                        }
                    }
                }
            });
        });
    }

    let on_logout = async_callback!([api, navigator] {
        let envelope = api.logout_admin().await;
        if !envelope.ok {
            warn!("Logout failed: {}", envelope.first_error_or("Logout failed."));
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let Some(current_session) = session.as_ref() else {
        return html! { <Spinner label="Checking session..." /> };
    };
    let username = current_session
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_else(|| "admin".to_string());

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div class="flex items-center space-x-6">
                        <span class="text-lg font-bold text-gray-900">{ "Folio Admin" }</span>
                        <nav class="flex space-x-4">
                            { for NAV.iter().map(|(label, route)| {
                                let active = current.as_ref() == Some(route);
                                html! {
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!(
                                            "px-2", "py-1", "rounded",
                                            if active { "bg-blue-100 text-blue-700" } else { "text-gray-600 hover:text-gray-900" }
                                        )}
                                    >
                                        { *label }
                                    </Link<Route>>
                                }
                            }) }
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <span class="text-sm text-gray-600">{ format!("Signed in as {username}") }</span>
                        <button
                            class="bg-gray-200 text-gray-800 px-3 py-1 rounded hover:bg-gray-300 cursor-pointer"
                            onclick={on_logout}
                        >
                            { "Log out" }
                        </button>
                    </div>
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-6 py-8">
                { props.children.clone() }
            </main>
        </div>
    }
}
