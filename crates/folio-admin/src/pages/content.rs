use yew::prelude::*;
use yew_router::prelude::*;

use folio::spawn_with;
use folio::summary::ContentSummary;

use crate::components::{ErrorBanner, Spinner};
use crate::pages::overview::kind_label;
use crate::providers::api;
use crate::routes::Route;

fn cards(summary: &ContentSummary) -> [(&'static str, usize, Route); 7] {
    [
        ("pages", summary.pages, Route::Pages),
        ("projects", summary.projects, Route::Projects),
        ("stats", summary.stats, Route::Stats),
        ("skills", summary.skills, Route::Skills),
        ("socialLinks", summary.social_links, Route::SocialLinks),
        ("contactLinks", summary.contact_links, Route::ContactLinks),
        ("settings", summary.settings, Route::SiteSettings),
    ]
}

#[function_component(ContentPage)]
pub fn content_page() -> Html {
    let api = use_memo((), |_| api::create());
    let summary = use_state(|| None::<ContentSummary>);
    let error_msg = use_state(|| None::<String>);

    {
        let api = api.clone();
        let summary = summary.clone();
        let error_msg = error_msg.clone();
        use_effect_with((), move |_| {
            spawn_with!([api, summary, error_msg] {
                let content = api.fetch_admin_content().await;
                let failed = content.failures();
                if !failed.is_empty() {
                    let kinds: Vec<&str> = failed.iter().map(|(kind, _)| kind_label(kind)).collect();
                    error_msg.set(Some(format!("Failed to load {}.", kinds.join(", "))));
                }
                summary.set(Some(ContentSummary::from_content(&content)));
            });
        });
    }

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Content" }</h1>
            <ErrorBanner message={(*error_msg).clone()} />
            {
                match summary.as_ref() {
                    None => html! { <Spinner /> },
                    Some(summary) => html! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            { for cards(summary).into_iter().map(|(kind, count, route)| html! {
                                <Link<Route> to={route} classes={classes!("block", "p-4", "bg-white", "border", "border-gray-200", "rounded", "hover:border-blue-400")}>
                                    <div class="text-lg font-semibold text-gray-900">{ kind_label(kind) }</div>
                                    <div class="text-sm text-gray-500">{ format!("{count} {}", if count == 1 { "entry" } else { "entries" }) }</div>
                                </Link<Route>>
                            }) }
                        </div>
                    },
                }
            }
        </div>
    }
}
