use yew::prelude::*;

use folio::spawn_with;
use folio::summary::ContentSummary;

use crate::components::Spinner;
use crate::providers::api;

/// Card title for a summary key.
pub fn kind_label(kind: &str) -> &'static str {
    match kind {
        "settings" => "Site settings",
        "pages" => "Pages",
        "projects" => "Projects",
        "stats" => "Stats",
        "skills" => "Skills",
        "socialLinks" => "Social links",
        "contactLinks" => "Contact links",
        "appointments" => "Appointments",
        _ => "Other",
    }
}

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let api = use_memo((), |_| api::create());
    let summary = use_state(|| None::<ContentSummary>);

    {
        let api = api.clone();
        let summary = summary.clone();
        use_effect_with((), move |_| {
            spawn_with!([api, summary] {
                summary.set(Some(api.fetch_dashboard_summary().await));
            });
        });
    }

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Overview" }</h1>
            {
                match summary.as_ref() {
                    None => html! { <Spinner /> },
                    Some(summary) => html! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { for summary.overview().into_iter().map(|(kind, count)| html! {
                                <div class="p-4 bg-white border border-gray-200 rounded">
                                    <div class="text-sm text-gray-500">{ kind_label(kind) }</div>
                                    <div class="text-3xl font-semibold text-gray-900">{ count }</div>
                                </div>
                            }) }
                        </div>
                    },
                }
            }
        </div>
    }
}
