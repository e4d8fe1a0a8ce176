use yew::prelude::*;
use yew_router::prelude::*;

use folio::config::normalize_base_path;
use folio::data::{ContactLink, Page, Project, Skill, SocialLink, Stat};

use crate::components::DashboardLayout;
use crate::pages::{
    AppointmentsPage, ContentPage, CrudPage, LoginPage, OverviewPage, SiteSettingsPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/content")]
    Content,
    #[at("/dashboard/content/pages")]
    Pages,
    #[at("/dashboard/content/projects")]
    Projects,
    #[at("/dashboard/content/stats")]
    Stats,
    #[at("/dashboard/content/skills")]
    Skills,
    #[at("/dashboard/content/social-links")]
    SocialLinks,
    #[at("/dashboard/content/contact-links")]
    ContactLinks,
    #[at("/dashboard/content/site-settings")]
    SiteSettings,
    #[at("/dashboard/appointments")]
    Appointments,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Router basename, from `FOLIO_BASE_PATH` at build time.
pub fn basename() -> Option<AttrValue> {
    let path = normalize_base_path(option_env!("FOLIO_BASE_PATH")?);
    (!path.is_empty()).then(|| AttrValue::from(path))
}

fn dashboard(page: Html) -> Html {
    html! { <DashboardLayout>{ page }</DashboardLayout> }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Overview} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Overview => dashboard(html! { <OverviewPage /> }),
        Route::Content => dashboard(html! { <ContentPage /> }),
        Route::Pages => dashboard(html! { <CrudPage<Page> /> }),
        Route::Projects => dashboard(html! { <CrudPage<Project> /> }),
        Route::Stats => dashboard(html! { <CrudPage<Stat> /> }),
        Route::Skills => dashboard(html! { <CrudPage<Skill> /> }),
        Route::SocialLinks => dashboard(html! { <CrudPage<SocialLink> /> }),
        Route::ContactLinks => dashboard(html! { <CrudPage<ContactLink> /> }),
        Route::SiteSettings => dashboard(html! { <SiteSettingsPage /> }),
        Route::Appointments => dashboard(html! { <AppointmentsPage /> }),
        Route::NotFound => html! {
            <div class="p-8 text-center">
                <h1 class="text-2xl font-bold mb-4">{ "404 Not Found" }</h1>
                <Link<Route> to={Route::Overview} classes={classes!("text-blue-600", "hover:underline")}>
                    { "Back to the dashboard" }
                </Link<Route>>
            </div>
        },
    }
}
