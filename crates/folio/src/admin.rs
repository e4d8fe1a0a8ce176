//! Typed operations for every BFF admin endpoint.
//!
//! The CRUD record kinds share one shape, captured by [`Resource`]; the generic
//! [`AdminClient::list`] family works for all of them and the named
//! `fetch_*`/`create_*`/`update_*`/`delete_*` methods are thin aliases.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::{AdminClient, ApiClient, Envelope, HttpMethod, RequestOptions};
use crate::data::wire::*;
use crate::data::*;
use crate::id::Id;

pub const CSRF_PATH: &str = "/api/admin/csrf";
pub const LOGIN_PATH: &str = "/api/admin/login";
pub const LOGOUT_PATH: &str = "/api/admin/logout";
pub const SESSION_PATH: &str = "/api/admin/session";
pub const SITE_SETTINGS_PATH: &str = "/api/admin/site-settings";
pub const APPOINTMENTS_PATH: &str = "/api/admin/appointments";

/// A record kind with list/detail/create/update/delete endpoints.
pub trait Resource: Sized + 'static {
    /// Collection path, e.g. `/api/admin/skills`.
    const PATH: &'static str;
    /// Lower-case display names used in messages ("skill", "skills").
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    type List: DeserializeOwned + Default + 'static;
    type Item: DeserializeOwned + 'static;
    type Draft: Serialize + 'static;
    type Patch: Serialize + 'static;

    fn id(&self) -> Id<Self>;
    fn records(list: Self::List) -> Vec<Self>;
    fn record(item: Self::Item) -> Self;

    fn detail_path(id: Id<Self>) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

macro_rules! resource {
    ($record:ty, $path:literal, $singular:literal, $plural:literal,
     $list:ident.$list_field:ident, $item:ident.$item_field:ident,
     $draft:ty, $patch:ty) => {
        impl Resource for $record {
            const PATH: &'static str = $path;
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            type List = $list;
            type Item = $item;
            type Draft = $draft;
            type Patch = $patch;

            fn id(&self) -> Id<Self> {
                self.id
            }

            fn records(list: Self::List) -> Vec<Self> {
                list.$list_field
            }

            fn record(item: Self::Item) -> Self {
                item.$item_field
            }
        }
    };
}

resource!(Page, "/api/admin/pages", "page", "pages",
    PageList.pages, PageItem.page, PageDraft, PagePatch);
resource!(Project, "/api/admin/projects", "project", "projects",
    ProjectList.projects, ProjectItem.project, ProjectDraft, ProjectPatch);
resource!(Stat, "/api/admin/stats", "stat", "stats",
    StatList.stats, StatItem.stat, StatDraft, StatPatch);
resource!(Skill, "/api/admin/skills", "skill", "skills",
    SkillList.skills, SkillItem.skill, SkillDraft, SkillPatch);
resource!(SocialLink, "/api/admin/social-links", "social link", "social links",
    SocialLinkList.social_links, SocialLinkItem.social_link,
    SocialLinkDraft, SocialLinkPatch);
resource!(ContactLink, "/api/admin/contact-links", "contact link", "contact links",
    ContactLinkList.contact_links, ContactLinkItem.contact_link,
    ContactLinkDraft, ContactLinkPatch);

impl AdminClient {
    pub async fn list<R: Resource>(&self) -> Envelope<R::List> {
        self.get(R::PATH).await
    }

    pub async fn get_one<R: Resource>(&self, id: Id<R>) -> Envelope<R::Item> {
        self.get(&R::detail_path(id)).await
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Envelope<R::Item> {
        self.post(R::PATH, draft).await
    }

    /// PATCH with only the fields set on `patch`.
    pub async fn update<R: Resource>(&self, id: Id<R>, patch: &R::Patch) -> Envelope<R::Item> {
        self.patch(&R::detail_path(id), patch).await
    }

    pub async fn remove<R: Resource>(&self, id: Id<R>) -> Envelope<Acknowledged> {
        self.delete(&R::detail_path(id)).await
    }

    // Session

    /// Best-effort warm-up that makes the BFF set the `csrftoken` cookie.
    /// Any failure yields `None`.
    pub async fn get_csrf_token(&self) -> Option<String> {
        let envelope: Envelope<CsrfResponse> = self.get(CSRF_PATH).await;
        if !envelope.ok {
            tracing::debug!(status = envelope.status, "csrf warm-up failed");
            return None;
        }
        envelope.data.and_then(|data| data.csrf_token)
    }

    pub async fn login_admin(&self, username: &str, password: &str) -> Envelope<AdminSession> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post(LOGIN_PATH, &credentials).await
    }

    pub async fn logout_admin(&self) -> Envelope<Acknowledged> {
        self.request(LOGOUT_PATH, RequestOptions::new(HttpMethod::Post))
            .await
    }

    pub async fn fetch_session(&self) -> Envelope<AdminSession> {
        self.get(SESSION_PATH).await
    }

    // Site settings

    pub async fn fetch_site_settings(&self) -> Envelope<SiteSettingList> {
        self.get(SITE_SETTINGS_PATH).await
    }

    /// Sends every row in one POST. Rows are passed through untouched, so
    /// duplicate keys reach the BFF, which applies them in order.
    pub async fn upsert_site_settings(
        &self,
        settings: &[SettingEntry],
    ) -> Envelope<SiteSettingList> {
        self.post(SITE_SETTINGS_PATH, &SettingsUpsert { settings }).await
    }

    // Appointments

    /// Latest appointment events; the BFF caps the list at 100 unless `limit`
    /// says otherwise.
    pub async fn fetch_appointments(&self, limit: Option<u32>) -> Envelope<AppointmentList> {
        match limit {
            Some(limit) => self.get(&format!("{APPOINTMENTS_PATH}?limit={limit}")).await,
            None => self.get(APPOINTMENTS_PATH).await,
        }
    }
}

macro_rules! named_ops {
    (
        $record:ty,
        $fetch_all:ident,
        $fetch_one:ident,
        $create:ident,
        $update:ident,
        $delete:ident
    ) => {
        impl AdminClient {
            pub async fn $fetch_all(&self) -> Envelope<<$record as Resource>::List> {
                self.list::<$record>().await
            }

            pub async fn $fetch_one(
                &self,
                id: Id<$record>,
            ) -> Envelope<<$record as Resource>::Item> {
                self.get_one(id).await
            }

            pub async fn $create(
                &self,
                draft: &<$record as Resource>::Draft,
            ) -> Envelope<<$record as Resource>::Item> {
                self.create::<$record>(draft).await
            }

            pub async fn $update(
                &self,
                id: Id<$record>,
                patch: &<$record as Resource>::Patch,
            ) -> Envelope<<$record as Resource>::Item> {
                self.update(id, patch).await
            }

            pub async fn $delete(&self, id: Id<$record>) -> Envelope<Acknowledged> {
                self.remove(id).await
            }
        }
    };
}

named_ops!(Page, fetch_pages, fetch_page, create_page, update_page, delete_page);
named_ops!(Project, fetch_projects, fetch_project, create_project, update_project, delete_project);
named_ops!(Stat, fetch_stats, fetch_stat, create_stat, update_stat, delete_stat);
named_ops!(Skill, fetch_skills, fetch_skill, create_skill, update_skill, delete_skill);
named_ops!(
    SocialLink,
    fetch_social_links,
    fetch_social_link,
    create_social_link,
    update_social_link,
    delete_social_link
);
named_ops!(
    ContactLink,
    fetch_contact_links,
    fetch_contact_link,
    create_contact_link,
    update_contact_link,
    delete_contact_link
);
