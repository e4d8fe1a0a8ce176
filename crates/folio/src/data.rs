//! Wire types exchanged with the portfolio BFF admin API.
//!
//! Field names follow the BFF's camelCase JSON. Each editable record kind has a
//! `*Draft` (create body) and a `*Patch` (partial update body, absent fields are
//! left out of the JSON).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::Id;

/// A staff account as reported by the session endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Response of `GET /api/admin/session` and `POST /api/admin/login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AdminSession {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
}

/// Login request body.
#[derive(Serialize, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsrfResponse {
    #[serde(default)]
    pub csrf_token: Option<String>,
}

/// Body of a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Acknowledged {
    #[serde(default)]
    pub ok: bool,
}

// Pages

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Id<Page>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An empty slug lets the BFF derive one from the title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageDraft {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub is_published: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

// Projects

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id<Project>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub github: String,
    pub is_published: bool,
    pub order: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Splits comma separated tag input, trimming entries and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

// Site settings

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteSetting {
    pub id: Id<SiteSetting>,
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// One row of a bulk settings upsert; `key` is the natural identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
}

impl From<&SiteSetting> for SettingEntry {
    fn from(setting: &SiteSetting) -> Self {
        Self {
            key: setting.key.clone(),
            value: setting.value.clone(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SettingsUpsert<'a> {
    pub settings: &'a [SettingEntry],
}

// Stats

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub id: Id<Stat>,
    pub number: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatDraft {
    pub number: String,
    pub label: String,
    pub icon: String,
    pub order: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct StatPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

// Skills

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: Id<Skill>,
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillDraft {
    pub name: String,
    pub order: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SkillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

// Social links

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub id: Id<SocialLink>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLinkDraft {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub order: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SocialLinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

// Contact links

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub id: Id<ContactLink>,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub href: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactLinkDraft {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub order: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ContactLinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

// Appointments

/// An appointment event consumed from the booking stream. Read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Id<Appointment>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    pub appointment_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "phoneE164")]
    pub phone_e164: String,
    #[serde(default)]
    pub notify_email: bool,
    #[serde(default)]
    pub notify_sms: bool,
    #[serde(default)]
    pub kafka_topic: Option<String>,
    #[serde(default)]
    pub kafka_partition: Option<i32>,
    #[serde(default)]
    pub kafka_offset: Option<i64>,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}

/// List and single-record response wrappers. The BFF nests every payload under
/// a key named after the record kind.
pub mod wire {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct PageList {
        #[serde(default)]
        pub pages: Vec<Page>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct PageItem {
        pub page: Page,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct ProjectList {
        #[serde(default)]
        pub projects: Vec<Project>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct ProjectItem {
        pub project: Project,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct SiteSettingList {
        #[serde(default)]
        pub settings: Vec<SiteSetting>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct StatList {
        #[serde(default)]
        pub stats: Vec<Stat>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct StatItem {
        pub stat: Stat,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct SkillList {
        #[serde(default)]
        pub skills: Vec<Skill>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct SkillItem {
        pub skill: Skill,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct SocialLinkList {
        #[serde(default)]
        pub social_links: Vec<SocialLink>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct SocialLinkItem {
        pub social_link: SocialLink,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct ContactLinkList {
        #[serde(default)]
        pub contact_links: Vec<ContactLink>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ContactLinkItem {
        pub contact_link: ContactLink,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
    pub struct AppointmentList {
        #[serde(default)]
        pub appointments: Vec<Appointment>,
    }
}
