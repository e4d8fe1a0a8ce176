//! Dashboard overview: every content list fetched at once, counted per kind.

use crate::api::{AdminClient, Envelope};
use crate::data::wire::*;

/// Envelopes from the seven content list endpoints. Each succeeds or fails on
/// its own.
#[derive(Debug, Clone)]
pub struct AdminContent {
    pub settings: Envelope<SiteSettingList>,
    pub pages: Envelope<PageList>,
    pub projects: Envelope<ProjectList>,
    pub stats: Envelope<StatList>,
    pub skills: Envelope<SkillList>,
    pub social_links: Envelope<SocialLinkList>,
    pub contact_links: Envelope<ContactLinkList>,
}

impl AdminContent {
    /// Envelopes that did not succeed, paired with their kind.
    pub fn failures(&self) -> Vec<(&'static str, String)> {
        let checks = [
            ("settings", self.settings.ok, self.settings.first_error()),
            ("pages", self.pages.ok, self.pages.first_error()),
            ("projects", self.projects.ok, self.projects.first_error()),
            ("stats", self.stats.ok, self.stats.first_error()),
            ("skills", self.skills.ok, self.skills.first_error()),
            ("socialLinks", self.social_links.ok, self.social_links.first_error()),
            ("contactLinks", self.contact_links.ok, self.contact_links.first_error()),
        ];
        checks
            .into_iter()
            .filter(|(_, ok, _)| !ok)
            .map(|(kind, _, error)| (kind, error.unwrap_or("request failed").to_string()))
            .collect()
    }
}

/// Record counts shown on the overview and content screens. A list that
/// failed to load counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSummary {
    pub settings: usize,
    pub pages: usize,
    pub projects: usize,
    pub stats: usize,
    pub skills: usize,
    pub social_links: usize,
    pub contact_links: usize,
    pub appointments: usize,
}

fn count<T>(envelope: &Envelope<T>, len: impl FnOnce(&T) -> usize) -> usize {
    envelope.data.as_ref().map(len).unwrap_or(0)
}

impl ContentSummary {
    pub fn from_content(content: &AdminContent) -> Self {
        Self {
            settings: count(&content.settings, |d| d.settings.len()),
            pages: count(&content.pages, |d| d.pages.len()),
            projects: count(&content.projects, |d| d.projects.len()),
            stats: count(&content.stats, |d| d.stats.len()),
            skills: count(&content.skills, |d| d.skills.len()),
            social_links: count(&content.social_links, |d| d.social_links.len()),
            contact_links: count(&content.contact_links, |d| d.contact_links.len()),
            appointments: 0,
        }
    }

    pub fn with_appointments(mut self, appointments: &Envelope<AppointmentList>) -> Self {
        self.appointments = count(appointments, |d| d.appointments.len());
        self
    }

    /// Overview cards, in display order.
    pub fn overview(&self) -> [(&'static str, usize); 7] {
        [
            ("pages", self.pages),
            ("projects", self.projects),
            ("stats", self.stats),
            ("skills", self.skills),
            ("socialLinks", self.social_links),
            ("contactLinks", self.contact_links),
            ("appointments", self.appointments),
        ]
    }
}

impl AdminClient {
    /// Fires all seven content list requests together and waits for every one.
    pub async fn fetch_admin_content(&self) -> AdminContent {
        let (settings, pages, projects, stats, skills, social_links, contact_links) =
            futures::join!(
                self.fetch_site_settings(),
                self.fetch_pages(),
                self.fetch_projects(),
                self.fetch_stats(),
                self.fetch_skills(),
                self.fetch_social_links(),
                self.fetch_contact_links()
            );

        let content = AdminContent {
            settings,
            pages,
            projects,
            stats,
            skills,
            social_links,
            contact_links,
        };
        for (kind, error) in content.failures() {
            tracing::warn!(kind, "content list failed to load: {error}");
        }
        content
    }

    /// Content counts plus the appointment count, all fetched concurrently.
    pub async fn fetch_dashboard_summary(&self) -> ContentSummary {
        let (content, appointments) =
            futures::join!(self.fetch_admin_content(), self.fetch_appointments(None));
        ContentSummary::from_content(&content).with_appointments(&appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::client_with;

    #[tokio::test]
    async fn partial_failure_defaults_to_zero() {
        let (client, transport) = client_with("", "");
        // join! polls in declaration order and the fake answers synchronously,
        // so responses line up with the endpoint order below.
        transport.respond(200, r#"{"settings":[{"id":1,"key":"title","value":"Folio"}]}"#);
        transport.respond(200, r#"{"pages":[{"id":1,"slug":"about","title":"About"}]}"#);
        transport.respond(500, "Internal Server Error");
        transport.respond(403, r#"{"errors":["Admin access required."]}"#);
        transport.respond(
            200,
            r#"{"skills":[{"id":1,"name":"Go","order":0},{"id":2,"name":"Rust","order":1}]}"#,
        );
        transport.fail("connection reset");
        transport.respond(200, r#"{"contactLinks":[]}"#);
        transport.respond(200, r#"{"appointments":[]}"#);

        let summary = client.fetch_dashboard_summary().await;
        assert_eq!(
            summary,
            ContentSummary {
                settings: 1,
                pages: 1,
                projects: 0,
                stats: 0,
                skills: 2,
                social_links: 0,
                contact_links: 0,
                appointments: 0,
            }
        );

        let urls: Vec<String> = transport.seen.borrow().iter().map(|r| r.url.clone()).collect();
        assert_eq!(urls.len(), 8);
        assert!(urls.contains(&"/api/admin/appointments".to_string()));
    }

    #[tokio::test]
    async fn failures_name_each_broken_list() {
        let (client, transport) = client_with("", "");
        transport.respond(200, r#"{"settings":[]}"#);
        transport.respond(401, r#"{"errors":["Authentication required."]}"#);

        let content = client.fetch_admin_content().await;
        let failures = content.failures();
        assert_eq!(failures, vec![("pages", "Authentication required.".to_string())]);
    }

    #[test]
    fn overview_order_matches_dashboard() {
        let summary = ContentSummary {
            pages: 2,
            appointments: 9,
            ..Default::default()
        };
        let labels: Vec<&str> = summary.overview().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["pages", "projects", "stats", "skills", "socialLinks", "contactLinks", "appointments"]
        );
        assert_eq!(summary.overview()[6], ("appointments", 9));
    }
}
