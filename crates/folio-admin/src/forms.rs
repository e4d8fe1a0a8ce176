//! Form state for the content editors.
//!
//! Every content kind is edited through the same screen; [`FormSchema`]
//! describes which inputs it has and how their text turns into request
//! bodies.

use std::collections::BTreeMap;

use folio::admin::Resource;
use folio::data::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    Number,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Initial value of a blank form.
    pub default: &'static str,
    pub placeholder: &'static str,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        label,
        kind,
        default: "",
        placeholder: "",
    }
}

const fn order_field() -> Field {
    Field {
        default: "0",
        ..field("order", "Order", FieldKind::Number)
    }
}

/// Raw input text keyed by field name. Checkboxes hold `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form(BTreeMap<&'static str, String>);

impl Form {
    pub fn blank(fields: &[Field]) -> Self {
        Self(
            fields
                .iter()
                .map(|field| (field.name, field.default.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    pub fn required(&self, name: &str, label: &str) -> Result<String, String> {
        let value = self.text(name);
        if value.is_empty() {
            return Err(format!("{label} is required."));
        }
        Ok(value)
    }

    /// Blank counts as zero.
    pub fn number(&self, name: &str, label: &str) -> Result<u32, String> {
        let value = self.text(name);
        if value.is_empty() {
            return Ok(0);
        }
        value
            .parse()
            .map_err(|_| format!("{label} must be a whole number."))
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == "true"
    }
}

fn flag_text(value: bool) -> String {
    value.to_string()
}

/// A content kind editable through the generic CRUD screen.
pub trait FormSchema: Resource + Clone + PartialEq {
    /// Heading of the screen, e.g. "Social links".
    const TITLE: &'static str;
    const FIELDS: &'static [Field];

    /// Current values, for the edit form.
    fn form(&self) -> Form;
    fn draft(form: &Form) -> Result<Self::Draft, String>;
    fn patch(form: &Form) -> Result<Self::Patch, String>;

    /// Row heading in the list.
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
}

impl FormSchema for Page {
    const TITLE: &'static str = "Pages";
    const FIELDS: &'static [Field] = &[
        field("title", "Title", FieldKind::Text),
        Field {
            placeholder: "derived from the title when blank",
            ..field("slug", "Slug", FieldKind::Text)
        },
        field("body", "Body", FieldKind::TextArea),
        field("isPublished", "Published", FieldKind::Checkbox),
    ];

    fn form(&self) -> Form {
        Form::default()
            .with("title", &self.title)
            .with("slug", &self.slug)
            .with("body", &self.body)
            .with("isPublished", flag_text(self.is_published))
    }

    fn draft(form: &Form) -> Result<PageDraft, String> {
        Ok(PageDraft {
            title: form.required("title", "Title")?,
            slug: form.text("slug"),
            body: form.get("body").to_string(),
            is_published: form.flag("isPublished"),
        })
    }

    fn patch(form: &Form) -> Result<PagePatch, String> {
        let draft = Self::draft(form)?;
        Ok(PagePatch {
            slug: Some(draft.slug),
            title: Some(draft.title),
            body: Some(draft.body),
            is_published: Some(draft.is_published),
        })
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn subtitle(&self) -> String {
        let state = if self.is_published { "published" } else { "draft" };
        format!("/{} · {state}", self.slug)
    }
}

impl FormSchema for Project {
    const TITLE: &'static str = "Projects";
    const FIELDS: &'static [Field] = &[
        field("title", "Title", FieldKind::Text),
        Field {
            placeholder: "derived from the title when blank",
            ..field("slug", "Slug", FieldKind::Text)
        },
        field("description", "Description", FieldKind::TextArea),
        Field {
            placeholder: "rust, wasm, yew",
            ..field("tags", "Tags", FieldKind::Text)
        },
        field("link", "Link", FieldKind::Url),
        field("github", "GitHub", FieldKind::Url),
        field("isPublished", "Published", FieldKind::Checkbox),
        order_field(),
    ];

    fn form(&self) -> Form {
        Form::default()
            .with("title", &self.title)
            .with("slug", &self.slug)
            .with("description", &self.description)
            .with("tags", self.tags.join(", "))
            .with("link", &self.link)
            .with("github", &self.github)
            .with("isPublished", flag_text(self.is_published))
            .with("order", self.order.to_string())
    }

    fn draft(form: &Form) -> Result<ProjectDraft, String> {
        Ok(ProjectDraft {
            title: form.required("title", "Title")?,
            slug: form.text("slug"),
            description: form.get("description").to_string(),
            tags: parse_tags(form.get("tags")),
            link: form.text("link"),
            github: form.text("github"),
            is_published: form.flag("isPublished"),
            order: form.number("order", "Order")?,
        })
    }

    fn patch(form: &Form) -> Result<ProjectPatch, String> {
        let draft = Self::draft(form)?;
        Ok(ProjectPatch {
            slug: Some(draft.slug),
            title: Some(draft.title),
            description: Some(draft.description),
            tags: Some(draft.tags),
            link: Some(draft.link),
            github: Some(draft.github),
            is_published: Some(draft.is_published),
            order: Some(draft.order),
        })
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn subtitle(&self) -> String {
        if self.tags.is_empty() {
            format!("/{}", self.slug)
        } else {
            format!("/{} · {}", self.slug, self.tags.join(", "))
        }
    }
}

impl FormSchema for Stat {
    const TITLE: &'static str = "Stats";
    const FIELDS: &'static [Field] = &[
        Field {
            placeholder: "10+",
            ..field("number", "Number", FieldKind::Text)
        },
        field("label", "Label", FieldKind::Text),
        field("icon", "Icon", FieldKind::Text),
        order_field(),
    ];

    fn form(&self) -> Form {
        Form::default()
            .with("number", &self.number)
            .with("label", &self.label)
            .with("icon", &self.icon)
            .with("order", self.order.to_string())
    }

    fn draft(form: &Form) -> Result<StatDraft, String> {
        Ok(StatDraft {
            number: form.required("number", "Number")?,
            label: form.required("label", "Label")?,
            icon: form.text("icon"),
            order: form.number("order", "Order")?,
        })
    }

    fn patch(form: &Form) -> Result<StatPatch, String> {
        let draft = Self::draft(form)?;
        Ok(StatPatch {
            number: Some(draft.number),
            label: Some(draft.label),
            icon: Some(draft.icon),
            order: Some(draft.order),
        })
    }

    fn title(&self) -> String {
        format!("{} {}", self.number, self.label)
    }

    fn subtitle(&self) -> String {
        format!("order {}", self.order)
    }
}

impl FormSchema for Skill {
    const TITLE: &'static str = "Skills";
    const FIELDS: &'static [Field] = &[field("name", "Name", FieldKind::Text), order_field()];

    fn form(&self) -> Form {
        Form::default()
            .with("name", &self.name)
            .with("order", self.order.to_string())
    }

    fn draft(form: &Form) -> Result<SkillDraft, String> {
        Ok(SkillDraft {
            name: form.required("name", "Name")?,
            order: form.number("order", "Order")?,
        })
    }

    fn patch(form: &Form) -> Result<SkillPatch, String> {
        let draft = Self::draft(form)?;
        Ok(SkillPatch {
            name: Some(draft.name),
            order: Some(draft.order),
        })
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        format!("order {}", self.order)
    }
}

impl FormSchema for SocialLink {
    const TITLE: &'static str = "Social links";
    const FIELDS: &'static [Field] = &[
        field("name", "Name", FieldKind::Text),
        field("url", "URL", FieldKind::Url),
        field("icon", "Icon", FieldKind::Text),
        order_field(),
    ];

    fn form(&self) -> Form {
        Form::default()
            .with("name", &self.name)
            .with("url", &self.url)
            .with("icon", &self.icon)
            .with("order", self.order.to_string())
    }

    fn draft(form: &Form) -> Result<SocialLinkDraft, String> {
        Ok(SocialLinkDraft {
            name: form.required("name", "Name")?,
            url: form.required("url", "URL")?,
            icon: form.text("icon"),
            order: form.number("order", "Order")?,
        })
    }

    fn patch(form: &Form) -> Result<SocialLinkPatch, String> {
        let draft = Self::draft(form)?;
        Ok(SocialLinkPatch {
            name: Some(draft.name),
            url: Some(draft.url),
            icon: Some(draft.icon),
            order: Some(draft.order),
        })
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        self.url.clone()
    }
}

impl FormSchema for ContactLink {
    const TITLE: &'static str = "Contact links";
    const FIELDS: &'static [Field] = &[
        field("title", "Title", FieldKind::Text),
        field("description", "Description", FieldKind::Text),
        Field {
            placeholder: "mailto:hello@example.com",
            ..field("href", "Link", FieldKind::Text)
        },
        field("icon", "Icon", FieldKind::Text),
        order_field(),
    ];

    fn form(&self) -> Form {
        Form::default()
            .with("title", &self.title)
            .with("description", &self.description)
            .with("href", &self.href)
            .with("icon", &self.icon)
            .with("order", self.order.to_string())
    }

    fn draft(form: &Form) -> Result<ContactLinkDraft, String> {
        Ok(ContactLinkDraft {
            icon: form.text("icon"),
            title: form.required("title", "Title")?,
            description: form.text("description"),
            href: form.required("href", "Link")?,
            order: form.number("order", "Order")?,
        })
    }

    fn patch(form: &Form) -> Result<ContactLinkPatch, String> {
        let draft = Self::draft(form)?;
        Ok(ContactLinkPatch {
            icon: Some(draft.icon),
            title: Some(draft.title),
            description: Some(draft.description),
            href: Some(draft.href),
            order: Some(draft.order),
        })
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn subtitle(&self) -> String {
        self.href.clone()
    }
}

/// Rows sent by "save all": blank keys are dropped, the rest trimmed.
pub fn settings_to_save(rows: &[SettingEntry]) -> Vec<SettingEntry> {
    rows.iter()
        .filter(|row| !row.key.trim().is_empty())
        .map(|row| SettingEntry {
            key: row.key.trim().to_string(),
            value: row.value.clone(),
        })
        .collect()
}
