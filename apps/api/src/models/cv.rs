use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Placeholder shown in the generated site when the CV carries no name.
pub const PLACEHOLDER_NAME: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Every section a generated portfolio can render, in canonical page order.
///
/// `Highlights` never comes from the CV directly: it is the target of the
/// sparse-section merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Achievements,
    Highlights,
    Certifications,
    Publications,
    Awards,
    Volunteer,
    Languages,
    Interests,
    Testimonials,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 16] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Achievements,
        SectionKind::Highlights,
        SectionKind::Certifications,
        SectionKind::Publications,
        SectionKind::Awards,
        SectionKind::Volunteer,
        SectionKind::Languages,
        SectionKind::Interests,
        SectionKind::Testimonials,
        SectionKind::Contact,
    ];

    /// Small sections that are candidates for merging into `Highlights`.
    pub const MINOR: [SectionKind; 6] = [
        SectionKind::Achievements,
        SectionKind::Certifications,
        SectionKind::Awards,
        SectionKind::Languages,
        SectionKind::Interests,
        SectionKind::Volunteer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Achievements => "achievements",
            SectionKind::Highlights => "highlights",
            SectionKind::Certifications => "certifications",
            SectionKind::Publications => "publications",
            SectionKind::Awards => "awards",
            SectionKind::Volunteer => "volunteer",
            SectionKind::Languages => "languages",
            SectionKind::Interests => "interests",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Contact => "contact",
        }
    }

    /// Parses the snake_case key used in requests and file names.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.iter().copied().find(|kind| kind.as_str() == key)
    }

    /// Heading rendered above the section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::About => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Education => "Education",
            SectionKind::Achievements => "Achievements",
            SectionKind::Highlights => "Highlights",
            SectionKind::Certifications => "Certifications",
            SectionKind::Publications => "Publications",
            SectionKind::Awards => "Awards",
            SectionKind::Volunteer => "Volunteering",
            SectionKind::Languages => "Languages",
            SectionKind::Interests => "Interests",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Contact => "Contact",
        }
    }

    /// Base ordering weight. Higher renders earlier.
    pub fn base_priority(&self) -> i32 {
        match self {
            SectionKind::Hero => 100,
            SectionKind::About => 95,
            SectionKind::Experience => 90,
            SectionKind::Projects => 85,
            SectionKind::Skills => 80,
            SectionKind::Education => 75,
            SectionKind::Achievements => 70,
            SectionKind::Highlights => 68,
            SectionKind::Certifications => 65,
            SectionKind::Publications => 60,
            SectionKind::Awards => 55,
            SectionKind::Volunteer => 50,
            SectionKind::Languages => 45,
            SectionKind::Interests => 40,
            SectionKind::Testimonials => 35,
            SectionKind::Contact => 30,
        }
    }

    /// PascalCase component name for the generated section file, e.g. `ExperienceSection`.
    pub fn component_name(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => format!("{}{}Section", first.to_ascii_uppercase(), chars.as_str()),
            None => "Section".to_string(),
        }
    }

    pub fn is_minor(&self) -> bool {
        Self::MINOR.contains(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CV schema
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroSection {
    #[serde(alias = "name")]
    pub full_name: Option<String>,
    #[serde(alias = "title", alias = "headline")]
    pub professional_title: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "image")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub links: Vec<Value>,
}

/// A parsed CV as delivered by the upstream extraction step.
///
/// List sections stay as raw JSON values: upstream parsers disagree on key
/// names and item shapes, and the adapter's field extraction is what
/// normalizes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvData {
    pub hero: Option<HeroSection>,
    pub contact: Option<ContactInfo>,
    #[serde(alias = "about")]
    pub summary: Option<String>,
    #[serde(alias = "work_experience")]
    pub experience: Option<Vec<Value>>,
    pub education: Option<Vec<Value>>,
    pub skills: Option<Vec<Value>>,
    pub projects: Option<Vec<Value>>,
    pub achievements: Option<Vec<Value>>,
    pub certifications: Option<Vec<Value>>,
    pub publications: Option<Vec<Value>>,
    pub awards: Option<Vec<Value>>,
    #[serde(alias = "volunteering")]
    pub volunteer: Option<Vec<Value>>,
    pub languages: Option<Vec<Value>>,
    #[serde(alias = "hobbies")]
    pub interests: Option<Vec<Value>>,
    pub testimonials: Option<Vec<Value>>,
}

impl CvData {
    /// Returns the items of a section, or `None` when the CV does not carry it.
    ///
    /// Hero, About and Contact are synthesized from the typed fields so every
    /// section reaches the adapter in the same shape. `null` items are dropped.
    pub fn section_items(&self, kind: SectionKind) -> Option<Vec<Value>> {
        match kind {
            SectionKind::Hero => {
                let hero = self.hero.as_ref()?;
                if non_blank(&hero.full_name).is_none()
                    && non_blank(&hero.professional_title).is_none()
                {
                    return None;
                }
                serde_json::to_value(hero).ok().map(|v| vec![v])
            }
            SectionKind::About => self
                .about_text()
                .map(|text| vec![Value::String(text.to_string())]),
            SectionKind::Contact => {
                let items = contact_items(self.contact.as_ref()?);
                if items.is_empty() {
                    None
                } else {
                    Some(items)
                }
            }
            SectionKind::Highlights => None,
            list_kind => self.list(list_kind).map(|items| {
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .cloned()
                    .collect()
            }),
        }
    }

    /// Sections carrying at least one item, in canonical order.
    pub fn present_sections(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .iter()
            .copied()
            .filter(|kind| {
                self.section_items(*kind)
                    .map(|items| !items.is_empty())
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_sections().is_empty()
    }

    pub fn display_name(&self) -> String {
        self.hero
            .as_ref()
            .and_then(|h| non_blank(&h.full_name))
            .unwrap_or(PLACEHOLDER_NAME)
            .to_string()
    }

    pub fn headline(&self) -> Option<&str> {
        self.hero
            .as_ref()
            .and_then(|h| non_blank(&h.professional_title))
    }

    /// Free-text summary: the top-level `summary`, else the hero summary.
    pub fn about_text(&self) -> Option<&str> {
        non_blank(&self.summary).or_else(|| self.hero.as_ref().and_then(|h| non_blank(&h.summary)))
    }

    fn list(&self, kind: SectionKind) -> Option<&Vec<Value>> {
        match kind {
            SectionKind::Experience => self.experience.as_ref(),
            SectionKind::Education => self.education.as_ref(),
            SectionKind::Skills => self.skills.as_ref(),
            SectionKind::Projects => self.projects.as_ref(),
            SectionKind::Achievements => self.achievements.as_ref(),
            SectionKind::Certifications => self.certifications.as_ref(),
            SectionKind::Publications => self.publications.as_ref(),
            SectionKind::Awards => self.awards.as_ref(),
            SectionKind::Volunteer => self.volunteer.as_ref(),
            SectionKind::Languages => self.languages.as_ref(),
            SectionKind::Interests => self.interests.as_ref(),
            SectionKind::Testimonials => self.testimonials.as_ref(),
            SectionKind::Hero
            | SectionKind::About
            | SectionKind::Contact
            | SectionKind::Highlights => None,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contact_items(contact: &ContactInfo) -> Vec<Value> {
    let mut items = Vec::new();

    if let Some(email) = non_blank(&contact.email) {
        items.push(json!({ "label": "Email", "url": format!("mailto:{email}") }));
    }
    if let Some(phone) = non_blank(&contact.phone) {
        let dialable: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        items.push(json!({ "label": "Phone", "url": format!("tel:{dialable}") }));
    }

    let profiles = [
        ("LinkedIn", &contact.linkedin),
        ("GitHub", &contact.github),
        ("Twitter", &contact.twitter),
        ("Website", &contact.website),
    ];
    for (label, value) in profiles {
        if let Some(url) = non_blank(value) {
            items.push(json!({ "label": label, "url": with_scheme(url) }));
        }
    }

    items.extend(contact.links.iter().filter(|l| !l.is_null()).cloned());
    items
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
