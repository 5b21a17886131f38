//! Field extraction: normalizes heterogeneous CV items into `UniversalContent`.
//!
//! Each section has ordered candidate key lists for the primary, secondary and
//! tertiary roles; when none match, generic keys are tried. Keys already consumed
//! by an earlier role are skipped so one field never fills two roles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::cv::SectionKind;

/// Shown when an item carries nothing usable as a title.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

pub const DESCRIPTION_KEYS: &[&str] = &[
    "description",
    "summary",
    "details",
    "responsibilities",
    "highlights",
    "achievements",
    "abstract",
];
pub const LINK_KEYS: &[&str] = &[
    "url", "link", "href", "website", "demo_url", "demo", "repo", "github",
];
pub const IMAGE_KEYS: &[&str] = &[
    "image", "image_url", "thumbnail", "src", "picture", "photo", "logo", "profile_image",
];
pub const TAG_KEYS: &[&str] = &[
    "technologies", "tech_stack", "tags", "keywords", "tools", "skills", "items",
];
const START_KEYS: &[&str] = &["start_date", "start", "from", "date_start", "started"];
const END_KEYS: &[&str] = &["end_date", "end", "to", "date_end", "ended"];
const DATE_KEYS: &[&str] = &["date", "year", "issue_date", "issued", "period", "duration"];
const LOCATION_KEYS: &[&str] = &["location", "city", "place"];
const CATEGORY_KEYS: &[&str] = &["category", "type", "kind"];

const GENERIC_PRIMARY: &[&str] = &["title", "name", "label", "heading"];
const GENERIC_SECONDARY: &[&str] = &["description", "subtitle", "summary", "details", "value"];
const GENERIC_TERTIARY: &[&str] = &["date", "period", "duration", "location", "note"];

/// The section-independent shape every adapter formatter consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalContent {
    pub primary: String,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    /// `date_range`, `link`, `image`, `tags`, `location`, `category` when present.
    pub metadata: Map<String, Value>,
}

impl UniversalContent {
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    pub fn tags(&self) -> Vec<String> {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

struct FieldKeys {
    primary: &'static [&'static str],
    secondary: &'static [&'static str],
    tertiary: &'static [&'static str],
}

fn section_keys(section: SectionKind) -> FieldKeys {
    match section {
        SectionKind::Hero => FieldKeys {
            primary: &["full_name", "name"],
            secondary: &["professional_title", "title", "headline"],
            tertiary: &["summary", "bio"],
        },
        SectionKind::Experience => FieldKeys {
            primary: &["position", "title", "role", "job_title"],
            secondary: &["company", "organization", "employer"],
            tertiary: &["description", "summary", "responsibilities", "highlights", "achievements"],
        },
        SectionKind::Education => FieldKeys {
            primary: &["degree", "qualification", "title", "program"],
            secondary: &["institution", "school", "university", "college"],
            tertiary: &["field_of_study", "field", "major", "description", "honors"],
        },
        SectionKind::Projects => FieldKeys {
            primary: &["name", "title", "project_name"],
            secondary: &["description", "summary", "tagline"],
            tertiary: &["technologies", "tech_stack", "tools", "role"],
        },
        SectionKind::Skills => FieldKeys {
            primary: &["category", "name", "group", "skill"],
            secondary: &["skills", "items", "keywords"],
            tertiary: &["proficiency", "level", "years"],
        },
        SectionKind::Achievements | SectionKind::Awards | SectionKind::Highlights => FieldKeys {
            primary: &["title", "name", "award"],
            secondary: &["description", "issuer", "organization"],
            tertiary: &["date", "year"],
        },
        SectionKind::Certifications => FieldKeys {
            primary: &["name", "title", "certification"],
            secondary: &["issuer", "authority", "organization"],
            tertiary: &["date", "issue_date", "year", "credential_id"],
        },
        SectionKind::Publications => FieldKeys {
            primary: &["title", "name"],
            secondary: &["publisher", "venue", "journal", "conference"],
            tertiary: &["description", "abstract", "summary", "authors"],
        },
        SectionKind::Volunteer => FieldKeys {
            primary: &["role", "position", "title"],
            secondary: &["organization", "company"],
            tertiary: &["description", "summary"],
        },
        SectionKind::Languages => FieldKeys {
            primary: &["language", "name"],
            secondary: &["proficiency", "level", "fluency"],
            tertiary: &[],
        },
        SectionKind::Interests => FieldKeys {
            primary: &["name", "interest", "title"],
            secondary: &["description", "details"],
            tertiary: &[],
        },
        SectionKind::Testimonials => FieldKeys {
            primary: &["quote", "text", "testimonial", "content"],
            secondary: &["name", "author", "person"],
            tertiary: &["title", "role", "designation", "company", "relationship"],
        },
        SectionKind::Contact => FieldKeys {
            primary: &["label", "platform", "name", "type"],
            secondary: &["url", "link", "href", "value"],
            tertiary: &[],
        },
        SectionKind::About => FieldKeys {
            primary: &["summary", "about", "text"],
            secondary: &[],
            tertiary: &[],
        },
    }
}

/// Extracts one item. Pure: the same `(section, item)` always yields the same content.
pub fn extract(section: SectionKind, item: &Value) -> UniversalContent {
    let Value::Object(obj) = item else {
        let primary = scalar_text(item).unwrap_or_else(|| {
            warn!("Empty {} item replaced with placeholder", section.as_str());
            PLACEHOLDER_TITLE.to_string()
        });
        debug!("Coerced non-object {} item to text", section.as_str());
        return UniversalContent {
            primary,
            secondary: None,
            tertiary: None,
            metadata: Map::new(),
        };
    };

    let keys = section_keys(section);
    let mut used: Vec<&str> = Vec::new();

    let primary = pick(obj, keys.primary, GENERIC_PRIMARY, &mut used).unwrap_or_else(|| {
        warn!(
            "No title-like field in {} item; using placeholder",
            section.as_str()
        );
        PLACEHOLDER_TITLE.to_string()
    });
    let secondary = pick(obj, keys.secondary, GENERIC_SECONDARY, &mut used);
    let tertiary = pick(obj, keys.tertiary, GENERIC_TERTIARY, &mut used);

    UniversalContent {
        primary,
        secondary,
        tertiary,
        metadata: extract_metadata(obj),
    }
}

pub fn extract_all(section: SectionKind, items: &[Value]) -> Vec<UniversalContent> {
    items.iter().map(|item| extract(section, item)).collect()
}

/// First non-blank value among `specific` then `generic`, skipping keys in `used`.
fn pick<'a>(
    obj: &Map<String, Value>,
    specific: &[&'a str],
    generic: &[&'a str],
    used: &mut Vec<&'a str>,
) -> Option<String> {
    for key in specific.iter().chain(generic.iter()) {
        if used.contains(key) {
            continue;
        }
        if let Some(text) = obj.get(*key).and_then(scalar_text) {
            used.push(*key);
            return Some(text);
        }
    }
    None
}

fn extract_metadata(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut metadata = Map::new();

    if let Some(range) = date_range(obj) {
        metadata.insert("date_range".to_string(), Value::String(range));
    }
    let link = LINK_KEYS
        .iter()
        .filter_map(|key| obj.get(*key).and_then(scalar_text))
        .find(|l| looks_like_link(l));
    if let Some(link) = link {
        metadata.insert("link".to_string(), Value::String(link));
    }
    if let Some(image) = first_text(obj, IMAGE_KEYS) {
        metadata.insert("image".to_string(), Value::String(image));
    }
    let tags = tags(obj);
    if !tags.is_empty() {
        metadata.insert(
            "tags".to_string(),
            Value::Array(tags.into_iter().map(Value::String).collect()),
        );
    }
    if let Some(location) = first_text(obj, LOCATION_KEYS) {
        metadata.insert("location".to_string(), Value::String(location));
    }
    if let Some(category) = first_text(obj, CATEGORY_KEYS) {
        metadata.insert("category".to_string(), Value::String(category));
    }

    metadata
}

fn date_range(obj: &Map<String, Value>) -> Option<String> {
    match first_text(obj, START_KEYS) {
        Some(start) => {
            let end = first_text(obj, END_KEYS).unwrap_or_else(|| "Present".to_string());
            Some(format!("{start} - {end}"))
        }
        None => first_text(obj, DATE_KEYS),
    }
}

fn tags(obj: &Map<String, Value>) -> Vec<String> {
    for key in TAG_KEYS {
        match obj.get(*key) {
            Some(Value::Array(values)) => {
                let tags: Vec<String> = values.iter().filter_map(scalar_text).collect();
                if !tags.is_empty() {
                    return tags;
                }
            }
            Some(Value::String(s)) => {
                let tags: Vec<String> = s
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                if !tags.is_empty() {
                    return tags;
                }
            }
            _ => {}
        }
    }
    Vec::new()
}

fn looks_like_link(value: &str) -> bool {
    value.contains("://")
        || value.starts_with("mailto:")
        || value.starts_with("tel:")
        || value.starts_with('/')
        || value.contains('.')
}

/// First non-blank textual value for any of `keys`.
pub fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(scalar_text))
}

/// Coerces a JSON value to display text.
///
/// Strings are trimmed, numbers and booleans stringified, arrays of scalars
/// joined with ", ". Objects, nulls and blank strings yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(values) => {
            let parts: Vec<String> = values
                .iter()
                .filter(|v| !v.is_array())
                .filter_map(scalar_text)
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(_) | Value::Null => None,
    }
}

/// Whether `item` is an object with a non-blank value under any of `keys`.
pub fn has_any_field(item: &Value, keys: &[&str]) -> bool {
    item.as_object()
        .map(|obj| first_text(obj, keys).is_some())
        .unwrap_or(false)
}

/// Flattens every string, number and key-free scalar in `value` into one
/// lowercase space-separated string. Used for keyword scanning.
pub fn collect_text(value: &Value) -> String {
    let mut out = String::new();
    push_text(value, &mut out);
    out.to_lowercase()
}

fn push_text(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push_str(s);
            out.push(' ');
        }
        Value::Number(n) => {
            out.push_str(&n.to_string());
            out.push(' ');
        }
        Value::Array(values) => values.iter().for_each(|v| push_text(v, out)),
        Value::Object(obj) => obj.values().for_each(|v| push_text(v, out)),
        Value::Bool(_) | Value::Null => {}
    }
}
