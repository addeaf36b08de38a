//! View models for result cards and the profile modal

use crate::api::{Person, PersonType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());

/// Two-letter avatar text for a name.
///
/// Punctuation is stripped first. With two or more tokens this is the first letter of
/// the first and last token; a single token gives its first two characters; nothing
/// usable gives `?`.
pub fn initials(name: &str) -> String {
    let cleaned = PUNCTUATION.replace_all(name, "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let raw: String = match tokens.as_slice() {
        [] => return "?".to_string(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };

    raw.chars().flat_map(char::to_uppercase).collect()
}

/// Shorten text to `max_chars`, appending an ellipsis when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

/// Keep only http(s) links; anything else would be an injection vector in `href`
fn safe_link(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then(|| url.to_string())
}

/// Present and non-blank
fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn type_class(person_type: Option<PersonType>) -> &'static str {
    person_type.map(|t| t.as_str()).unwrap_or("unknown")
}

/// Summary card for one search result
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub title: Option<String>,
    pub type_class: &'static str,
    pub badge: Option<&'static str>,
    pub unit: Option<String>,
    pub organization: Option<String>,
    pub bio: Option<String>,
    pub tags: Vec<String>,
    pub score: Option<String>,
}

impl CardView {
    pub fn new(person: &Person, bio_length: usize, tag_limit: usize) -> Self {
        Self {
            id: person.id,
            name: person.display_name().to_string(),
            initials: initials(person.display_name()),
            title: present(person.title.as_deref()),
            type_class: type_class(person.person_type),
            badge: person.person_type.map(|t| t.label()),
            unit: present(person.unit.as_deref()),
            organization: present(person.organization.as_deref()),
            bio: present(person.bio.as_deref()).map(|bio| truncate(&bio, bio_length)),
            tags: person
                .tags()
                .into_iter()
                .take(tag_limit)
                .map(str::to_string)
                .collect(),
            score: person
                .similarity_score
                .map(|s| format!("{:.0}% match", s * 100.0)),
        }
    }
}

/// Expanded profile shown in the modal
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub title: Option<String>,
    pub type_class: &'static str,
    pub badge: Option<&'static str>,
    pub unit: Option<String>,
    pub organization: Option<String>,
    pub mba_year: Option<String>,
    pub bio: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    /// Faculty only
    pub profile_url: Option<String>,
}

impl From<&Person> for ProfileView {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.display_name().to_string(),
            initials: initials(person.display_name()),
            title: present(person.title.as_deref()),
            type_class: type_class(person.person_type),
            badge: person.person_type.map(|t| t.label()),
            unit: present(person.unit.as_deref()),
            organization: present(person.organization.as_deref()),
            mba_year: present(person.mba_year.as_deref()),
            bio: present(person.bio.as_deref()),
            tags: person.tags().into_iter().map(str::to_string).collect(),
            image_url: safe_link(person.image_url.as_deref()),
            email: present(person.email.as_deref()),
            phone: present(person.phone.as_deref()),
            linkedin_url: safe_link(person.linkedin_url.as_deref()),
            profile_url: if person.is_faculty() {
                safe_link(person.profile_url.as_deref())
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_tokens() {
        assert_eq!(initials("Amy Edmondson"), "AE");
        assert_eq!(initials("frances x. frei"), "FF");
        assert_eq!(initials("Rosabeth Moss Kanter"), "RK");
    }

    #[test]
    fn test_initials_strip_punctuation() {
        assert_eq!(initials("Dr. O'Brien"), "DO");
        assert_eq!(initials("- Madonna -"), "MA");
    }

    #[test]
    fn test_initials_single_token() {
        assert_eq!(initials("cher"), "CH");
        assert_eq!(initials("X"), "X");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials("..."), "?");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("hello world again", 6), "hello...");
        assert_eq!(truncate("naïve café", 4), "naïv...");
    }

    #[test]
    fn test_card_tag_cap() {
        let person = Person {
            id: 1,
            name: Some("Jane Doe".to_string()),
            tag_names: Some("A,B,C,D,E,F".to_string()),
            ..Default::default()
        };
        let card = CardView::new(&person, 150, 4);
        assert_eq!(card.tags, vec!["A", "B", "C", "D"]);
        assert_eq!(card.initials, "JD");
        assert_eq!(card.type_class, "unknown");
        assert_eq!(card.badge, None);
    }

    #[test]
    fn test_profile_link_only_for_faculty() {
        let mut person = Person {
            id: 2,
            name: Some("Pat Lee".to_string()),
            person_type: Some(PersonType::Fellow),
            profile_url: Some("https://www.hbs.edu/faculty/Pages/profile.aspx?facId=2".to_string()),
            linkedin_url: Some("javascript:alert(1)".to_string()),
            tag_names: Some("A,B,C,D,E,F".to_string()),
            ..Default::default()
        };
        let view = ProfileView::from(&person);
        assert_eq!(view.profile_url, None);
        assert_eq!(view.linkedin_url, None);
        assert_eq!(view.tags.len(), 6);

        person.person_type = Some(PersonType::Faculty);
        let view = ProfileView::from(&person);
        assert!(view.profile_url.is_some());
    }
}
