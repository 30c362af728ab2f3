use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::layout::LayoutError;

// ────────────────────────────────────────────────────────────────────────────
// Request document
// ────────────────────────────────────────────────────────────────────────────

/// A value that may be given as a single item or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// The `cv` object of a render request, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CvDocument {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub email: Option<OneOrMany<String>>,
    pub phone: Option<OneOrMany<String>>,
    pub website: Option<OneOrMany<String>>,
    /// Extra pre-formatted contact lines, appended after the built-in ones.
    #[serde(default)]
    pub connections: Vec<String>,
    pub expertise_tags: Option<Vec<String>>,
    #[serde(default)]
    pub sections: SectionCatalog,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine inputs
// ────────────────────────────────────────────────────────────────────────────

/// Opaque reference to the profile photo (a path the typesetter resolves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef(pub String);

/// Header-relevant identity fields of a CV.
///
/// An empty `expertise_tags` list means "no tags".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvIdentity {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub photo: Option<PhotoRef>,
    pub connections: Vec<String>,
    pub expertise_tags: Vec<String>,
}

impl CvIdentity {
    pub fn has_tags(&self) -> bool {
        !self.expertise_tags.is_empty()
    }
}

/// One entry inside a section. The shape decides how it renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    OneLine {
        label: String,
        details: String,
    },
    Normal {
        name: String,
        date: Option<String>,
        location: Option<String>,
        summary: Option<String>,
        #[serde(default)]
        highlights: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Section {
    pub entries: Vec<Entry>,
}

/// Ordered section name → content mapping in authorial order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCatalog {
    sections: Vec<(String, Section)>,
}

impl SectionCatalog {
    /// Builds a catalog, rejecting repeated names.
    pub fn from_sections(
        sections: impl IntoIterator<Item = (String, Section)>,
    ) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for (name, section) in sections {
            if !seen.insert(name.clone()) {
                return Err(LayoutError::DuplicateSection(name));
            }
            ordered.push((name, section));
        }
        Ok(Self { sections: ordered })
    }

    /// Section names in authorial order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, section)| section)
    }
}

impl<'de> Deserialize<'de> for SectionCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = SectionCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping section titles to lists of entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, section)) = map.next_entry::<String, Section>()? {
                    pairs.push((name, section));
                }
                SectionCatalog::from_sections(pairs).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
