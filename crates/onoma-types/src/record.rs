use serde::{Deserialize, Serialize};

/// One name entry with its precomputed lexical attributes.
///
/// Every field is opaque display text. Nothing downstream coerces the
/// numeric-looking columns; absence is the empty string and rendering
/// layers decide how to show it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display and search key. The only semantically required field.
    pub name: String,

    /// Character count of the name, as text.
    #[serde(default)]
    pub length: String,

    /// Estimated syllable count, as text.
    #[serde(default)]
    pub syllables_est: String,

    /// Vowel-to-letter ratio, as decimal text.
    #[serde(default)]
    pub vowel_ratio: String,

    /// First letter of the name. Part of the schema, unused by the UI.
    #[serde(default)]
    pub starts_with: String,

    /// Final letter(s) of the name.
    #[serde(default)]
    pub ending: String,

    #[serde(default)]
    pub endswith_a: String,

    #[serde(default)]
    pub endswith_i: String,

    #[serde(default)]
    pub endswith_y: String,
}

impl Record {
    /// Build a record carrying only a name. Attribute fields stay empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Admission predicate: a row enters the working set only when its
    /// name is non-blank after trimming.
    pub fn is_admissible(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Header field names of the dataset file, in file order.
pub const DATASET_FIELDS: [&str; 9] = [
    "name",
    "length",
    "syllables_est",
    "vowel_ratio",
    "starts_with",
    "ending",
    "endswith_a",
    "endswith_i",
    "endswith_y",
];
