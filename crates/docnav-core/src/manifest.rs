//! Resource manifest types.
//!
//! The manifest is the flat list of content files the sidebar is built
//! from. It is produced by `docnav-cli manifest` and fetched by the web
//! app once per session.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ManifestError;

/// Root manifest structure (`resources.json`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    /// Every file under the resources source, in walk order.
    pub resources: Vec<ResourceRecord>,
}

impl Manifest {
    /// Decode a manifest from JSON text.
    ///
    /// Records are kept as written; see [`Manifest::drop_empty_paths`].
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Remove records whose relative path is empty, returning their
    /// positions in the original list.
    pub fn drop_empty_paths(&mut self) -> Vec<usize> {
        let mut dropped = Vec::new();
        let mut index = 0;
        self.resources.retain(|r| {
            let keep = !r.relative_path.trim_matches('/').is_empty();
            if !keep {
                dropped.push(index);
            }
            index += 1;
            keep
        });
        dropped
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // A struct of strings always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Relative paths of every record, including non-Markdown assets.
    pub fn relative_paths(&self) -> Vec<&str> {
        self.resources
            .iter()
            .map(|r| r.relative_path.as_str())
            .collect()
    }
}

/// A single content file record.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Path relative to the resources source directory (e.g. `guides/intro.md`).
    pub relative_path: String,
    /// Parsed Markdown front matter, absent for assets and bare files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<Frontmatter>,
}

impl ResourceRecord {
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            frontmatter: None,
        }
    }

    pub fn with_frontmatter(mut self, frontmatter: Frontmatter) -> Self {
        self.frontmatter = Some(frontmatter);
        self
    }

    /// Check whether this record is a Markdown page (`.md` or `.mdx`).
    pub fn is_markdown(&self) -> bool {
        match self.relative_path.rsplit_once('.') {
            Some((_, ext)) => matches!(ext.to_ascii_lowercase().as_str(), "md" | "mdx"),
            None => false,
        }
    }
}

/// Markdown front matter fields the sidebar cares about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Accepts either `authors: Ada` or `authors: [Ada, Grace]`.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(author)) => vec![author],
        Some(OneOrMany::Many(authors)) => authors,
    })
}
