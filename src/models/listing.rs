use serde::{Deserialize, Deserializer};

/// Body of a Cloud Storage object listing (`GET /b/{bucket}/o`).
///
/// Only the fields the gallery reads are modelled; `kind`, `prefixes`,
/// `nextPageToken` and friends are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ObjectListing {
    /// Listed objects. Absent (or `null`) when nothing matches the prefix.
    /// Entries that do not decode as objects are dropped individually.
    #[serde(default, deserialize_with = "skip_malformed_items")]
    pub items: Option<Vec<StorageObject>>,
}

impl ObjectListing {
    /// Listed objects, treating an absent `items` field as empty.
    pub fn items(&self) -> &[StorageObject] {
        self.items.as_deref().unwrap_or_default()
    }
}

/// A single object entry from the listing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StorageObject {
    /// Full object name, including the folder prefix.
    pub name: String,
    /// Size in bytes. The JSON API sends it as a decimal string.
    #[serde(default, deserialize_with = "size_from_string_or_number")]
    pub size: u64,
}

/// Keeps the well-formed entries of `items`; a bad entry only loses itself.
fn skip_malformed_items<'de, D>(deserializer: D) -> Result<Option<Vec<StorageObject>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Number(f64),
    Text(String),
}

/// Accepts `"1234"`, `1234` or `null`; anything unparseable or non-positive is 0.
fn size_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let size = match Option::<SizeRepr>::deserialize(deserializer)? {
        Some(SizeRepr::Number(n)) => n,
        Some(SizeRepr::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };

    // Round up so a fractional size still counts as non-empty.
    Ok(if size.is_finite() && size > 0.0 {
        size.ceil() as u64
    } else {
        0
    })
}
