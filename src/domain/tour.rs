use serde::{Deserialize, Deserializer};

/// A scheduled showing of one of the seller's listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tour {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled_time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub buyer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Tour {
    /// `None` for absent or empty notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Body of `GET /tours/seller`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToursResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tours: Vec<Tour>,
}

// Nullable backend columns arrive as JSON null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The backend has shipped ids both as integers and strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
