use serde::{Deserialize, Deserializer, Serialize};

/// A stored customer record.
///
/// Every field is optional on the wire: empty strings are omitted when
/// serializing, and absent or `null` fields decode as empty strings, so an
/// empty `id`, a `null` id and a missing `id` are the same thing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub firstname: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub lastname: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    pub fn new(id: impl Into<String>, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self { id: id.into(), firstname: firstname.into(), lastname: lastname.into() }
    }
}
