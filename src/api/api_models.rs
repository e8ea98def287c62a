use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub type GroupId = u64;
pub type EventId = u64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    // Whatever else the server sends along (timestamps, counters...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
impl Group {
    pub fn new(id: GroupId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            extra: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    pub group_id: GroupId,
}

// Payload of GET /groups/:id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupEvents {
    pub group: Group,
    pub events: Vec<Event>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewGroup {
    pub name: String,
}

#[derive(Serialize)]
pub(crate) struct GroupParams<'a> {
    pub group: &'a NewGroup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Poster {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: Self::guess_content_type(file_name).to_string(),
            bytes,
        }
    }

    fn guess_content_type(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match &ext[..] {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub poster: Option<Poster>,
    pub group_id: GroupId,
}

// The server reports errors either as a single message or a list of messages per field
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl From<FieldMessages> for String {
    fn from(messages: FieldMessages) -> Self {
        match messages {
            FieldMessages::One(message) => message,
            FieldMessages::Many(messages) => messages.join(", "),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| &s[..])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (&k[..], &v[..]))
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, FieldMessages>::deserialize(deserializer)?;
        Ok(Self(raw.into_iter().map(|(k, v)| (k, v.into())).collect()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field} {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
