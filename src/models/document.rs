use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identity key of an entity.
///
/// The document allows any scalar as an id, so integers, floats and strings
/// are all accepted. Numbers are keyed by value, not by spelling: `1.0` and
/// `1` are the same id, and `1e3` displays as `1000`. Numbers and strings
/// stay distinct kinds, so `7` and `"7"` are different ids even though they
/// display the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Number(String),
    Text(String),
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        match self {
            EntityId::Number(n) => n,
            EntityId::Text(s) => s,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntityId::Text(s) => serializer.serialize_str(s),
            EntityId::Number(n) => {
                if let Ok(i) = n.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = n.parse::<u64>() {
                    serializer.serialize_u64(u)
                } else if let Ok(f) = n.parse::<f64>() {
                    serializer.serialize_f64(f)
                } else {
                    serializer.serialize_str(n)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or number")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<EntityId, E> {
                Ok(EntityId::Text(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<EntityId, E> {
                Ok(EntityId::Text(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<EntityId, E> {
                Ok(EntityId::Number(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<EntityId, E> {
                Ok(EntityId::Number(value.to_string()))
            }

            // f64 Display drops a zero fraction and expands exponents.
            fn visit_f64<E: de::Error>(self, value: f64) -> Result<EntityId, E> {
                Ok(EntityId::Number(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// An author shown in the "Our Authors" section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub username: String,
    /// Avatar image URL
    pub avatar: String,
    pub bio: String,
}

/// A blog post shown in the "Latest Posts" section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Cover image URL
    pub cover_image: String,
    pub tags: Vec<String>,
    /// Publication date, displayed as-is
    pub published_at: String,
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

/// The whole payload served at the document path.
///
/// All three collections are required: a body missing any of them fails to
/// parse instead of producing a half-filled page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
}

impl Document {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
