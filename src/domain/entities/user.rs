use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The members feed serves ids as strings ("1"), other feeds as numbers.
// Leading zeros are not kept: "007" decodes and displays as 7.
impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(UserId(value)),
            RawId::Text(text) => text
                .parse::<i64>()
                .map(UserId)
                .map_err(|err| serde::de::Error::custom(format!("invalid user id {text:?}: {err}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Case-insensitive substring match over every field, id included.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.id.to_string().contains(needle)
            || UserField::EDITABLE
                .iter()
                .any(|field| field.value(self).to_lowercase().contains(needle))
    }
}

/// Columns that can be changed in edit mode. The id is never editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Role,
}

impl UserField {
    pub const EDITABLE: [UserField; 3] = [UserField::Name, UserField::Email, UserField::Role];

    pub fn label(self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Role => "Role",
        }
    }

    pub fn value(self, user: &User) -> &str {
        match self {
            UserField::Name => &user.name,
            UserField::Email => &user.email,
            UserField::Role => &user.role,
        }
    }

    pub fn set(self, user: &mut User, value: String) {
        match self {
            UserField::Name => user.name = value,
            UserField::Email => user.email = value,
            UserField::Role => user.role = value,
        }
    }
}
