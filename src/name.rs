use serde::{de, ser, Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Marker for the login of a user or organization that owns repositories
#[derive(Debug)]
pub enum Owner {}

/// Marker for a repository name
#[derive(Debug)]
pub enum Repo {}

/// Marker for an organization login
#[derive(Debug)]
pub enum Organization {}

/// A name of some GitHub entity, tagged with the kind of entity it names so an owner can't be
/// passed where a repository is expected.
pub struct Name<T> {
    name: String,
    entity: PhantomData<fn() -> T>,
}

impl<T> Name<T> {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            entity: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn into_inner(self) -> String {
        self.name
    }
}

/// Conversion of an identifier into a single URL path segment.
///
/// Every character outside of the unreserved set (`A-Z a-z 0-9 - . _ ~`) is percent-encoded,
/// `/` included, so the result always occupies exactly one segment.
pub trait PathPart {
    fn to_path_part(&self) -> String;
}

impl<T> PathPart for Name<T> {
    fn to_path_part(&self) -> String {
        urlencoding::encode(&self.name).into_owned()
    }
}

impl<T> Clone for Name<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> PartialEq for Name<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Name<T> {}

impl<T> PartialOrd for Name<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Name<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<T> Hash for Name<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl<T> fmt::Debug for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.name).finish()
    }
}

impl<T> fmt::Display for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> From<&str> for Name<T> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl<T> From<String> for Name<T> {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl<T> AsRef<str> for Name<T> {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl<T> Serialize for Name<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

impl<'de, T> Deserialize<'de> for Name<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
