use super::NodeId;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum UserType {
    Bot,
    Organization,
    User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub node_id: NodeId,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub repos_url: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub site_admin: bool,
}

/// A contributor to a repository.
///
/// Commits whose author email isn't linked to an account only show up when anonymous
/// contributors are requested, and carry just the name and email from the commits.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Contributor {
    Known(KnownContributor),
    Anonymous(AnonymousContributor),
}

#[derive(Clone, Debug, Deserialize)]
pub struct KnownContributor {
    #[serde(flatten)]
    pub user: User,
    pub contributions: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnonymousContributor {
    pub name: String,
    pub email: Option<String>,
    pub contributions: u64,
}

impl Contributor {
    pub fn contributions(&self) -> u64 {
        match self {
            Contributor::Known(known) => known.contributions,
            Contributor::Anonymous(anonymous) => anonymous.contributions,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Contributor::Anonymous(_))
    }
}
