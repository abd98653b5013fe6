use super::{DateTime, Name, NodeId, Oid, Owner, User};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

#[derive(Clone, Debug, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub node_id: NodeId,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub owner: User,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    pub forks_url: String,
    pub contributors_url: String,
    pub languages_url: String,
    pub branches_url: String,
    pub tags_url: String,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
    pub pushed_at: Option<DateTime>,
    pub git_url: Option<String>,
    pub ssh_url: Option<String>,
    pub clone_url: Option<String>,
    pub svn_url: Option<String>,
    pub mirror_url: Option<String>,
    pub homepage: Option<String>,
    pub size: Option<u64>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub language: Option<String>,
    pub has_issues: Option<bool>,
    pub has_projects: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_pages: Option<bool>,
    pub has_downloads: Option<bool>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub is_template: bool,
    pub default_branch: Option<String>,
    pub permissions: Option<RepoPermissions>,
    // Only populated by the single repository endpoint
    pub parent: Option<Box<Repository>>,
    pub source: Option<Box<Repository>>,
    pub template_repository: Option<Box<Repository>>,
}

/// The authenticated user's permissions on a repository
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RepoPermissions {
    pub admin: bool,
    pub push: bool,
    pub pull: bool,
}

/// Filter applied when listing repositories, sent as the `type` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoPublicity {
    All,
    Owner,
    Member,
    Public,
    Private,
}

impl RepoPublicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoPublicity::All => "all",
            RepoPublicity::Owner => "owner",
            RepoPublicity::Member => "member",
            RepoPublicity::Public => "public",
            RepoPublicity::Private => "private",
        }
    }
}

impl Default for RepoPublicity {
    fn default() -> Self {
        RepoPublicity::All
    }
}

impl fmt::Display for RepoPublicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for creating a repository
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#create-a-repository-for-the-authenticated-user
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewRepo {
    /// The name of the repository
    pub name: String,

    /// A short description of the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A URL with more information about the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// Either true to create a private repository or false to create a public one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,

    /// Pass true to create an initial commit with an empty README
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,

    /// Desired language or platform .gitignore template to apply, e.g. "Haskell"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,

    /// Open source license template keyword, e.g. "mit"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
}

impl NewRepo {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Payload for updating a repository. Fields left as `None` are not changed.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#update-a-repository
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EditRepo {
    /// The new name of the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,

    /// Updates the default branch for this repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,

    /// Archiving a repository makes it read-only; it can't be unarchived through the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Payload for generating a new repository from a template repository
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#create-a-repository-using-a-template
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRepoFromTemplate {
    /// The organization or person who will own the new repository. Defaults to the
    /// authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Name<Owner>>,

    /// The name of the new repository
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl NewRepoFromTemplate {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            owner: None,
            name: name.into(),
            description: None,
            private: None,
        }
    }
}

/// Languages used in a repository, mapped to the number of bytes of code written in each
pub type Languages = HashMap<String, u64>;

#[derive(Clone, Debug, Deserialize)]
pub struct CommitRef {
    pub sha: Oid,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tag {
    pub name: String,
    pub zipball_url: String,
    pub tarball_url: String,
    pub commit: CommitRef,
    pub node_id: Option<NodeId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitRef,
    #[serde(default)]
    pub protected: bool,
}

#[cfg(test)]
mod test {
    use super::{Branch, EditRepo, Languages, NewRepo, Repository, Tag};

    #[test]
    fn repo() {
        const REPO_JSON: &str = include_str!("../test-input/repo.json");
        let repo: Repository = serde_json::from_str(REPO_JSON).unwrap();

        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(repo.owner.login, "octocat");
        assert_eq!(repo.default_branch.as_deref(), Some("master"));
        assert!(repo.permissions.unwrap().admin);
        assert!(repo.parent.is_none());
    }

    #[test]
    fn unset_fields_are_omitted() {
        let new_repo = NewRepo {
            private: Some(true),
            ..NewRepo::new("Hello-World")
        };
        assert_eq!(
            serde_json::to_value(&new_repo).unwrap(),
            serde_json::json!({ "name": "Hello-World", "private": true })
        );

        assert_eq!(
            serde_json::to_string(&EditRepo::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn languages_tags_and_branches() {
        let languages: Languages =
            serde_json::from_str(r#"{ "C": 78769, "Python": 7769 }"#).unwrap();
        assert_eq!(languages["C"], 78769);

        let tags: Vec<Tag> = serde_json::from_str(
            r#"[{
                "name": "v0.1",
                "commit": {
                    "sha": "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc",
                    "url": "https://api.github.com/repos/octocat/Hello-World/commits/c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"
                },
                "zipball_url": "https://github.com/octocat/Hello-World/zipball/v0.1",
                "tarball_url": "https://github.com/octocat/Hello-World/tarball/v0.1",
                "node_id": "MDQ6VXNlcjE="
            }]"#,
        )
        .unwrap();
        assert_eq!(tags[0].name, "v0.1");
        assert_eq!(
            tags[0].commit.sha.as_str(),
            "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"
        );

        let branches: Vec<Branch> = serde_json::from_str(
            r#"[{
                "name": "master",
                "commit": {
                    "sha": "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc",
                    "url": "https://api.github.com/repos/octocat/Hello-World/commits/c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"
                },
                "protected": true
            }]"#,
        )
        .unwrap();
        assert!(branches[0].protected);
    }
}
