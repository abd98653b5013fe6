//! Repository endpoints
//!
//! GitHub API docs: https://docs.github.com/en/rest/repos/repos

use crate::{
    request::{
        command, encode, paged_query, query, FetchCount, Method, QueryString, ReadOnly,
        ReadWrite, Request,
    },
    Branch, Contributor, EditRepo, Languages, Name, NewRepo, NewRepoFromTemplate, Organization,
    Owner, PathPart, Repo, RepoPublicity, Repository, Tag,
};
use serde::Serialize;

fn publicity_query(publicity: RepoPublicity) -> QueryString {
    vec![("type".to_owned(), Some(publicity.as_str().to_owned()))]
}

fn repo_paths(owner: &Name<Owner>, repo: &Name<Repo>) -> Vec<String> {
    vec!["repos".to_owned(), owner.to_path_part(), repo.to_path_part()]
}

fn repo_subresource_paths(owner: &Name<Owner>, repo: &Name<Repo>, resource: &str) -> Vec<String> {
    let mut paths = repo_paths(owner, repo);
    paths.push(resource.to_owned());
    paths
}

/// List repositories for the authenticated user
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-repositories-for-the-authenticated-user
pub fn current_user_repos(
    publicity: RepoPublicity,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Repository>> {
    paged_query(
        vec!["user".to_owned(), "repos".to_owned()],
        publicity_query(publicity),
        fetch_count,
    )
}

/// List public repositories for a user
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-repositories-for-a-user
pub fn user_repos(
    owner: &Name<Owner>,
    publicity: RepoPublicity,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Repository>> {
    paged_query(
        vec!["users".to_owned(), owner.to_path_part(), "repos".to_owned()],
        publicity_query(publicity),
        fetch_count,
    )
}

/// List repositories of an organization
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-organization-repositories
pub fn organization_repos(
    org: &Name<Organization>,
    publicity: RepoPublicity,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Repository>> {
    paged_query(
        vec!["orgs".to_owned(), org.to_path_part(), "repos".to_owned()],
        publicity_query(publicity),
        fetch_count,
    )
}

/// Get a single repository
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#get-a-repository
pub fn repository(owner: &Name<Owner>, repo: &Name<Repo>) -> Request<ReadOnly, Repository> {
    query(repo_paths(owner, repo), Vec::new())
}

/// Create a repository for the authenticated user
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#create-a-repository-for-the-authenticated-user
pub fn create_repo(new_repo: &NewRepo) -> Request<ReadWrite, Repository> {
    command(
        Method::Post,
        vec!["user".to_owned(), "repos".to_owned()],
        Some(encode(new_repo)),
    )
}

/// Create a repository in an organization
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#create-an-organization-repository
pub fn create_organization_repo(
    org: &Name<Organization>,
    new_repo: &NewRepo,
) -> Request<ReadWrite, Repository> {
    command(
        Method::Post,
        vec!["orgs".to_owned(), org.to_path_part(), "repos".to_owned()],
        Some(encode(new_repo)),
    )
}

/// Create a repository using a template
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#create-a-repository-using-a-template
pub fn create_repo_from_template(
    owner: &Name<Owner>,
    template: &Name<Repo>,
    new_repo: &NewRepoFromTemplate,
) -> Request<ReadWrite, Repository> {
    command(
        Method::Post,
        repo_subresource_paths(owner, template, "generate"),
        Some(encode(new_repo)),
    )
}

/// Fork a repository, into `org` when given and into the authenticated user's account otherwise
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/forks#create-a-fork
pub fn fork_existing_repo(
    owner: &Name<Owner>,
    repo: &Name<Repo>,
    org: Option<&Name<Organization>>,
) -> Request<ReadWrite, Repository> {
    #[derive(Debug, Serialize)]
    struct ForkRequest<'a> {
        organization: &'a Name<Organization>,
    }

    let body = match org {
        None => None,
        Some(organization) => Some(encode(&ForkRequest { organization })),
    };

    command(
        Method::Post,
        repo_subresource_paths(owner, repo, "forks"),
        body,
    )
}

/// Update a repository.
///
/// An unset name is filled in with the current one, so an edit never renames by accident.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#update-a-repository
pub fn edit_repo(
    owner: &Name<Owner>,
    repo: &Name<Repo>,
    edit: &EditRepo,
) -> Request<ReadWrite, Repository> {
    let edit = EditRepo {
        name: Some(edit.name.clone().unwrap_or_else(|| repo.as_str().to_owned())),
        ..edit.clone()
    };

    command(Method::Patch, repo_paths(owner, repo), Some(encode(&edit)))
}

/// List contributors, sorted by number of commits. Anonymous contributors are only included when
/// `include_anonymous` is set.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-repository-contributors
pub fn contributors(
    owner: &Name<Owner>,
    repo: &Name<Repo>,
    include_anonymous: bool,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Contributor>> {
    let query = if include_anonymous {
        vec![("anon".to_owned(), Some("true".to_owned()))]
    } else {
        Vec::new()
    };

    paged_query(
        repo_subresource_paths(owner, repo, "contributors"),
        query,
        fetch_count,
    )
}

/// List the languages of a repository with the number of bytes written in each
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-repository-languages
pub fn languages_for(owner: &Name<Owner>, repo: &Name<Repo>) -> Request<ReadOnly, Languages> {
    query(repo_subresource_paths(owner, repo, "languages"), Vec::new())
}

/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#list-repository-tags
pub fn tags_for(
    owner: &Name<Owner>,
    repo: &Name<Repo>,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Tag>> {
    paged_query(
        repo_subresource_paths(owner, repo, "tags"),
        Vec::new(),
        fetch_count,
    )
}

/// GitHub API docs: https://docs.github.com/en/rest/branches/branches#list-branches
pub fn branches_for(
    owner: &Name<Owner>,
    repo: &Name<Repo>,
    fetch_count: FetchCount,
) -> Request<ReadOnly, Vec<Branch>> {
    paged_query(
        repo_subresource_paths(owner, repo, "branches"),
        Vec::new(),
        fetch_count,
    )
}

/// Delete a repository. Requires admin access.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos/repos#delete-a-repository
pub fn delete_repo(owner: &Name<Owner>, repo: &Name<Repo>) -> Request<ReadWrite, ()> {
    command(Method::Delete, repo_paths(owner, repo), None)
}
