use crate::{
    client::{Client, Response, Result},
    endpoints::repos,
    request::FetchCount,
    Branch, Contributor, EditRepo, Languages, Name, NewRepo, NewRepoFromTemplate, Organization,
    Owner, Repo, RepoPublicity, Repository, Tag,
};

/// `RepositoryClient` handles communication with the Repository related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/en/rest/repos
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List repositories the authenticated user has access to
    pub async fn list_for_authenticated_user(
        &self,
        publicity: RepoPublicity,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Repository>>> {
        let request = repos::current_user_repos(publicity, fetch_count);
        self.inner.execute_paged(&request).await
    }

    /// List repositories of a user
    pub async fn list_for_user(
        &self,
        owner: &Name<Owner>,
        publicity: RepoPublicity,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Repository>>> {
        let request = repos::user_repos(owner, publicity, fetch_count);
        self.inner.execute_paged(&request).await
    }

    /// List repositories of an organization
    pub async fn list_for_org(
        &self,
        org: &Name<Organization>,
        publicity: RepoPublicity,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Repository>>> {
        let request = repos::organization_repos(org, publicity, fetch_count);
        self.inner.execute_paged(&request).await
    }

    pub async fn get(&self, owner: &Name<Owner>, repo: &Name<Repo>) -> Result<Response<Repository>> {
        self.inner.execute(&repos::repository(owner, repo)).await
    }

    /// Create a repository owned by the authenticated user
    pub async fn create(&self, new_repo: &NewRepo) -> Result<Response<Repository>> {
        self.inner.execute(&repos::create_repo(new_repo)).await
    }

    pub async fn create_for_org(
        &self,
        org: &Name<Organization>,
        new_repo: &NewRepo,
    ) -> Result<Response<Repository>> {
        let request = repos::create_organization_repo(org, new_repo);
        self.inner.execute(&request).await
    }

    pub async fn create_from_template(
        &self,
        owner: &Name<Owner>,
        template: &Name<Repo>,
        new_repo: &NewRepoFromTemplate,
    ) -> Result<Response<Repository>> {
        let request = repos::create_repo_from_template(owner, template, new_repo);
        self.inner.execute(&request).await
    }

    /// Fork a repository. Forking happens asynchronously on GitHub's side, so the returned
    /// repository may not have any content yet.
    pub async fn fork(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
        org: Option<&Name<Organization>>,
    ) -> Result<Response<Repository>> {
        let request = repos::fork_existing_repo(owner, repo, org);
        self.inner.execute(&request).await
    }

    pub async fn edit(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
        edit: &EditRepo,
    ) -> Result<Response<Repository>> {
        self.inner.execute(&repos::edit_repo(owner, repo, edit)).await
    }

    pub async fn list_contributors(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
        include_anonymous: bool,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Contributor>>> {
        let request = repos::contributors(owner, repo, include_anonymous, fetch_count);
        self.inner.execute_paged(&request).await
    }

    pub async fn list_languages(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
    ) -> Result<Response<Languages>> {
        self.inner.execute(&repos::languages_for(owner, repo)).await
    }

    pub async fn list_tags(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Tag>>> {
        let request = repos::tags_for(owner, repo, fetch_count);
        self.inner.execute_paged(&request).await
    }

    pub async fn list_branches(
        &self,
        owner: &Name<Owner>,
        repo: &Name<Repo>,
        fetch_count: FetchCount,
    ) -> Result<Response<Vec<Branch>>> {
        let request = repos::branches_for(owner, repo, fetch_count);
        self.inner.execute_paged(&request).await
    }

    /// Delete a repository. Requires admin access to it.
    pub async fn delete(&self, owner: &Name<Owner>, repo: &Name<Repo>) -> Result<Response<()>> {
        self.inner.execute(&repos::delete_repo(owner, repo)).await
    }
}
