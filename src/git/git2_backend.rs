use std::path::Path;

use git2::{Cred, FetchOptions, RemoteCallbacks, build::RepoBuilder};

use crate::error::Result;

/// Build a `FetchOptions` with SSH-agent credentials enabled.
///
/// This allows the clone to authenticate using the user's SSH agent.
/// If no SSH key is found, it falls back to default credentials.
fn fetch_opts_with_creds() -> FetchOptions<'static> {
    let mut cb = RemoteCallbacks::new();
    cb.credentials(|_url, username_from_url, _allowed| {
        Cred::ssh_key_from_agent(username_from_url.unwrap_or("git")).or_else(|_| Cred::default())
    });

    let mut fo = FetchOptions::new();
    fo.remote_callbacks(cb);
    fo
}

/// Clone the upstream repository into `dest` unless a clone is
/// already there.
///
/// The existing-clone check is `.git` presence; an existing tree is
/// used as-is, without fetching. The whole run is one-shot, so a
/// failed clone fails the invocation.
pub fn clone_upstream(url: &str, dest: &Path) -> Result<()> {
    if dest.join(".git").exists() {
        println!("upstream repository already cloned.");
        return Ok(());
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_opts_with_creds());
    builder.clone(url, dest)?;
    Ok(())
}
