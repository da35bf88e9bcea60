//! Identity directory capability trait

use async_trait::async_trait;

use crate::domain::AuditError;

#[cfg(test)]
use mockall::automock;

/// A user record as known to the directory. `login` carries the directory's
/// canonical casing, which may differ from the login that was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub login: String,
}

/// External identity directory (GitHub in production).
///
/// Implementations own pagination and transport; the audit core only sees a
/// complete member list and per-login lookups. Transport failures surface as
/// `AuditError::Directory` and are never retried here.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Look up a user by login. `None` means no such login exists.
    async fn lookup_user(&self, login: &str) -> Result<Option<DirectoryUser>, AuditError>;

    /// List every member of the organization, fully paginated.
    async fn list_org_members(&self, org: &str) -> Result<Vec<String>, AuditError>;
}
