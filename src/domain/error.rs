use thiserror::Error;

/// Audit failures. Exactly one is reported per run, the first encountered in
/// deterministic iteration order.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuditError {
    #[error("Malformed governance config: {message}")]
    MalformedConfig { message: String },

    #[error("Team '{team}' references unknown team '{reference}'")]
    UnknownTeam { team: String, reference: String },

    #[error("Team '{team}' references unknown parent team '{parent}'")]
    UnknownParent { team: String, parent: String },

    #[error("Cyclic team reference detected at '{team}'")]
    CyclicReference { team: String },

    #[error("Team '{team}' has no maintainers")]
    MissingMaintainer { team: String },

    #[error("Team '{team}' lists {logins:?} as both members and maintainers")]
    DuplicateMaintainerMember { team: String, logins: Vec<String> },

    #[error("Member '{login}' of team '{child}' is not a member of parent team '{parent}'")]
    ParentContainment {
        child: String,
        parent: String,
        login: String,
    },

    #[error("No user with login '{login}' exists in the identity directory")]
    UnknownIdentity { login: String },

    #[error("Configured login '{configured}' does not match directory login '{canonical}'")]
    IdentityCaseMismatch {
        configured: String,
        canonical: String,
    },

    #[error("Governance member '{login}' is not a member of organization '{organization}'")]
    NotOrgMember { login: String, organization: String },

    #[error("Identity directory error: {message}")]
    Directory { message: String },
}

impl AuditError {
    pub fn malformed_config(message: impl Into<String>) -> Self {
        Self::MalformedConfig {
            message: message.into(),
        }
    }

    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }
}
