//! Identity directory domain module

mod provider;

pub use provider::{DirectoryUser, IdentityDirectory};

#[cfg(test)]
pub use provider::MockIdentityDirectory;
