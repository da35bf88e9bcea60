//! Identity directory implementations

mod github;

pub use github::GithubDirectory;
