//! Infrastructure layer - External service implementations

pub mod directory;
pub mod http_client;
pub mod logging;

pub use directory::GithubDirectory;
pub use http_client::{HttpClient, HttpClientTrait};
