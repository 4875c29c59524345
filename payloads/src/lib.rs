pub mod json_client;
pub mod responses;

pub use json_client::{FetchError, JsonClient};
pub use responses::GithubUser;
