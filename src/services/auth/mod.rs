pub mod api_key;

pub use api_key::{AuthError, get_api_key};
