pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::api_error_body::{ApiErrorBody, ApiErrorEntry};
pub use models::credentials::Credentials;
pub use models::director::Director;
pub use models::genre::Genre;
pub use models::login_response::LoginResponse;
pub use models::movie::Movie;
pub use models::user::User;
pub use models::user_details::UserDetails;
pub use models::user_update::UserUpdate;

/// The one message shown for every failure that carries no structured API error.
pub const GENERIC_ERROR_MESSAGE: &str = "Something bad happened; please try again later.";
