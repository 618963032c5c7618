pub mod api_error_body;
pub mod credentials;
pub mod director;
pub mod genre;
pub mod login_response;
pub mod movie;
pub mod user;
pub mod user_details;
pub mod user_update;
