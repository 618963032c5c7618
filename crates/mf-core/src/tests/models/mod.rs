mod api_error_body;
mod movie;
mod user;
mod user_update;
