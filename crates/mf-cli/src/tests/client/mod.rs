mod client;
mod error;
mod response_data;
