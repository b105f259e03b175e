pub mod answer;
pub mod auth;
pub mod question;
