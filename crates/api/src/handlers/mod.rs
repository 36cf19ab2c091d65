pub mod auth;
pub mod health;
pub mod house_designs;
pub mod inquiries;
pub mod owner_info;
pub mod plots;
pub mod settings;
pub mod upload;
