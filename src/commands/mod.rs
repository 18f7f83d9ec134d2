pub mod password;
pub mod phone;
pub mod upload;
