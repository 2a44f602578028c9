pub mod message;
pub mod recipient;
