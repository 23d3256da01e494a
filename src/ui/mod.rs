pub mod colors;
pub mod layout;
