pub mod dto;
pub mod passwords;
