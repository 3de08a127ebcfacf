pub mod colors;
pub mod text;
