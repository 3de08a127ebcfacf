pub mod group;
pub mod palette;
