pub mod backup;
pub mod create;
pub mod del;
pub mod log;
pub mod recolor;
pub mod rename;
pub mod render;
pub mod reset;
pub mod tally;
pub mod username;
