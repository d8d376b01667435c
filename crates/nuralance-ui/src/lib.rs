pub mod markdown;
pub mod panels;
pub mod state;
pub mod theme;
