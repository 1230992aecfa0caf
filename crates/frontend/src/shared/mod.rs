pub mod components;
pub mod config;
pub mod storage;
pub mod theme;
