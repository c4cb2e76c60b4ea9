pub mod commands;
pub mod files;
pub mod misc;
pub mod waifu;
