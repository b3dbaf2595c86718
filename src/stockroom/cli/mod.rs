pub mod commands;
mod menu;
mod render;
mod setup;
