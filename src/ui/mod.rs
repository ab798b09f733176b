pub mod app;
mod board;
mod dialogs;
mod hud;
mod scene;
mod selector;
mod state;
