mod app;
mod command;
mod config;

pub use app::App;
pub use command::Command;
pub use config::Config;
