pub mod app;
pub mod config;
pub mod domain;
pub mod i18n;
pub mod input;
pub mod lookup;
pub mod runtime;
pub mod search;
pub mod state;
pub mod storage;
pub mod terminal;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
pub use domain::plant;
pub use domain::schedule;
pub use i18n::Language;
pub use state::app_state;
pub use storage::{Snapshot, Store};
pub use terminal::input_event;
pub use terminal::terminal_event;
pub use ui::frame;
pub use ui::pipeline;
pub use ui::span;
pub use ui::style;
pub use ui::theme;
