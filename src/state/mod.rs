pub mod app_state;
pub mod suggest;

pub use app_state::{AppState, Focus};
pub use suggest::SuggestCursor;
