pub mod effect;
pub mod intent;
pub mod key_bindings;
pub mod reducer;

pub use effect::Effect;
pub use intent::Intent;
pub use key_bindings::{Command, KeyBinding, KeyBindings};
pub use reducer::Reducer;
