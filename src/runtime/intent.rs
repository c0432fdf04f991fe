use crate::lookup::worker::LookupCompletion;
use crate::terminal::KeyEvent;

#[derive(Debug)]
pub enum Intent {
    Exit,
    Cancel,
    NextFocus,
    PrevFocus,
    ToggleLanguage,
    InputKey(KeyEvent),
    LookupDone(LookupCompletion),
    Noop,
}
