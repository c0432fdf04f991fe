use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub prompt: Style,
    pub hint: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub suggestion: Style,
    pub suggestion_active: Style,
    pub exact_mark: Style,
    pub plant_name: Style,
    pub detail: Style,
    pub status_ok: Style,
    pub status_warning: Style,
    pub status_due: Style,
    pub status_muted: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_color(Color::Cyan).with_bold(),
            prompt: Style::new().with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            placeholder: Style::new().with_color(Color::DarkGrey).with_dim(),
            focused: Style::new().with_bold(),
            suggestion: Style::new(),
            suggestion_active: Style::new().with_color(Color::Cyan).with_bold(),
            exact_mark: Style::new().with_color(Color::Green),
            plant_name: Style::new().with_bold(),
            detail: Style::new().with_color(Color::DarkGrey),
            status_ok: Style::new().with_color(Color::Green),
            status_warning: Style::new().with_color(Color::Yellow),
            status_due: Style::new().with_color(Color::Red).with_bold(),
            status_muted: Style::new().with_color(Color::DarkGrey),
        }
    }
}
