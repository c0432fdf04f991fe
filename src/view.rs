use crate::domain::plant::Plant;
use crate::domain::schedule::{self, Status};
use crate::i18n::text;
use crate::search;
use crate::state::app_state::{AppState, Focus};
use crate::ui::frame::{Frame, Line, RenderLine};
use crate::ui::span::Span;
use crate::ui::spinner::Spinner;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

const QUERY_PROMPT: &str = "❯ ";
const ACTIVE_MARK: &str = "➤ ";
const EXACT_MARK: &str = " ✓";
const PLANT_MARK: &str = "🌿 ";

/// Builds one full frame from the current state. Pure with respect to the
/// state; `now` comes from the caller so due-ness is computed fresh.
pub fn build(state: &AppState, theme: &Theme, spinner: &Spinner, now: DateTime<Utc>) -> Frame {
    let strings = text(state.language);
    let mut frame = Frame::new();

    let mut title = Line::new();
    title.push(Span::styled(strings.title, theme.title));
    frame.push_line(title);
    frame.push_blank();

    frame.push(query_line(state, theme));

    if state.focus == Focus::Query {
        for line in suggestion_lines(state, theme) {
            frame.push_line(line);
        }
    }

    if state.pending_add.is_some() {
        let mut line = Line::new();
        line.push(Span::new("  "));
        line.push(spinner.span());
        line.push(Span::styled(format!(" {}", strings.adding), theme.hint));
        frame.push_line(line);
    }

    frame.push_blank();

    if state.plants.is_empty() {
        let mut line = Line::new();
        line.push(Span::styled(strings.no_plants, theme.hint));
        frame.push_line(line);
    } else {
        for (index, plant) in state.plants.iter().enumerate() {
            let selected = state.focus == Focus::Plants && index == state.list_cursor;
            for line in plant_lines(state, plant, selected, theme, now) {
                frame.push_line(line);
            }
        }
    }

    frame.push_blank();
    frame.push_line(footer_line(state, theme));
    frame
}

fn query_line(state: &AppState, theme: &Theme) -> RenderLine {
    let prompt_style = if state.focus == Focus::Query {
        theme.focused
    } else {
        theme.prompt
    };

    let mut line = Line::new();
    line.push(Span::styled(QUERY_PROMPT, prompt_style));
    if state.query.is_empty() {
        line.push(Span::styled(state.query.placeholder(), theme.placeholder));
    } else {
        line.push(Span::new(state.query.value()));
    }

    let rendered = RenderLine::new(line);
    if state.focus == Focus::Query {
        rendered.with_cursor(QUERY_PROMPT.width() + state.query.cursor_offset())
    } else {
        rendered
    }
}

fn suggestion_lines(state: &AppState, theme: &Theme) -> Vec<Line> {
    let suggestions = state.suggestions();
    if !state.suggest.is_open() || suggestions.is_empty() {
        return Vec::new();
    }

    let selected = state.suggest.selected();
    suggestions
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let active = selected == Some(index);
            let mut line = Line::new();
            if active {
                line.push(Span::styled(ACTIVE_MARK, theme.suggestion_active));
                line.push(Span::styled(*name, theme.suggestion_active));
            } else {
                line.push(Span::new("  "));
                line.push(Span::styled(*name, theme.suggestion));
            }
            if search::is_exact_match(state.query.value(), name) {
                line.push(Span::styled(EXACT_MARK, theme.exact_mark));
            }
            line
        })
        .collect()
}

fn plant_lines(
    state: &AppState,
    plant: &Plant,
    selected: bool,
    theme: &Theme,
    now: DateTime<Utc>,
) -> Vec<Line> {
    let strings = text(state.language);
    let mut lines = Vec::new();

    let mut name_line = Line::new();
    if selected {
        name_line.push(Span::styled(QUERY_PROMPT, theme.focused));
    } else {
        name_line.push(Span::new("  "));
    }
    name_line.push(Span::new(PLANT_MARK));
    name_line.push(Span::styled(&plant.name, theme.plant_name));
    lines.push(name_line);

    let watered = match plant.last_watered {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => strings.never.to_string(),
    };
    let mut watered_line = Line::new();
    watered_line.push(Span::styled(
        format!("     {} {watered}", strings.last_watered),
        theme.detail,
    ));
    lines.push(watered_line);

    let (status_text, status_style) = status_label(plant, state, theme, now);
    let mut status_line = Line::new();
    status_line.push(Span::styled(format!("     {status_text}"), status_style));
    lines.push(status_line);

    if let Some(info) = &plant.watering {
        if !info.description.is_empty() {
            let mut description_line = Line::new();
            description_line.push(Span::styled(format!("     {}", info.description), theme.detail));
            lines.push(description_line);
        }
    }

    lines
}

fn status_label(
    plant: &Plant,
    state: &AppState,
    theme: &Theme,
    now: DateTime<Utc>,
) -> (String, Style) {
    let strings = text(state.language);
    match schedule::status(plant, now) {
        Status::NeverWatered => (strings.never_watered.to_string(), theme.status_muted),
        Status::NoSchedule => (strings.no_schedule.to_string(), theme.status_muted),
        Status::NeedsWatering => (strings.needs_watering.to_string(), theme.status_due),
        Status::Warning(days) => (strings.days_until_watering(days), theme.status_warning),
        Status::Ok(days) => (strings.days_until_watering(days), theme.status_ok),
    }
}

fn footer_line(state: &AppState, theme: &Theme) -> Line {
    let strings = text(state.language);
    let hints = [
        strings.water_key_hint,
        strings.remove_key_hint,
        strings.language_key_hint,
        strings.quit_key_hint,
    ];
    let mut line = Line::new();
    line.push(Span::styled(hints.join("  "), theme.hint));
    line
}
