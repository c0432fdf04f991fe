use anyhow::Context;
use plantly::app::App;
use plantly::config::Config;
use plantly::terminal::{Terminal, TerminalEvent};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config = Config::load()?;
    let mut app = App::new(&config)?;

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &mut app);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(terminal: &mut Terminal, app: &mut App) -> anyhow::Result<()> {
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    if app.handle_key(key_event) {
                        render_requested = true;
                    }
                }
                TerminalEvent::Resize { .. } => {
                    terminal.refresh_size()?;
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    app.pipeline.move_to_end(terminal)?;
    terminal.clear_from_cursor_down()?;

    Ok(())
}

/// Logging goes to a file, never to the terminal the UI draws on. Enabled
/// only when `PLANTLY_LOG` names a destination.
fn init_tracing() -> anyhow::Result<()> {
    let Some(path) = std::env::var_os("PLANTLY_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plantly=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
