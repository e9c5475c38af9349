// Badged Tabs Demo
// Three sections with badges; keys and mouse drive the imperative badge API

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing_subscriber::EnvFilter;

use badged_tabs::managers::{load_config, parse_config, StripConfigYaml};
use badged_tabs::{BadgedTabStrip, Font, Icon, TruncateAt};

//--------------------------------------------------------<<

const LOG_FILE: &str = "badged-tabs-demo.log";

const DEFAULT_CONFIG: &str = r##"
badge_text_color: white
badge_selected_background_color: "#E53935"
tab_truncate_at: end
theme:
  primary: cyan
  primary_dark: dark_cyan
  badge_background:
    selected: red
    unselected: gray
tabs:
  - title: SECTIONS 1
  - title: SECT 2
  - title: SECT 3
"##;

const HELP: &str = "←/→ select  + add  x clear  f bold/italic  t truncate  i icon  q quit";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    let config = load_demo_config(std::env::args().nth(1).map(PathBuf::from))?;
    let mut strip = BadgedTabStrip::from_config(&config);

    let mut counter: u32 = 1;
    strip.set_badge_text(0, Some(counter.to_string().as_str()));
    strip.set_badge_text(2, Some("13213131"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut strip, &mut counter);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("badged_tabs=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Config from the given path, then src/config.yaml, then the built-in defaults
fn load_demo_config(path: Option<PathBuf>) -> Result<StripConfigYaml> {
    let path = path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });

    match load_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Using default configuration");
            parse_config(DEFAULT_CONFIG)
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    strip: &mut BadgedTabStrip,
    counter: &mut u32,
) -> Result<()> {
    // Applied attributes are never cleared by a rebuild, so cycle through set values only
    let fonts = [Font::bold(), Font::italic()];
    let truncations = [TruncateAt::End, TruncateAt::Middle, TruncateAt::Start];
    let mut font = fonts.len() - 1;
    let mut truncation = 0;

    loop {
        terminal.draw(|f| draw(f, strip))?;

        // Poll faster while a badge transition is running
        let timeout = if strip.is_animating() { 16 } else { 50 };
        if !event::poll(Duration::from_millis(timeout))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Left => {
                    strip.select_previous();
                }
                KeyCode::Right => {
                    strip.select_next();
                }
                KeyCode::Char('+') => {
                    *counter += 1;
                    strip.set_badge_text(0, Some(counter.to_string().as_str()));
                }
                KeyCode::Char('x') => strip.set_badge_text(0, None),
                KeyCode::Char('f') => {
                    font = (font + 1) % fonts.len();
                    strip.set_tab_font(Some(fonts[font]));
                }
                KeyCode::Char('t') => {
                    truncation = (truncation + 1) % truncations.len();
                    strip.set_tab_truncate_at(Some(truncations[truncation]));
                }
                KeyCode::Char('i') => strip.set_icon(1, Icon::new("✉")),
                _ => {}
            },
            Event::Mouse(mouse_event) => {
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Some(index) = strip.tab_at(mouse_event.column, mouse_event.row) {
                        strip.select_tab(index);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, strip: &mut BadgedTabStrip) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(f.area());

    strip.render(f, chunks[0]);

    let section = strip.selected_index().map(|i| i + 1).unwrap_or(0);
    let body = Paragraph::new(Line::from(format!("Hello World from section: {section}")))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let help_area = Rect { height: 1, ..chunks[2] };
    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::Yellow)),
        help_area,
    );
}
