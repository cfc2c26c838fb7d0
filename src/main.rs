use std::env;
use std::io;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wide_grid::config::Config;
use wide_grid::data::{load_sample, RowSample};
use wide_grid::grid::controller::ScrollWindowController;
use wide_grid::logging;
use wide_grid::throttle::ScrollThrottle;
use wide_grid::ui::grid_view::{render_grid, GridRenderContext};

fn main() -> Result<()> {
    logging::init_tracing(logging::default_log_path())?;
    let config = Config::load().unwrap_or_default();

    let source = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: wide-grid <csv-path-or-url>"))?;

    // Load and parse up front; a failure here surfaces before any grid
    // state exists.
    let sample = load_sample(&source, &config.source)?;

    run_viewer(sample, &config)
}

fn run_viewer(sample: RowSample, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, sample, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    sample: RowSample,
    config: &Config,
) -> Result<()> {
    // One terminal cell stands in for one character's worth of pixels, so
    // the on-screen viewport width in pixels follows the terminal width.
    let px_per_cell = config.grid.char_to_pixel_factor.max(1.0);
    let size = terminal.size()?;
    let viewport_width_px = f64::from(size.width.saturating_sub(2)) * px_per_cell;

    let mut controller = ScrollWindowController::new(sample, &config.grid, viewport_width_px);
    let mut throttle = ScrollThrottle::new(config.grid.scroll_event_throttle_ms);
    let mut scroll_left: f64 = 0.0;
    // Latest unprocessed scroll sample; flushed when the throttle opens.
    let mut pending: Option<f64> = None;
    let scroll_step = config.grid.min_column_width_px / 2.0;

    loop {
        terminal.draw(|f| {
            let ctx = GridRenderContext::new(&controller, scroll_left, px_per_cell);
            let area = f.area();
            render_grid(f, area, &ctx);
        })?;

        if event::poll(Duration::from_millis(25))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let delta = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => -scroll_step,
                        KeyCode::Right | KeyCode::Char('l') => scroll_step,
                        KeyCode::PageUp => -viewport_width_px,
                        KeyCode::PageDown => viewport_width_px,
                        KeyCode::Home => -scroll_left,
                        _ => 0.0,
                    };
                    if delta != 0.0 {
                        scroll_left = (scroll_left + delta).max(0.0);
                        pending = Some(scroll_left);
                    }
                }
                _ => {}
            }
        }

        // Rate-limit the pipeline: every raw sample lands here, but the
        // controller only sees the ones the throttle admits.
        if let Some(position) = pending {
            if throttle.admit() {
                controller.on_scroll(position);
                pending = None;
            }
        }
    }

    Ok(())
}
