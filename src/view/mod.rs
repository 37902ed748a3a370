//! TUI rendering and terminal management (impure shell)

pub mod page_indicator;
mod styles;

pub use page_indicator::{PageIndicator, CELLS_PER_SLOT};
pub use styles::{ColorConfig, DotGlyph};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::state::PageControl;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Redraw cadence while animations run (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll timeout while nothing moves.
pub const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Demo settings that are not part of [`ResolvedConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoArgs {
    /// Initial page count.
    pub pages: usize,
    /// Initially selected page.
    pub start_page: usize,
    /// Color handling.
    pub colors: ColorConfig,
}

/// Interactive demo of the page indicator.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    control: PageControl,
    key_bindings: KeyBindings,
    colors: ColorConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig, args: DemoArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, config, args))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits. Polls at [`FRAME_INTERVAL`] while the control
    /// animates and at [`IDLE_INTERVAL`] otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_frame = Instant::now();

        loop {
            let timeout = if self.control.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            self.control.tick(now.duration_since(last_frame));
            last_frame = now;
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig, args: DemoArgs) -> Self {
        let mut control = PageControl::with_config(config.dots);
        control.set_hides_for_single_page(config.hides_for_single_page);
        control.set_page_indicator_tint_color(config.page_indicator_color);
        control.set_current_page_indicator_tint_color(config.current_page_indicator_color);
        control.set_number_of_pages(args.pages);

        // The strip follows one slot per update, so walk to the start page
        let start_page = args.start_page.min(args.pages.saturating_sub(1));
        control.set_animate_duration(Duration::ZERO);
        for page in 1..=start_page {
            control.set_current_page(page);
        }
        control.set_animate_duration(config.animate_duration);

        info!(
            pages = args.pages,
            start_page = control.current_page(),
            display_count = control.display_count(),
            "Demo started"
        );

        Self {
            terminal,
            control,
            key_bindings: KeyBindings::default(),
            colors: args.colors,
        }
    }

    /// The control driven by this app.
    pub fn control(&self) -> &PageControl {
        &self.control
    }

    /// Apply a key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.handle_action(action)
    }

    /// Apply a domain action. Returns `true` when the app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        let control = &mut self.control;
        let current = control.current_page();
        let pages = control.number_of_pages();

        match action {
            KeyAction::Quit => return true,
            KeyAction::PrevPage => {
                if let Some(page) = current.checked_sub(1) {
                    control.set_current_page(page);
                }
            }
            // Out of range pages are ignored by the control
            KeyAction::NextPage => control.set_current_page(current + 1),
            KeyAction::FirstPage => control.set_current_page(0),
            KeyAction::LastPage => {
                if let Some(last) = pages.checked_sub(1) {
                    control.set_current_page(last);
                }
            }
            KeyAction::AddPage => control.set_number_of_pages(pages + 1),
            KeyAction::RemovePage => control.set_number_of_pages(pages.saturating_sub(1)),
        }

        if action.is_navigation() {
            debug!(
                ?action,
                current_page = control.current_page(),
                offset = control.offset(),
                "Page selected"
            );
        } else {
            debug!(
                ?action,
                current_page = control.current_page(),
                number_of_pages = control.number_of_pages(),
                display_count = control.display_count(),
                "Page count changed"
            );
        }
        false
    }

    /// Advance animations by `dt` without drawing.
    pub fn tick(&mut self, dt: Duration) {
        self.control.tick(dt);
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let control = &self.control;
        let colors = self.colors;
        self.terminal
            .draw(|frame| render_demo(frame, control, colors))?;
        Ok(())
    }

    /// Terminal backing this app.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Lay out the demo screen: bordered box with the strip and a status line.
fn render_demo(frame: &mut Frame<'_>, control: &PageControl, colors: ColorConfig) {
    let area = frame.area();
    let block = Block::default().borders(Borders::ALL).title(" pagedots ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [strip_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(centered_rows(inner, 3));

    frame.render_widget(PageIndicator::new(control).colors(colors), strip_area);
    frame.render_widget(
        Paragraph::new(status_line(control)).centered(),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "←/→ page  Home/End jump  +/- pages  q quit",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        help_area,
    );
}

fn status_line(control: &PageControl) -> Line<'static> {
    if control.number_of_pages() == 0 {
        return Line::from("no pages");
    }
    Line::from(format!(
        "page {} of {}",
        control.current_page() + 1,
        control.number_of_pages()
    ))
}

/// Vertically center a block of `rows` rows inside `area`.
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let height = rows.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// Run the demo until the user quits, restoring the terminal afterwards.
pub fn run(config: &ResolvedConfig, args: DemoArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
