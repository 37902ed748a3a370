//! Snapshot tests for the page indicator widget
//!
//! Uses insta + ratatui TestBackend to verify rendering output doesn't regress.
//! Each strip is drawn inside a bordered box so leading and trailing blanks
//! stay visible in the snapshot.

use pagedots::state::PageControl;
use pagedots::view::{ColorConfig, PageIndicator};
use ratatui::backend::TestBackend;
use ratatui::widgets::{Block, Borders};
use ratatui::Terminal;
use std::time::Duration;

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Create a test terminal with the given dimensions.
fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Draw `control` in a 14 column box and return the text.
fn render(control: &PageControl) -> String {
    let mut terminal = create_terminal(16, 3);
    terminal
        .draw(|frame| {
            let block = Block::default().borders(Borders::ALL);
            let inner = block.inner(frame.area());
            frame.render_widget(block, frame.area());
            frame.render_widget(
                PageIndicator::new(control).colors(ColorConfig::disabled()),
                inner,
            );
        })
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn control_at(pages: usize, page: usize) -> PageControl {
    let mut control = PageControl::new();
    control.set_number_of_pages(pages);
    while control.current_page() < page {
        let next = control.current_page() + 1;
        control.set_current_page(next);
        control.tick(Duration::from_secs(1));
    }
    control
}

// ===== Snapshots =====

#[test]
fn snapshot_fitting_pages() {
    let output = render(&control_at(3, 1));
    insta::assert_snapshot!(output, @r"
┌──────────────┐
│    ● ● ●     │
└──────────────┘
");
}

#[test]
fn snapshot_first_page() {
    let output = render(&control_at(20, 0));
    insta::assert_snapshot!(output, @r"
┌──────────────┐
│    ● ● ● • · │
└──────────────┘
");
}

#[test]
fn snapshot_interior_page() {
    let output = render(&control_at(20, 10));
    insta::assert_snapshot!(output, @r"
┌──────────────┐
│· • ● ● ● • · │
└──────────────┘
");
}

#[test]
fn snapshot_last_page() {
    let output = render(&control_at(20, 19));
    insta::assert_snapshot!(output, @r"
┌──────────────┐
│· • ● ● ●     │
└──────────────┘
");
}

#[test]
fn snapshot_hidden_single_page() {
    let mut control = control_at(1, 0);
    control.set_hides_for_single_page(true);
    let output = render(&control);
    insta::assert_snapshot!(output, @r"
┌──────────────┐
│              │
└──────────────┘
");
}
