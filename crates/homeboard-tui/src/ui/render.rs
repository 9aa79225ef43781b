use std::f64::consts::PI;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};

use homeboard_core::board::{self, Content};
use homeboard_core::scheduler::CycleOutcome;
use homeboard_core::widgets::clock_face::{hand_tip, HOUR_HAND, MINUTE_HAND, SECOND_HAND};

use crate::app::{App, AppState};

use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(12),   // Widgets
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_widgets(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame, app);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  homeboard";
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style(app.backdrop)),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_widgets(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Analog clock
            Constraint::Length(3), // Digital time
            Constraint::Length(5), // Calendar
        ])
        .split(columns[0]);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Weather
            Constraint::Length(3), // Currency
            Constraint::Min(4),    // Tasks
        ])
        .split(columns[1]);

    render_analog_clock(frame, app, left[0]);
    render_board_element(frame, app, board::TIME, " Time ", left[1]);
    render_board_element(frame, app, board::CALENDAR, " Today ", left[2]);

    render_board_element(frame, app, board::WEATHER, " Weather ", middle[0]);
    render_board_element(frame, app, board::CURRENCY, " Exchange Rate ", middle[1]);
    render_tasks(frame, app, middle[2]);

    render_news(frame, app, columns[2]);
}

fn widget_block(app: &App, title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(styles::title_style(app.backdrop))
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.backdrop, false))
}

/// Lines for an element, or the loading/error placeholder.
fn content_lines(content: Option<Content>) -> Vec<Line<'static>> {
    match content {
        Some(Content::Lines(lines)) => lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    styles::big_text_style()
                } else {
                    styles::list_item_style()
                };
                Line::from(Span::styled(text, style))
            })
            .collect(),
        Some(Content::Error(message)) => {
            vec![Line::from(Span::styled(message, styles::error_style()))]
        }
        Some(Content::Loading) | None => {
            vec![Line::from(Span::styled("Loading...", styles::muted_style()))]
        }
    }
}

fn render_board_element(frame: &mut Frame, app: &App, id: &str, title: &str, area: Rect) {
    let lines = content_lines(app.board().content(id));
    let paragraph = Paragraph::new(lines)
        .block(widget_block(app, title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_news(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match app.board().content(board::NEWS) {
        // Headline, then its posting time
        Some(Content::Lines(lines)) => lines
            .into_iter()
            .enumerate()
            .flat_map(|(i, text)| {
                if i % 2 == 0 {
                    vec![Line::from(Span::styled(text, styles::list_item_style()))]
                } else {
                    vec![
                        Line::from(Span::styled(text, styles::muted_style())),
                        Line::from(""),
                    ]
                }
            })
            .collect(),
        other => content_lines(other),
    };

    let paragraph = Paragraph::new(lines)
        .block(widget_block(app, " Headlines "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let marker = if task.done { "[x] " } else { "[ ] " };
            let style = if task.done {
                styles::done_style()
            } else {
                styles::list_item_style()
            };
            let item = ListItem::new(Line::from(vec![
                Span::styled(marker, styles::muted_style()),
                Span::styled(task.title.clone(), style),
            ]));
            if i == app.task_selection {
                item.style(styles::selected_style())
            } else {
                item
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" Tasks ({} left) ", app.tasks.remaining()))
        .title_style(styles::title_style(app.backdrop))
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.backdrop, true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if !app.tasks.is_empty() {
        state.select(Some(app.task_selection));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_analog_clock(frame: &mut Frame, app: &App, area: Rect) {
    let hands = app.clock_hands;
    let face = styles::primary(app.backdrop);

    let canvas = Canvas::default()
        .block(widget_block(app, " Clock "))
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: face,
            });

            for n in 1..=12 {
                let (x, y) = hand_tip(f64::from(n) * PI / 6.0, 0.85);
                ctx.print(x, y, n.to_string());
            }

            for (angle, length, color) in [
                (hands.hour, HOUR_HAND, styles::ACCENT),
                (hands.minute, MINUTE_HAND, styles::ACCENT),
                (hands.second, SECOND_HAND, styles::ERROR),
            ] {
                let (x, y) = hand_tip(angle, length);
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, color));
            }
        });

    frame.render_widget(canvas, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = " [u]pdate | [q]uit ";

    let mut spans = vec![Span::raw(" ")];
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(msg.clone(), styles::muted_style()));
    } else {
        for (i, summary) in app.dashboard.feed_summaries().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", styles::muted_style()));
            }
            let outcome = summary.stats.and_then(|s| s.last_outcome);
            let style = match outcome {
                Some(CycleOutcome::Failed(_)) => styles::error_style(),
                Some(CycleOutcome::Fetched) => styles::success_style(),
                _ => styles::muted_style(),
            };
            let age = summary.age.unwrap_or_else(|| "never".to_string());
            let label = match outcome {
                Some(ref outcome) => format!("{} {} ({})", summary.key, age, outcome.label()),
                None => format!("{} {}", summary.key, age),
            };
            spans.push(Span::styled(label, style));
        }
    }

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(used)
        .saturating_sub(shortcuts.len());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(shortcuts, styles::muted_style()));

    let paragraph = Paragraph::new(Line::from(spans)).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 14, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  homeboard", styles::title_style(app.backdrop))),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Tasks", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  ↑/↓       ", styles::help_key_style()),
            Span::styled("Select task", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Space     ", styles::help_key_style()),
            Span::styled("Mark done / reopen", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  u         ", styles::help_key_style()),
            Span::styled("Refresh weather, news, rates", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  q         ", styles::help_key_style()),
            Span::styled("Quit", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.backdrop, true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(40, 6, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(app.backdrop, true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let outer = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(40, 10, outer), Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect_fixed(40, 10, small), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_content_lines_placeholders() {
        assert_eq!(content_lines(None).len(), 1);
        assert_eq!(content_lines(Some(Content::Loading))[0].to_string(), "Loading...");
        assert_eq!(
            content_lines(Some(Content::Error("boom".to_string())))[0].to_string(),
            "boom"
        );
        assert_eq!(
            content_lines(Some(Content::Lines(vec!["a".into(), "b".into()]))).len(),
            2
        );
    }
}
