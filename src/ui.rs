//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Each route has one draw function;
//! the data-backed screens share the loading and error panels.
//!
//! ## For contributors
//!
//! * The layout is a three-row split: a title bar, the active screen, and a
//!   one-line status bar.
//! * Colours and styles are defined inline.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{resource_rows, App, ResourceRow};
use crate::model::{Course, Resource};
use crate::nav::Route;
use crate::state::ScreenState;

const MAP_PLACEHOLDER: &str = "This is the Campus map screen (Feature in development)";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [title_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_title(app.route(), frame, title_area);

    match app.route() {
        Route::Home => draw_home(app, frame, main_area),
        Route::Schedule => {
            let (state, list_state) = app.schedule.render_parts();
            draw_screen(state, list_state, frame, main_area, schedule_list);
        }
        Route::Resources => {
            let (state, list_state) = app.resources.render_parts();
            draw_screen(state, list_state, frame, main_area, resource_list);
        }
        Route::Map => draw_map(frame, main_area),
    }

    draw_status_bar(app, frame, status_area);
}

fn draw_title(route: Route, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        route.title(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_home(app: &mut App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Route::MENU
        .iter()
        .map(|route| ListItem::new(Line::from(route.menu_label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(highlight())
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.menu_state);
}

/// Render a data-backed screen: a list on success, otherwise a panel.
fn draw_screen<T>(
    state: &ScreenState<T>,
    list_state: &mut ListState,
    frame: &mut Frame,
    area: Rect,
    build: fn(&[T]) -> List<'static>,
) {
    match state {
        ScreenState::Loading => {
            let panel = Paragraph::new("Loading…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(panel, area);
        }
        ScreenState::Error(message) => {
            let text = Text::from(vec![
                Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(Span::styled(
                    "press r to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ]);
            let panel = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(panel, area);
        }
        ScreenState::Success(items) if items.is_empty() => {
            let panel = Paragraph::new("Nothing here yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(panel, area);
        }
        ScreenState::Success(items) => {
            frame.render_stateful_widget(build(items), area, list_state);
        }
    }
}

fn schedule_list(courses: &[Course]) -> List<'static> {
    let items: Vec<ListItem> = courses
        .iter()
        .map(|course| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    course.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Dr. {}", course.doctor_name),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(format!("Time: {}", course.time)),
                Line::from(format!("Location: {}", course.location)),
                Line::from(""),
            ]))
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(highlight())
}

fn resource_list(resources: &[Resource]) -> List<'static> {
    let items: Vec<ListItem> = resource_rows(resources)
        .into_iter()
        .map(|row| match row {
            ResourceRow::Header(course) => ListItem::new(Line::from(Span::styled(
                course,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))),
            ResourceRow::Entry(resource) => ListItem::new(Line::from(vec![
                Span::raw("  • "),
                Span::styled(resource.resource_name, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(resource.url, Style::default().fg(Color::DarkGray)),
            ])),
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(highlight())
        .highlight_symbol("▸ ")
}

fn draw_map(frame: &mut Frame, area: Rect) {
    let panel = Paragraph::new(MAP_PLACEHOLDER)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn highlight() -> Style {
    Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray)
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let updated = match app.route() {
        Route::Schedule => app.schedule.last_updated,
        Route::Resources => app.resources.last_updated,
        Route::Home | Route::Map => None,
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(app.route().name(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(app.source.as_str(), Style::default().fg(Color::Green)),
    ];
    if let Some(at) = updated {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::raw(match app.route() {
        Route::Home => "  q: quit  ↑/↓: move  Enter: open",
        Route::Resources => "  q: quit  Esc: back  ↑/↓: scroll  Enter: open link  r: retry",
        Route::Schedule | Route::Map => "  q: quit  Esc: back  ↑/↓: scroll  r: retry",
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
