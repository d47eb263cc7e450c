//! Terminal rendering. Everything drawn here is a function of `RenderState`
//! plus the spinner tick.

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION, SUBTITLE, TITLE};
use crate::messages::RenderState;
use crate::models::{Draw, RequestState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INDIGO: Color = Color::Rgb(99, 102, 241);
const PURPLE: Color = Color::Rgb(147, 51, 234);
const DEEP_PURPLE: Color = Color::Rgb(107, 33, 168);

/// Which group a token belongs to
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenKind {
    Main,
    Star,
}

impl TokenKind {
    pub fn style(&self) -> Style {
        match self {
            TokenKind::Main => Style::default().fg(PURPLE).bg(Color::White).bold(),
            TokenKind::Star => Style::default().fg(Color::White).bg(DEEP_PURPLE).bold(),
        }
    }
}

/// One styled token per number, in input order
pub fn number_tokens(numbers: &[i64], kind: TokenKind) -> Vec<Span<'static>> {
    numbers
        .iter()
        .map(|n| Span::styled(format!(" {:>2} ", n), kind.style()))
        .collect()
}

/// Lay tokens out on one line with a gap between them
pub fn token_row(tokens: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = Vec::with_capacity(tokens.len() * 2);
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(token);
    }
    Line::from(spans).centered()
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(INDIGO))
        .title(format!(" {} ", APP_NAME));
    let inner = card.inner(main_chunks[0]);
    f.render_widget(card, main_chunks[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Min(7),    // Numbers / spinner / error
            Constraint::Length(3), // Button
        ])
        .split(inner);

    draw_header(f, chunks[0]);
    draw_content(f, state, chunks[1], tick);
    draw_button(f, state, chunks[2]);
    draw_status_bar(f, state, main_chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Style::default().fg(Color::White).bold())).centered(),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray).italic())).centered(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_content(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    let lines = match &state.request {
        RequestState::Idle => vec![Line::from(Span::styled(
            "Press Enter to generate numbers",
            Style::default().fg(Color::DarkGray),
        ))
        .centered()],
        RequestState::Loading => vec![
            Line::default(),
            Line::from(Span::styled(
                spinner_frame(tick),
                Style::default().fg(Color::LightMagenta).bold(),
            ))
            .centered(),
        ],
        RequestState::Failed(message) => vec![
            Line::default(),
            Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::LightRed).bold(),
            ))
            .centered(),
        ],
        RequestState::Success(draw) => numbers_lines(draw),
    };

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(content, area);
}

fn numbers_lines(draw: &Draw) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).bold();
    vec![
        Line::from(Span::styled("Main Numbers", heading)).centered(),
        Line::default(),
        token_row(number_tokens(&draw.numbers.main_numbers, TokenKind::Main)),
        Line::default(),
        Line::from(Span::styled("Lucky Stars", heading)).centered(),
        Line::default(),
        token_row(number_tokens(&draw.numbers.lucky_stars, TokenKind::Star)),
    ]
}

fn draw_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let area = centered_width(40, area);
    let (border_style, label_style) = if state.button_enabled() {
        (
            Style::default().fg(Color::White),
            Style::default().fg(INDIGO).bg(Color::White).bold(),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", state.button_label()),
        label_style,
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(button, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let keys = if state.request.is_loading() {
        " Loading... "
    } else {
        " Enter:generate | ?:help | q:quit "
    };

    let mut spans = vec![Span::raw(keys)];
    if let RequestState::Success(draw) = &state.request {
        spans.push(Span::raw(format!(
            "| drawn {} ({}ms) ",
            draw.fetched_at.with_timezone(&chrono::Local).format("%H:%M:%S"),
            draw.time_ms
        )));
    }
    spans.push(Span::raw(format!("| {}", state.endpoint)));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} v{}

 Enter / Space / r / g   Generate new numbers
 ?                       Toggle this help
 q / Esc / Ctrl+C        Quit

 A new draw cannot be requested while one
 is still being fetched.

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_width(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        width,
        ..r
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
