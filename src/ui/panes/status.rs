//! Status bar rendering with keybindings and run state

use crate::config::StepMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData {
    pub generation: u64,
    pub population: usize,
    pub area: usize,
    pub seed: u64,
    pub mode: StepMode,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.bar_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);
    let text_style = bar_style.fg(DEFAULT_THEME.fg);

    // Left side: generation, population and seed
    let percent = if data.area == 0 {
        0.0
    } else {
        data.population as f64 * 100.0 / data.area as f64
    };
    let left_spans = vec![
        Span::styled(
            format!(" Gen {} ", data.generation),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!("Pop {} ({:.1}%)", data.population, percent),
            text_style,
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!("Seed {:#018x}", data.seed), text_style),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and mode badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);

    let (step_hint, badge, badge_color) = match data.mode {
        StepMode::Manual => (" any key ", " MANUAL ", DEFAULT_THEME.success),
        StepMode::Continuous { .. } => (" auto ", " ▶ RUNNING ", DEFAULT_THEME.secondary),
    };

    let right_spans = vec![
        Span::styled(step_hint, key_style),
        Span::styled(" step ", text_style),
        Span::styled("│", sep_style),
        Span::styled(" ", text_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", text_style),
        Span::styled("│", sep_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
