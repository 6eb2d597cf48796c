//! UI module: View components for the TUI.

pub mod chart;
pub mod form;
pub mod result;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::RiskAssessment;
use crate::tui::styles::{MedicalTheme, TITLE};

use self::chart::render_chart;
use self::form::{render_factor_form, FactorFormState};
use self::result::render_result;

/// Render the whole calculator screen (everything above the disclaimer).
pub fn render_calculator(
    f: &mut Frame,
    area: Rect,
    form: &FactorFormState,
    assessment: &RiskAssessment,
    show_chart: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_factor_form(f, body[0], form, assessment);

    if show_chart {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(body[1]);
        render_result(f, right[0], assessment);
        render_chart(f, right[1], &assessment.chart());
    } else {
        render_result(f, body[1], assessment);
    }

    render_footer(f, chunks[2], show_chart);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled(TITLE, MedicalTheme::title()),
        Span::styled(
            " │ 5-year risk of major arrhythmic events in non-dilated LV cardiomyopathy",
            MedicalTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, area: Rect, show_chart: bool) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", MedicalTheme::key_hint()),
        Span::styled("Navigate ", MedicalTheme::key_desc()),
        Span::styled("[Space] ", MedicalTheme::key_hint()),
        Span::styled("Toggle ", MedicalTheme::key_desc()),
        Span::styled("[1-7] ", MedicalTheme::key_hint()),
        Span::styled("Toggle factor ", MedicalTheme::key_desc()),
        Span::styled("[R] ", MedicalTheme::key_hint()),
        Span::styled("Reset ", MedicalTheme::key_desc()),
        Span::styled("[C] ", MedicalTheme::key_hint()),
        Span::styled(
            if show_chart { "Hide chart " } else { "Show chart " },
            MedicalTheme::key_desc(),
        ),
        Span::styled("[Q] ", MedicalTheme::key_hint()),
        Span::styled("Quit", MedicalTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: This tool provides indicative estimates and does not replace professional medical evaluation.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Model inputs are binary; borderline findings should be judged clinically.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
