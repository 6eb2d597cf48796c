//! Result panel: estimated risk and class.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::RiskAssessment;
use crate::tui::styles::MedicalTheme;

/// Render the metric, the class label and a risk gauge.
pub fn render_result(f: &mut Frame, area: Rect, assessment: &RiskAssessment) {
    let estimate = &assessment.estimate;
    let class_style = MedicalTheme::risk_class(estimate.class);

    let block = Block::default()
        .title(Span::styled(" Results ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Metric
            Constraint::Length(1), // Class
            Constraint::Length(3), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let metric = Paragraph::new(vec![
        Line::from(Span::styled(
            "Estimated 5-year risk of MAE",
            MedicalTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            estimate.percent_display(),
            class_style.add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(metric, chunks[0]);

    let class = Paragraph::new(Line::from(vec![
        Span::styled("Risk Class: ", MedicalTheme::text_secondary()),
        Span::styled(estimate.class.label(), class_style),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(class, chunks[1]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(class_style)
        .ratio((estimate.percent / 100.0).clamp(0.0, 1.0))
        .label(estimate.percent_display());
    f.render_widget(gauge, chunks[2]);
}
