//! Reference bar chart with the patient marker.

use ratatui::{
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use crate::domain::ReferenceChart;
use crate::tui::styles::MedicalTheme;

/// Bar width in chart units (each class occupies one unit).
const BAR_WIDTH: f64 = 0.6;

/// Horizontal resolution used to fill a bar with vertical strokes.
const FILL_STEP: f64 = 0.01;

/// Render the four reference bars and a horizontal line at the estimate.
pub fn render_chart(f: &mut Frame, area: Rect, chart: &ReferenceChart) {
    let slots = chart.bars.len() as f64;
    let marker_y = chart.marker_on_scale();
    let marker_style = MedicalTheme::risk_class(chart.marker_class);

    let title = Line::from(vec![
        Span::styled(" Reference Chart ", MedicalTheme::subtitle()),
        Span::styled(
            format!("0–{:.0}% ", chart.y_max),
            MedicalTheme::text_muted(),
        ),
    ]);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, slots])
        .y_bounds([0.0, chart.y_max])
        .paint(move |ctx| {
            for (i, bar) in chart.bars.iter().enumerate() {
                let color = MedicalTheme::class_color(bar.class);
                let left = i as f64 + (1.0 - BAR_WIDTH) / 2.0;
                let mut x = left;
                while x <= left + BAR_WIDTH {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: bar.height,
                        color,
                    });
                    x += FILL_STEP;
                }
                ctx.print(
                    left,
                    (bar.height + 3.0).min(chart.y_max),
                    Span::styled(
                        format!("{} {:.0}%", bar.class, bar.height),
                        MedicalTheme::text_secondary(),
                    ),
                );
            }

            ctx.layer();
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: marker_y,
                x2: slots,
                y2: marker_y,
                color: MedicalTheme::TEXT_PRIMARY,
            });

            let mut label = format!("Patient {:.1}%", chart.marker);
            if chart.marker_off_scale() {
                label.push_str(" (above scale)");
            }
            let label_y = if marker_y + 3.0 <= chart.y_max {
                marker_y + 3.0
            } else {
                marker_y - 3.0
            };
            ctx.print(0.05, label_y, Span::styled(label, marker_style));
        });

    f.render_widget(canvas, area);
}
