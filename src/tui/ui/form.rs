//! Risk factor checkbox form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{RiskAssessment, RiskFactor, RiskFactors};
use crate::tui::styles::MedicalTheme;

/// Below this many columns the checkbox list uses short labels.
const NARROW_WIDTH: u16 = 60;

/// Form state: current flags and the highlighted row.
#[derive(Debug, Clone, Default)]
pub struct FactorFormState {
    pub factors: RiskFactors,
    pub selected: usize,
}

impl FactorFormState {
    /// Move to the next factor
    pub fn next_factor(&mut self) {
        self.selected = (self.selected + 1) % RiskFactor::ALL.len();
    }

    /// Move to the previous factor
    pub fn prev_factor(&mut self) {
        if self.selected == 0 {
            self.selected = RiskFactor::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    #[must_use]
    pub fn selected_factor(&self) -> RiskFactor {
        RiskFactor::ALL[self.selected]
    }

    /// Factor bound to a digit key ('1'..='7').
    #[must_use]
    pub fn factor_for_digit(c: char) -> Option<RiskFactor> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        RiskFactor::ALL.get(index as usize).copied()
    }

    /// Clear every flag and return to the first row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Label for `factor` in a list `width` columns wide.
#[must_use]
pub fn factor_label(factor: RiskFactor, width: u16) -> &'static str {
    if width < NARROW_WIDTH {
        factor.short_label()
    } else {
        factor.label()
    }
}

/// Render the checkbox list and the prognostic index below it.
pub fn render_factor_form(
    f: &mut Frame,
    area: Rect,
    state: &FactorFormState,
    assessment: &RiskAssessment,
) {
    let block = Block::default()
        .title(Span::styled(" Risk Factors ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Checkboxes
            Constraint::Length(1), // Prognostic index
        ])
        .margin(1)
        .split(inner);

    let mut lines = Vec::with_capacity(RiskFactor::ALL.len() * 2);
    for (i, factor) in RiskFactor::ALL.iter().enumerate() {
        let checked = state.factors.get(*factor);
        let is_selected = i == state.selected;

        let box_style = if checked {
            MedicalTheme::checked()
        } else {
            MedicalTheme::text_muted()
        };
        let label_style = if is_selected {
            MedicalTheme::selected()
        } else {
            MedicalTheme::text()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", i + 1), MedicalTheme::key_hint()),
            Span::styled(if checked { "[x] " } else { "[ ] " }, box_style),
            Span::styled(factor_label(*factor, chunks[0].width), label_style),
        ]));
        lines.push(Line::from(""));
    }

    let list = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(list, chunks[0]);

    let pi = Paragraph::new(Line::from(vec![
        Span::styled("Prognostic index: ", MedicalTheme::text_secondary()),
        Span::styled(
            format!("{:.4}", assessment.estimate.prognostic_index.value()),
            MedicalTheme::text(),
        ),
        Span::styled(
            format!("  ({} of 7 present)", state.factors.count()),
            MedicalTheme::text_muted(),
        ),
    ]));
    f.render_widget(pi, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = FactorFormState::default();
        state.prev_factor();
        assert_eq!(state.selected_factor(), RiskFactor::Minfl);
        state.next_factor();
        assert_eq!(state.selected_factor(), RiskFactor::Male);
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(FactorFormState::factor_for_digit('1'), Some(RiskFactor::Male));
        assert_eq!(FactorFormState::factor_for_digit('7'), Some(RiskFactor::Minfl));
        assert_eq!(FactorFormState::factor_for_digit('0'), None);
        assert_eq!(FactorFormState::factor_for_digit('8'), None);
        assert_eq!(FactorFormState::factor_for_digit('x'), None);
    }

    #[test]
    fn test_label_width() {
        assert_eq!(factor_label(RiskFactor::PvsHr, 40), "High-risk gene variant");
        assert_eq!(factor_label(RiskFactor::PvsHr, 59), "High-risk gene variant");
        assert!(factor_label(RiskFactor::PvsHr, 60).contains("LMNA"));
        assert_eq!(factor_label(RiskFactor::Nsvt, 30), "NSVT");
    }

    #[test]
    fn test_reset() {
        let mut state = FactorFormState::default();
        state.factors.toggle(RiskFactor::Nsvt);
        state.next_factor();
        state.reset();
        assert_eq!(state.factors, RiskFactors::default());
        assert_eq!(state.selected, 0);
    }
}
