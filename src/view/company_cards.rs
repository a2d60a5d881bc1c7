//! Card grid: three companies per row.

use crate::model::Company;
use crate::view::constants::{CARD_COLUMNS, CARD_HEIGHT, MIN_CARD_HEIGHT};
use crate::view::helpers::{format_thousands, key_value_line, truncate};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Grid of company cards for one page.
///
/// Rows share the available height. When the page does not fit at full
/// card height, cards lose their lower lines first; rows that cannot get
/// even [`MIN_CARD_HEIGHT`] are not drawn.
pub struct CardGrid<'a> {
    companies: &'a [&'a Company],
    palette: &'a Palette,
}

impl<'a> CardGrid<'a> {
    /// Grid over one page of companies.
    pub fn new(companies: &'a [&'a Company], palette: &'a Palette) -> Self {
        Self { companies, palette }
    }
}

/// Height given to each card row so `rows` rows share `available` lines.
fn card_row_height(available: u16, rows: usize) -> u16 {
    let rows = u16::try_from(rows.max(1)).unwrap_or(u16::MAX);
    (available / rows).clamp(MIN_CARD_HEIGHT, CARD_HEIGHT)
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.companies.is_empty() || area.height < MIN_CARD_HEIGHT {
            return;
        }

        let rows: Vec<&[&Company]> = self.companies.chunks(CARD_COLUMNS).collect();
        let row_height = card_row_height(area.height, rows.len());
        let visible_rows = usize::from(area.height / row_height).min(rows.len());

        let row_areas = Layout::vertical(vec![Constraint::Length(row_height); visible_rows])
            .split(area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let cell_areas = Layout::horizontal(vec![
                Constraint::Ratio(1, CARD_COLUMNS as u32);
                CARD_COLUMNS
            ])
            .spacing(1)
            .split(*row_area);

            for (company, cell) in row.iter().zip(cell_areas.iter()) {
                render_card(company, *cell, buf, self.palette);
            }
        }
    }
}

fn render_card(company: &Company, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let inner_width = usize::from(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(Span::styled(
            format!(" {} ", truncate(&company.name, inner_width.saturating_sub(2))),
            palette.title,
        ));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", truncate(&company.industry, inner_width.saturating_sub(2))),
            palette.badge,
        )),
        Line::from(Span::styled(
            truncate(&company.description, inner_width),
            palette.muted,
        )),
        key_value_line("Location:", company.location.clone(), palette.accent),
        key_value_line(
            "Employees:",
            format_thousands(company.employees),
            palette.accent,
        ),
        key_value_line("Founded:", company.founded.to_string(), palette.accent),
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{buffer_to_string, sample_companies};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(companies: &[Company], width: u16, height: u16) -> String {
        let palette = Palette::default();
        let refs: Vec<&Company> = companies.iter().collect();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(CardGrid::new(&refs, &palette), frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn row_height_prefers_full_cards() {
        assert_eq!(card_row_height(40, 3), CARD_HEIGHT);
        assert_eq!(card_row_height(12, 3), 4);
        assert_eq!(card_row_height(5, 3), MIN_CARD_HEIGHT);
        assert_eq!(card_row_height(10, 0), CARD_HEIGHT);
    }

    #[test]
    fn card_shows_all_facts_when_tall_enough() {
        let companies = &sample_companies()[..1];
        let output = render(companies, 120, CARD_HEIGHT);

        assert!(output.contains("Quantum Stack"), "{output}");
        assert!(output.contains("Tech"), "{output}");
        assert!(output.contains("Cloud platform for data teams"), "{output}");
        assert!(output.contains("Location: Berlin"), "{output}");
        assert!(output.contains("Employees: 250"), "{output}");
        assert!(output.contains("Founded: 2015"), "{output}");
    }

    #[test]
    fn employees_use_thousands_separator() {
        let companies = &sample_companies()[1..2];
        let output = render(companies, 120, CARD_HEIGHT);
        assert!(output.contains("Employees: 1,200"), "{output}");
    }

    #[test]
    fn three_cards_share_a_row() {
        let companies = &sample_companies()[..3];
        let output = render(companies, 120, CARD_HEIGHT);

        let title_line = output.lines().next().unwrap();
        assert!(title_line.contains("Quantum Stack"));
        assert!(title_line.contains("Greenfield Energy"));
        assert!(title_line.contains("Ledgerline"));
    }

    #[test]
    fn full_page_fits_in_three_rows() {
        let output = render(&sample_companies(), 120, CARD_HEIGHT * 3);
        for company in sample_companies() {
            assert!(output.contains(&company.name), "missing {}", company.name);
        }
    }

    #[test]
    fn cramped_grid_still_shows_names() {
        let output = render(&sample_companies(), 120, 9);
        for company in sample_companies() {
            assert!(output.contains(&company.name), "missing {}", company.name);
        }
        assert!(!output.contains("Founded:"));
    }

    #[test]
    fn empty_page_renders_nothing() {
        assert_eq!(render(&[], 60, 10), "");
    }
}
