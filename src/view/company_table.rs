//! Table view: one row per company.

use crate::model::Company;
use crate::view::helpers::format_thousands;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

const HEADERS: [&str; 5] = ["Name", "Industry", "Location", "Employees", "Founded"];

/// Table of one page of companies, with a header row.
pub struct CompanyTable<'a> {
    companies: &'a [&'a Company],
    palette: &'a Palette,
}

impl<'a> CompanyTable<'a> {
    /// Table over one page of companies.
    pub fn new(companies: &'a [&'a Company], palette: &'a Palette) -> Self {
        Self { companies, palette }
    }
}

fn right(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}

impl Widget for CompanyTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(HEADERS.iter().enumerate().map(|(i, h)| {
            if i >= 3 {
                right(h.to_string())
            } else {
                Cell::from(*h)
            }
        }))
        .style(self.palette.title)
        .bottom_margin(1);

        let rows = self.companies.iter().map(|c| {
            Row::new(vec![
                Cell::from(c.name.clone()).style(self.palette.accent),
                Cell::from(c.industry.clone()),
                Cell::from(c.location.clone()),
                right(format_thousands(c.employees)),
                right(c.founded.to_string()),
            ])
        });

        let widths = [
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(8),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.border),
            )
            .render(area, buf);
    }
}
