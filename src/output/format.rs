//! Cell rendering for the terminal summary table

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::pricing::Price;

/// Colors for one table; every slot is `None` when color is off
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Palette {
    accent: Option<Color>,
    money: Option<Color>,
}

impl Palette {
    pub(super) fn new(use_color: bool) -> Self {
        if !use_color {
            return Palette::default();
        }
        Palette {
            accent: Some(Color::Cyan),
            money: Some(Color::Green),
        }
    }
}

/// `1234567` -> `1,234,567`
pub(super) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Dollar amount with all six decimals, e.g. `$0.000130`
pub(super) fn dollars(price: Price) -> String {
    format!("${}", price.fixed())
}

fn paint(mut cell: Cell, color: Option<Color>, bold: bool) -> Cell {
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn heading(text: &str, palette: Palette) -> Cell {
    paint(Cell::new(text), palette.accent, true)
}

/// Document name, or the TOTAL label when `total` is set
pub(super) fn name_cell(text: &str, palette: Palette, total: bool) -> Cell {
    let color = if total { palette.accent } else { None };
    paint(Cell::new(text), color, total)
}

pub(super) fn count_cell(n: u64, palette: Palette, total: bool) -> Cell {
    let color = if total { palette.accent } else { None };
    paint(
        Cell::new(group_thousands(n)).set_alignment(CellAlignment::Right),
        color,
        total,
    )
}

pub(super) fn cost_cell(price: Price, palette: Palette, total: bool) -> Cell {
    paint(
        Cell::new(dollars(price)).set_alignment(CellAlignment::Right),
        palette.money,
        total,
    )
}

/// UTF-8 bordered table with a single-line header separator (├─┼─┤)
pub(super) fn report_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_style(TableComponent::HeaderLines, '─')
        .set_style(TableComponent::LeftHeaderIntersection, '├')
        .set_style(TableComponent::MiddleHeaderIntersections, '┼')
        .set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}
