use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pdv_model::Field;
use pdv_validate::RunSummary;

use crate::types::CheckResult;

/// Console summary rows, in print order: total valid, total invalid, then
/// one row per rule in rule order.
pub fn summary_lines(summary: &RunSummary) -> Vec<(String, usize)> {
    let mut lines = Vec::with_capacity(2 + Field::RULE_COUNT);
    lines.push(("Total valid".to_string(), summary.valid_count()));
    lines.push(("Total invalid".to_string(), summary.invalid_count()));
    for (field, count) in summary.rule_failures() {
        lines.push((format!("Errors in {field}"), count));
    }
    lines
}

pub fn print_summary(result: &CheckResult) {
    println!("Input: {}", result.input.display());
    println!("Valid records: {}", result.output.display());
    println!("{}", summary_table(&result.summary));
}

pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (index, (label, count)) in summary_lines(summary).into_iter().enumerate() {
        let row = match index {
            0 => vec![
                total_cell(label),
                count_cell(count, Color::Green).add_attribute(Attribute::Bold),
            ],
            1 => vec![
                total_cell(label),
                count_cell(count, Color::Red).add_attribute(Attribute::Bold),
            ],
            _ => vec![Cell::new(label), count_cell(count, Color::Red)],
        };
        table.add_row(row);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn total_cell(label: String) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdv_model::Record;
    use pdv_validate::classify_batch;

    #[test]
    fn test_summary_lines_order() {
        let records = vec![Record::default()];
        let summary = classify_batch(&records);
        let rendered: Vec<String> = summary_lines(&summary)
            .into_iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect();

        insta::assert_snapshot!(rendered.join("\n"), @r"
        Total valid: 0
        Total invalid: 1
        Errors in telephone: 1
        Errors in height: 0
        Errors in snils: 0
        Errors in passport_number: 0
        Errors in age: 0
        Errors in occupation: 0
        Errors in address: 0
        Errors in political_views: 0
        Errors in worldview: 0
        ");
    }

    #[test]
    fn test_table_has_one_row_per_line() {
        let summary = RunSummary::default();
        let table = summary_table(&summary);

        assert_eq!(table.row_count(), summary_lines(&summary).len());
    }
}
