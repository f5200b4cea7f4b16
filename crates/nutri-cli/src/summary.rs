use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nutri_model::{Caregiver, Child, ClassificationResult, DISCLAIMER, NutritionStatus};
use nutri_report::{ChildSummary, format_date};

pub fn print_result(result: &ClassificationResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value"), header_cell("Tier")]);
    apply_result_table_style(&mut table);
    table.add_row(vec![
        Cell::new("BMI"),
        Cell::new(format!("{:.2}", result.bmi)),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("BMI-for-age z-score"),
        optional_cell(result.bmi_z.map(|z| format!("{z:.2}"))),
        status_cell(result.zscore_tier),
    ]);
    table.add_row(vec![
        Cell::new("MUAC (mm)"),
        optional_cell(result.muac_mm.map(|m| m.to_string())),
        match result.muac_tier {
            Some(tier) => status_cell(tier),
            None => dim_cell("not used"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new(result.status.description()),
        status_cell(result.status).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("{}", result.recommendation());
    println!();
    println!("{DISCLAIMER}");
}

pub fn print_children(children: &[(&Child, Option<&Caregiver>)]) {
    if children.is_empty() {
        println!("No children registered.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Sex"),
        header_cell("Age (months)"),
        header_cell("Caregiver"),
        header_cell("Registered"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (child, caregiver) in children {
        table.add_row(vec![
            Cell::new(child.id).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(&child.name),
            Cell::new(child.sex.label()),
            Cell::new(child.age_months),
            match caregiver {
                Some(caregiver) => Cell::new(&caregiver.name),
                None => dim_cell("-"),
            },
            dim_cell(format_date(&child.registered_at)),
        ]);
    }
    println!("{table}");
}

pub fn print_history(summary: &ChildSummary) {
    let child = &summary.child;
    println!(
        "{} (ID {}, {}, {} months at registration)",
        child.name,
        child.id,
        child.sex.label(),
        child.age_months
    );
    let Some(latest) = summary.latest() else {
        println!("No measurements recorded.");
        return;
    };
    println!(
        "Showing {} of {} measurements",
        summary.recent.len(),
        summary.total_measurements
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Age"),
        header_cell("Weight (kg)"),
        header_cell("Height (cm)"),
        header_cell("MUAC (mm)"),
        header_cell("BMI Z"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);
    for record in &summary.recent {
        table.add_row(vec![
            Cell::new(format_date(&record.recorded_at)),
            Cell::new(record.age_months),
            Cell::new(record.weight_kg),
            Cell::new(record.height_cm),
            optional_cell(record.muac_mm.map(|m| m.to_string())),
            optional_cell(record.bmi_z.map(|z| format!("{z:.2}"))),
            status_cell(record.status),
        ]);
    }
    println!("{table}");
    match summary.trend() {
        Some(trend) => println!("Latest status: {} ({})", latest.status, trend.as_str()),
        None => println!("Latest status: {}", latest.status),
    }
    println!("{}", latest.status.recommendation());
    println!();
    println!("{DISCLAIMER}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_result_table_style(table: &mut Table) {
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

fn status_cell(status: NutritionStatus) -> Cell {
    match status {
        NutritionStatus::Sam => Cell::new(status)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        NutritionStatus::Mam => Cell::new(status).fg(Color::Yellow),
        NutritionStatus::Normal => Cell::new(status).fg(Color::Green),
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("N/A"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
