// ===== moodzone/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use moodzone::regions::RegionResult;

pub fn results_table(results: &[RegionResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Timezone").add_attribute(Attribute::Bold),
        Cell::new("Avg Happiness").fg(Color::Cyan),
        Cell::new("Tweets"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for result in results {
        let avg_cell = match result.average_happiness {
            Some(avg) => Cell::new(format!("{:.4}", avg)).fg(Color::Cyan),
            None => Cell::new("none").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(result.timezone.to_string()).add_attribute(Attribute::Bold),
            avg_cell,
            Cell::new(result.tweet_count.to_string()),
        ]);
    }

    table
}

/// The empty result set (a missing input file) gets its own notice rather
/// than a header-only table.
pub fn print_results(results: &[RegionResult]) {
    if results.is_empty() {
        println!("\nNo results: input could not be read.");
        return;
    }
    println!("\n{}", results_table(results));
}
