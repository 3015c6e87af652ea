use crate::core::history::History;
use crate::utils::date::day_with_weekday;
use crate::utils::table::{Column, Table, TableCell};
use crate::utils::time::format_hms;

/// The heat-mapped history table.
pub fn to_table(history: &History, colored: bool) -> String {
    let mut columns = vec![Column::left("Date")];
    columns.extend(history.projects().iter().map(|p| Column::right(&p.name)));
    columns.push(Column::right("Start"));
    columns.push(Column::right("End"));
    columns.push(Column::right("Sum"));

    let mut table = Table::new(columns);

    for day in history.days() {
        let mut row = vec![TableCell::plain(day_with_weekday(day.day()))];

        for p in history.projects() {
            let c = history.cell(day, p);
            row.push(TableCell::shaded(format_hms(c.seconds), c.background, c.foreground));
        }

        let (start, end) = match day.daily_log() {
            Some(log) => (
                log.start.format("%H:%M:%S").to_string(),
                log.end.format("%H:%M:%S").to_string(),
            ),
            None => (String::new(), String::new()),
        };
        row.push(TableCell::plain(start));
        row.push(TableCell::plain(end));

        let total = history.total_cell(day);
        row.push(TableCell::shaded(
            format_hms(total.seconds),
            total.background,
            total.foreground,
        ));

        table.add_row(row);
    }

    table.render(colored)
}
