//! report.rs
//!
//! Текстовая таблица для консольного отчета: строка на событие плюс
//! итоговая строка `TOTAL`.

use crate::models::AggregateReport;

const HEADERS: [&str; 6] = ["Date", "Free", "Taken", "Total", "Free %", "URL"];
// Числовые колонки прижимаем вправо
const RIGHT_ALIGNED: [bool; 6] = [false, true, true, true, true, false];

pub fn render_report(report: &AggregateReport) -> String {
    let mut rows: Vec<[String; 6]> = report
        .events
        .iter()
        .map(|event| {
            [
                event.date.clone(),
                event.free.to_string(),
                event.taken.to_string(),
                event.total.to_string(),
                format!("{:.1}%", event.free_percent),
                event.url.clone(),
            ]
        })
        .collect();

    let summary = &report.summary;
    rows.push([
        "TOTAL".to_string(),
        summary.free_total.to_string(),
        summary.taken_total.to_string(),
        summary.all_total.to_string(),
        format!("{:.1}%", summary.total_percent),
        String::new(),
    ]);

    let mut widths: [usize; 6] = [0; 6];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.len();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let separator: String = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let render_row = |cells: &[String; 6]| -> String {
        let mut line = String::from("|");
        for ((cell, width), right) in cells.iter().zip(widths).zip(RIGHT_ALIGNED) {
            if right {
                line.push_str(&format!(" {:>width$} |", cell, width = width));
            } else {
                line.push_str(&format!(" {:<width$} |", cell, width = width));
            }
        }
        line
    };

    let header_cells: [String; 6] = HEADERS.map(String::from);

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}
