//! Plain-text rendering of one table page.

use std::fmt::Write as _;

use view_core::TableView;

const HEADERS: [&str; 5] = ["Name", "Region", "Population", "Area", "Flag"];

pub fn render_table(view: &TableView<'_>) -> String {
    let rows: Vec<[String; 5]> = view
        .rows
        .iter()
        .map(|country| {
            [
                country.name.clone(),
                country.region.clone(),
                country.population.to_string(),
                country.area.to_string(),
                country.flag_url.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    if view.show_page_controls {
        let buttons: Vec<String> = view
            .page_numbers()
            .map(|page| {
                if page == view.current_page {
                    format!("[{page}]")
                } else {
                    page.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "\nPage {} of {}", view.current_page, view.page_count);
        let _ = writeln!(out, "Pages: {}", buttons.join(" "));
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}
