//! Plain ascii summary tables for the console.

use std::fmt::{self, Display};

use crate::aggregate::LanguageRow;

pub const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    header: [String; 4],
    rows: Vec<[String; 4]>,
}

impl Table {
    pub fn new(title: &str, rows: &[LanguageRow]) -> Self {
        Self {
            title: title.to_owned(),
            header: HEADER.map(String::from),
            rows: rows
                .iter()
                .map(|row| {
                    [
                        row.language.to_owned(),
                        row.found.to_string(),
                        row.processed.to_string(),
                        row.average.to_string(),
                    ]
                })
                .collect(),
        }
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = self.header.clone().map(|cell| cell.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn border(widths: &[usize; 4]) -> String {
    let segments = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>();
    format!("+{}+", segments.join("+"))
}

/// Top border with the title written over its start, if it fits.
fn title_border(title: &str, widths: &[usize; 4]) -> String {
    let plain = border(widths);
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > plain.chars().count() {
        return plain;
    }
    let rest = plain.chars().skip(title_len + 1).collect::<String>();
    format!("+{}{}", title, rest)
}

fn line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>();
    format!("|{}|", cells.join("|"))
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let separator = border(&widths);
        writeln!(f, "{}", title_border(&self.title, &widths))?;
        writeln!(f, "{}", line(&self.header, &widths))?;
        writeln!(f, "{}", separator)?;
        for row in &self.rows {
            writeln!(f, "{}", line(row, &widths))?;
        }
        write!(f, "{}", separator)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn row(language: &str, found: u64, processed: usize, average: u64) -> LanguageRow {
        LanguageRow {
            language: language.to_owned(),
            found,
            processed,
            average,
        }
    }

    #[test]
    fn test_render_table() {
        let table = Table::new(
            "SuperJob",
            &[row("Python", 1520, 380, 183000), row("Go", 97, 41, 210500)],
        );
        let expected = [
            "+SuperJob---------------+------------------+---------------------+------------------+",
            "| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |",
            "+-----------------------+------------------+---------------------+------------------+",
            "| Python                | 1520             | 380                 | 183000           |",
            "| Go                    | 97               | 41                  | 210500           |",
            "+-----------------------+------------------+---------------------+------------------+",
        ]
        .join("\n");
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_columns_grow_with_content() {
        let table = Table::new("HeadHunter", &[row("A very long language name", 1, 1, 1)]);
        let rendered = table.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("+HeadHunter-"));
        assert!(lines[3].starts_with("| A very long language name |"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_title_too_long_is_dropped() {
        let widths = [1, 1, 1, 1];
        assert_eq!(title_border("a much too long title", &widths), border(&widths));
    }
}
