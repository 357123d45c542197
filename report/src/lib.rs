use std::fmt::{self, Display};

use job_scraper::LanguageStats;

/// Column labels of a statistics table
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub headings: [String; 4],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            headings: [
                "Язык программирования".to_owned(),
                "Вакансий найдено".to_owned(),
                "Вакансий обработано".to_owned(),
                "Средняя зарплата".to_owned(),
            ],
        }
    }
}

/// A titled ASCII table; the first row is the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: String,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            title: title.into(),
            rows: vec![header],
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], title: &str) -> fmt::Result {
        let mut rule = String::from("+");
        for width in widths {
            rule.push_str(&"-".repeat(width + 2));
            rule.push('+');
        }
        // the title replaces the start of the top border when it fits
        let title_len = title.chars().count();
        if !title.is_empty() && title_len + 2 <= rule.chars().count() {
            let rest = rule.chars().skip(title_len + 1).collect::<String>();
            rule = format!("+{}{}", title, rest);
        }
        writeln!(f, "{}", rule)
    }

    fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], row: &[String]) -> fmt::Result {
        write!(f, "|")?;
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width - cell.chars().count();
            write!(f, " {}{} |", cell, " ".repeat(padding))?;
        }
        writeln!(f)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        Self::write_rule(f, &widths, &self.title)?;
        let mut rows = self.rows.iter();
        if let Some(header) = rows.next() {
            Self::write_row(f, &widths, header)?;
            Self::write_rule(f, &widths, "")?;
        }
        for row in rows {
            Self::write_row(f, &widths, row)?;
        }
        Self::write_rule(f, &widths, "")
    }
}

/// One row per language, in the order the statistics were collected
pub fn create_table(stats: &[LanguageStats], title: &str, config: &TableConfig) -> Table {
    let mut table = Table::new(title, config.headings.to_vec());
    for language in stats {
        table.push_row(vec![
            language.language.clone(),
            language.vacancies_found.to_string(),
            language.vacancies_processed.to_string(),
            language.average_salary.to_string(),
        ]);
    }
    log::debug!("built table '{}' with {} rows", title, table.rows.len());
    table
}
