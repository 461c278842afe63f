//! Parse the catalogue CSV export into typed tasks.
//!
//! Expected header row:
//! Tasks,Status categories,Tags,Time(in hrs),Impact(priority)
//!
//! Column order is not significant, the names are. Parsing is tolerant:
//! missing cells fall back to documented defaults instead of rejecting
//! the row.

use std::sync::LazyLock;

use csv::StringRecord;
use regex::Regex;
use taskmart_core::{Impact, Status, Tag, Task, tables};
use tracing::warn;

const TITLE_COLUMN: &str = "Tasks";
const STATUS_COLUMN: &str = "Status categories";
const TAGS_COLUMN: &str = "Tags";
const TIME_COLUMN: &str = "Time(in hrs)";
const IMPACT_COLUMN: &str = "Impact(priority)";

const DEFAULT_TITLE: &str = "Untitled Task";

// Durations arrive as fractional hours with an optional unit token,
// e.g. "2 hours", "1 hour", "0.5".
static HOUR_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*hours?\s*").unwrap());

/// Column indices resolved from the header row by name.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    title: Option<usize>,
    statuses: Option<usize>,
    tags: Option<usize>,
    time: Option<usize>,
    impact: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Columns {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Columns {
            title: find(TITLE_COLUMN),
            statuses: find(STATUS_COLUMN),
            tags: find(TAGS_COLUMN),
            time: find(TIME_COLUMN),
            impact: find(IMPACT_COLUMN),
        }
    }
}

/// Parse raw catalogue text, returning tasks in source order with
/// contiguous `task-<n>` ids. Malformed records are logged and skipped.
pub fn parse_catalogue(text: &str) -> Vec<Task> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match rdr.headers() {
        Ok(headers) => Columns::from_headers(headers),
        Err(err) => {
            warn!("unreadable catalogue header: {err}");
            return Vec::new();
        }
    };

    let mut tasks = Vec::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping malformed catalogue row: {err}");
                continue;
            }
        };
        tasks.push(task_from_record(&record, columns, tasks.len() + 1));
    }
    tasks
}

fn task_from_record(record: &StringRecord, columns: Columns, n: usize) -> Task {
    let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

    let title_raw = cell(columns.title).trim();
    let title = if title_raw.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title_raw.to_string()
    };

    let hours = parse_hours(cell(columns.time));
    let image = tables::image_for_title(&title).to_string();

    Task {
        id: format!("task-{n}"),
        duration_minutes: (hours * 60.0).round() as u32,
        impact: Impact::parse(cell(columns.impact)),
        categories: cell(columns.tags).split(',').map(Tag::parse).collect(),
        statuses: cell(columns.statuses).split(',').map(Status::parse).collect(),
        image,
        title,
    }
}

/// Strip the unit token and parse fractional hours. Unparsable or
/// negative input yields 0.
fn parse_hours(raw: &str) -> f64 {
    let cleaned = HOUR_UNIT_RE.replace_all(raw, "");
    cleaned.trim().parse::<f64>().unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Tasks,Status categories,Tags,Time(in hrs),Impact(priority)
Order Protein Bars,\"Couple, Single, Parents\",\"Health and Fitness, Work and Career\",2 hours,Low
Research Protein Powders,\"Couple, Single\",\"Health and Fitness\",0.5,High
Book massage,Single,Health and Fitness,1 hour,Medium
";

    #[test]
    fn test_parses_every_row_in_order() {
        let tasks = parse_catalogue(SAMPLE);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].id, "task-1");
        assert_eq!(tasks[0].title, "Order Protein Bars");
        assert_eq!(tasks[2].id, "task-3");
        assert_eq!(tasks[2].title, "Book massage");
    }

    #[test]
    fn test_duration_parsing() {
        let tasks = parse_catalogue(SAMPLE);
        assert_eq!(tasks[0].duration_minutes, 120);
        assert_eq!(tasks[1].duration_minutes, 30);
        assert_eq!(tasks[2].duration_minutes, 60);
    }

    #[test]
    fn test_parse_hours_inputs() {
        assert_eq!(parse_hours("2 hours"), 2.0);
        assert_eq!(parse_hours("1 HOUR"), 1.0);
        assert_eq!(parse_hours("2.5"), 2.5);
        assert_eq!(parse_hours(""), 0.0);
        assert_eq!(parse_hours("soon"), 0.0);
        assert_eq!(parse_hours("-3"), 0.0);
    }

    #[test]
    fn test_vocab_normalization() {
        let tasks = parse_catalogue(SAMPLE);
        assert_eq!(
            tasks[0].statuses,
            vec![Status::Couple, Status::Single, Status::Parents]
        );
        assert_eq!(
            tasks[0].categories,
            vec![Tag::HealthAndFitness, Tag::LongWorkHours]
        );
        assert_eq!(tasks[0].impact, Impact::Low);
        assert_eq!(tasks[1].impact, Impact::High);
    }

    #[test]
    fn test_image_resolution() {
        let tasks = parse_catalogue(SAMPLE);
        // "Book massage" is in the image table, the others are not.
        assert_eq!(tasks[2].image, "/image_004_Three_perfectly_smoo.png");
        assert_eq!(tasks[0].image, tables::DEFAULT_IMAGE);
    }

    #[test]
    fn test_column_order_is_not_significant() {
        let shuffled = "\
Impact(priority),Tags,Tasks,Time(in hrs),Status categories
High,Health and Fitness,Book massage,1.5,\"Single, Couple\"
";
        let tasks = parse_catalogue(shuffled);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Book massage");
        assert_eq!(tasks[0].duration_minutes, 90);
        assert_eq!(tasks[0].impact, Impact::High);
        assert_eq!(tasks[0].statuses, vec![Status::Single, Status::Couple]);
    }

    #[test]
    fn test_missing_cells_take_defaults() {
        let sparse = "\
Tasks,Status categories,Tags,Time(in hrs),Impact(priority)
,,,,
Order chai,,,,
";
        let tasks = parse_catalogue(sparse);
        assert_eq!(tasks.len(), 2);

        assert_eq!(tasks[0].title, "Untitled Task");
        assert_eq!(tasks[0].duration_minutes, 0);
        assert_eq!(tasks[0].impact, Impact::Low);
        assert_eq!(tasks[0].categories, vec![Tag::HealthAndFitness]);
        assert_eq!(tasks[0].statuses, vec![Status::Single]);

        assert_eq!(tasks[1].title, "Order chai");
        assert_eq!(tasks[1].id, "task-2");
    }

    #[test]
    fn test_short_rows_tolerated() {
        let ragged = "\
Tasks,Status categories,Tags,Time(in hrs),Impact(priority)
Book massage,Single
";
        let tasks = parse_catalogue(ragged);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].impact, Impact::Low);
        assert_eq!(tasks[0].duration_minutes, 0);
    }

    #[test]
    fn test_header_only_yields_empty() {
        let tasks =
            parse_catalogue("Tasks,Status categories,Tags,Time(in hrs),Impact(priority)\n");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_unknown_vocabulary_falls_back() {
        let odd = "\
Tasks,Status categories,Tags,Time(in hrs),Impact(priority)
Mystery task,Retired,\"Astral Projection\",1,Critical
";
        let tasks = parse_catalogue(odd);
        assert_eq!(tasks[0].statuses, vec![Status::Single]);
        assert_eq!(tasks[0].categories, vec![Tag::HealthAndFitness]);
        assert_eq!(tasks[0].impact, Impact::Low);
    }
}
