use anyhow::Result;
use connpass_api::types::Event;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    started_at: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Series")]
    #[serde(rename = "Series")]
    series: String,
    #[tabled(rename = "Place")]
    #[serde(rename = "Place")]
    place: String,
    #[tabled(rename = "Attendance")]
    #[serde(rename = "Attendance")]
    attendance: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

// -- Row builders --

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            id: e.event_id,
            started_at: e.started_at.format("%Y-%m-%d %H:%M").to_string(),
            title: e.title.clone(),
            series: e
                .series
                .as_ref()
                .map(|s| s.title.clone())
                .unwrap_or_default(),
            place: e.place.clone().unwrap_or_default(),
            attendance: format_attendance(e.accepted, e.waiting, e.limit),
            url: e.event_url.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_events_table(events: &[Event]) {
    println!("{}", Table::new(build_event_rows(events)));
}

// -- Markdown output --

pub fn print_events_markdown(events: &[Event]) {
    let mut table = Table::new(build_event_rows(events));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_events_csv(events: &[Event]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_event_rows(events) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// `accepted/limit`, with the waitlist appended when non-empty.
fn format_attendance(accepted: i64, waiting: i64, limit: Option<i64>) -> String {
    let base = match limit {
        Some(limit) => format!("{}/{}", accepted, limit),
        None => accepted.to_string(),
    };
    if waiting > 0 {
        format!("{} (+{} waiting)", base, waiting)
    } else {
        base
    }
}
