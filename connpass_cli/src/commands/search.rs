use anyhow::{bail, Result};
use clap::Args;
use connpass_api::{Client, EventDate, EventQuery, MonthRule, Order};

use crate::output::{
    print_events_csv, print_events_markdown, print_events_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct SearchArgs {
    /// Event ID (repeatable)
    #[arg(long = "event-id")]
    pub event_ids: Vec<i64>,

    /// Keyword that must match (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Keyword of which any may match (repeatable)
    #[arg(long = "keyword-or")]
    pub keywords_or: Vec<String>,

    /// Month to search, YYYYMM (repeatable)
    #[arg(long)]
    pub ym: Vec<String>,

    /// Day to search, YYYYMMDD (repeatable)
    #[arg(long)]
    pub ymd: Vec<String>,

    /// Participant nickname (repeatable)
    #[arg(long = "nickname")]
    pub nicknames: Vec<String>,

    /// Organizer nickname (repeatable)
    #[arg(long = "owner-nickname")]
    pub owner_nicknames: Vec<String>,

    /// Series ID (repeatable)
    #[arg(long = "series-id")]
    pub series_ids: Vec<i64>,

    /// Offset of the first result
    #[arg(long)]
    pub start: Option<u32>,

    /// Sort order: update, start, create
    #[arg(long)]
    pub order: Option<String>,

    /// Number of results
    #[arg(long)]
    pub count: Option<u32>,

    /// Accept December in --ym/--ymd filters
    #[arg(long)]
    pub calendar_months: bool,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    tracing::debug!("Searching events: {:?}", query);
    let resp = client.search_events(&query).await?;

    eprintln!(
        "Showing {} of {} events (from {})",
        resp.results_returned, resp.results_available, resp.results_start
    );

    match format {
        OutputFormat::Table => print_events_table(&resp.events),
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Csv => print_events_csv(&resp.events)?,
        OutputFormat::Markdown => print_events_markdown(&resp.events),
    }

    Ok(())
}

fn build_query(args: &SearchArgs) -> Result<EventQuery> {
    let mut query = EventQuery::default()
        .with_event_ids(&args.event_ids)
        .with_keywords(&args.keywords)
        .with_keywords_or(&args.keywords_or)
        .with_nicknames(&args.nicknames)
        .with_owner_nicknames(&args.owner_nicknames)
        .with_series_ids(&args.series_ids);

    let month_rule = if args.calendar_months {
        MonthRule::Calendar
    } else {
        MonthRule::Legacy
    };
    for ymd in &args.ymd {
        query = query.with_date(validate_date(ymd, parse_ymd(ymd)?, month_rule)?);
    }
    for ym in &args.ym {
        query = query.with_date(validate_date(ym, parse_ym(ym)?, month_rule)?);
    }

    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(count) = args.count {
        query = query.with_count(count);
    }
    if let Some(order) = &args.order {
        let Ok(order) = order.parse::<Order>() else {
            bail!(
                "invalid order '{}'. Expected one of: update, start, create",
                order
            );
        };
        query = query.with_order(order);
    }
    query = query.with_month_rule(month_rule);

    Ok(query)
}

/// Rejects dates the API filter would silently drop.
fn validate_date(input: &str, date: EventDate, rule: MonthRule) -> Result<EventDate> {
    let input = input.trim();
    if !(1..=12).contains(&date.month) {
        bail!("invalid month in '{}': must be between 01 and 12", input);
    }
    if let Some(day) = date.day {
        if !(1..=31).contains(&day) {
            bail!("invalid day in '{}': must be between 01 and 31", input);
        }
    }
    if date.month == 12 && rule == MonthRule::Legacy {
        bail!(
            "December filter '{}' is dropped by the default month rule. Pass --calendar-months to send it",
            input
        );
    }
    Ok(date)
}

fn parse_digits(input: &str, len: usize, expected: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    if trimmed.len() != len || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        bail!(
            "invalid date '{}'. Expected format: {}",
            trimmed,
            expected
        );
    }
    Ok(trimmed.bytes().map(|b| u32::from(b - b'0')).collect())
}

/// Parses `YYYYMM` into a month filter.
fn parse_ym(input: &str) -> Result<EventDate> {
    let d = parse_digits(input, 6, "YYYYMM (e.g., 201901)")?;
    let year = d[..4].iter().fold(0, |acc, v| acc * 10 + v);
    let month = d[4] * 10 + d[5];
    Ok(EventDate::ym(year as i32, month))
}

/// Parses `YYYYMMDD` into a single-day filter.
fn parse_ymd(input: &str) -> Result<EventDate> {
    let d = parse_digits(input, 8, "YYYYMMDD (e.g., 20190119)")?;
    let year = d[..4].iter().fold(0, |acc, v| acc * 10 + v);
    let month = d[4] * 10 + d[5];
    let day = d[6] * 10 + d[7];
    Ok(EventDate::ymd(year as i32, month, day))
}
