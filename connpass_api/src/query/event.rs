use url::Url;

use super::common::{join_values, Format, Order};
use super::date::{partition_dates, EventDate, MonthRule};

/// Search parameters for the `/event/` endpoint.
///
/// Every field is optional. Empty lists and `None` scalars are left out of
/// the query string entirely.
#[derive(Clone, Debug, Default)]
pub struct EventQuery {
    pub event_ids: Vec<i64>,
    /// Keywords that must all match.
    pub keywords: Vec<String>,
    /// Keywords of which any may match.
    pub keywords_or: Vec<String>,
    pub dates: Vec<EventDate>,
    /// Participant nicknames.
    pub nicknames: Vec<String>,
    pub owner_nicknames: Vec<String>,
    pub series_ids: Vec<i64>,
    /// Offset of the first result (1-indexed on the API side).
    pub start: Option<u32>,
    pub order: Option<Order>,
    pub count: Option<u32>,
    pub format: Option<Format>,
    /// Month range accepted for `dates`.
    pub month_rule: MonthRule,
}

impl EventQuery {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// The URL is returned untouched when no parameter is set.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value));
            }
        };

        push("event_id", join_values(&self.event_ids));
        push("keyword", join_values(&self.keywords));
        push("keyword_or", join_values(&self.keywords_or));
        let buckets = partition_dates(&self.dates, self.month_rule);
        push("ymd", join_values(&buckets.ymd));
        push("ym", join_values(&buckets.ym));
        push("nickname", join_values(&self.nicknames));
        push("owner_nickname", join_values(&self.owner_nicknames));
        push("series_id", join_values(&self.series_ids));
        push("start", self.start.map(|v| v.to_string()));
        push("order", self.order.map(|v| v.to_string()));
        push("count", self.count.map(|v| v.to_string()));
        push("format", self.format.map(|v| v.to_string()));

        pairs
    }
}

impl EventQuery {
    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_ids.push(event_id);
        self
    }
    pub fn with_event_ids(mut self, event_ids: &[i64]) -> Self {
        self.event_ids.extend_from_slice(event_ids);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }
    pub fn with_keywords(mut self, keywords: &[String]) -> Self {
        self.keywords.extend_from_slice(keywords);
        self
    }

    pub fn with_keyword_or(mut self, keyword: &str) -> Self {
        self.keywords_or.push(keyword.to_string());
        self
    }
    pub fn with_keywords_or(mut self, keywords: &[String]) -> Self {
        self.keywords_or.extend_from_slice(keywords);
        self
    }

    pub fn with_date(mut self, date: EventDate) -> Self {
        self.dates.push(date);
        self
    }
    pub fn with_dates(mut self, dates: &[EventDate]) -> Self {
        self.dates.extend_from_slice(dates);
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nicknames.push(nickname.to_string());
        self
    }
    pub fn with_nicknames(mut self, nicknames: &[String]) -> Self {
        self.nicknames.extend_from_slice(nicknames);
        self
    }

    pub fn with_owner_nickname(mut self, nickname: &str) -> Self {
        self.owner_nicknames.push(nickname.to_string());
        self
    }
    pub fn with_owner_nicknames(mut self, nicknames: &[String]) -> Self {
        self.owner_nicknames.extend_from_slice(nicknames);
        self
    }

    pub fn with_series_id(mut self, series_id: i64) -> Self {
        self.series_ids.push(series_id);
        self
    }
    pub fn with_series_ids(mut self, series_ids: &[i64]) -> Self {
        self.series_ids.extend_from_slice(series_ids);
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_month_rule(mut self, month_rule: MonthRule) -> Self {
        self.month_rule = month_rule;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_event_query() {
        let url = Url::parse("https://example.com/api/v1/event/").unwrap();

        insta::assert_snapshot!(EventQuery::default().add_to_url(&url).to_string(), @"https://example.com/api/v1/event/");

        insta::assert_snapshot!(EventQuery::default()
            .with_event_id(10)
            .with_event_id(20)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/event/?event_id=10%2C20");

        insta::assert_snapshot!(EventQuery::default()
            .with_keyword("rust lang")
            .with_count(10)
            .with_start(0)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/event/?keyword=rust+lang&start=0&count=10");

        insta::assert_snapshot!(EventQuery::default()
            .with_event_ids(vec![10, 20].as_slice())
            .with_keyword("a")
            .with_keyword("b")
            .with_keyword_or("c")
            .with_keyword_or("d")
            .with_dates(vec![
                EventDate::ymd(2018, 2, 10),
                EventDate::ymd(2019, 3, 11),
                EventDate::ym(2020, 4),
            ].as_slice())
            .with_nickname("foo")
            .with_nickname("bar")
            .with_owner_nicknames(vec!["foo".to_string(), "bar".to_string(), "baz".to_string()].as_slice())
            .with_series_ids(vec![1000, 2000, 5000].as_slice())
            .with_start(5)
            .with_order(Order::Update)
            .with_count(100)
            .with_format(Format::Json)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/event/?event_id=10%2C20&keyword=a%2Cb&keyword_or=c%2Cd&ymd=20180210%2C20190311&ym=202004&nickname=foo%2Cbar&owner_nickname=foo%2Cbar%2Cbaz&series_id=1000%2C2000%2C5000&start=5&order=1&count=100&format=json");

        insta::assert_snapshot!(EventQuery::default()
            .with_date(EventDate::ym(2019, 12))
            .with_order(Order::Create)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/event/?order=3");

        insta::assert_snapshot!(EventQuery::default()
            .with_date(EventDate::ym(2019, 12))
            .with_month_rule(MonthRule::Calendar)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/event/?ym=201912");
    }
}
