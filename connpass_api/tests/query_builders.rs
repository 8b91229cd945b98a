use connpass_api::{build_url, EventDate, EventQuery, Format, MonthRule, Order, BASE_URL};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/v1/event/").unwrap()
}

fn param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn full_query() -> EventQuery {
    EventQuery::default()
        .with_event_ids(&[10, 20])
        .with_keyword("a")
        .with_keyword("b")
        .with_keywords_or(&["c".to_string(), "d".to_string()])
        .with_date(EventDate::ymd(2018, 2, 10))
        .with_date(EventDate::ymd(2019, 3, 11))
        .with_date(EventDate::ym(2020, 4))
        .with_nicknames(&["foo".to_string(), "bar".to_string()])
        .with_owner_nickname("foo")
        .with_owner_nickname("bar")
        .with_owner_nickname("baz")
        .with_series_ids(&[1000, 2000, 5000])
        .with_start(5)
        .with_order(Order::Update)
        .with_count(100)
        .with_format(Format::Json)
}

#[test]
fn build_url_no_query() {
    let url = build_url(&EventQuery::default()).unwrap();
    assert_eq!(url, BASE_URL);
    assert_eq!(Url::parse(&url).unwrap().query(), None);
}

#[test]
fn build_url_with_query() {
    let url = Url::parse(&build_url(&full_query()).unwrap()).unwrap();
    assert_eq!(url.host_str(), Some("connpass.com"));
    assert_eq!(url.path(), "/api/v1/event/");

    let expected = [
        ("event_id", "10,20"),
        ("keyword", "a,b"),
        ("keyword_or", "c,d"),
        ("ymd", "20180210,20190311"),
        ("ym", "202004"),
        ("nickname", "foo,bar"),
        ("owner_nickname", "foo,bar,baz"),
        ("series_id", "1000,2000,5000"),
        ("start", "5"),
        ("order", "1"),
        ("count", "100"),
        ("format", "json"),
    ];
    for (key, value) in expected {
        assert_eq!(param(&url, key).as_deref(), Some(value), "key {}", key);
    }
}

#[test]
fn keys_follow_insertion_order() {
    let url = full_query().add_to_url(&base_url());
    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(
        keys,
        vec![
            "event_id",
            "keyword",
            "keyword_or",
            "ymd",
            "ym",
            "nickname",
            "owner_nickname",
            "series_id",
            "start",
            "order",
            "count",
            "format",
        ]
    );
}

#[test]
fn build_url_is_idempotent() {
    let query = full_query();
    assert_eq!(build_url(&query).unwrap(), build_url(&query).unwrap());
}

#[test]
fn december_is_dropped_by_default() {
    let url = EventQuery::default()
        .with_date(EventDate::ymd(2019, 12, 24))
        .with_date(EventDate::ym(2019, 12))
        .add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn december_kept_with_calendar_rule() {
    let url = EventQuery::default()
        .with_date(EventDate::ymd(2019, 12, 24))
        .with_month_rule(MonthRule::Calendar)
        .add_to_url(&base_url());
    assert_eq!(param(&url, "ymd").as_deref(), Some("20191224"));
    assert_eq!(param(&url, "ym"), None);
}

#[test]
fn only_non_empty_bucket_emitted() {
    let url = EventQuery::default()
        .with_date(EventDate::ym(2019, 1))
        .with_date(EventDate::ym(2019, 2))
        .add_to_url(&base_url());
    assert_eq!(param(&url, "ym").as_deref(), Some("201901,201902"));
    assert_eq!(param(&url, "ymd"), None);
}

#[test]
fn zero_start_is_sent() {
    let url = EventQuery::default().with_start(0).add_to_url(&base_url());
    assert_eq!(url.query(), Some("start=0"));
}

#[test]
fn order_variants() {
    for (order, expected) in [(Order::Update, "1"), (Order::Start, "2"), (Order::Create, "3")] {
        let url = EventQuery::default().with_order(order).add_to_url(&base_url());
        assert_eq!(param(&url, "order").as_deref(), Some(expected));
    }
}

#[test]
fn keywords_are_percent_encoded() {
    let url = EventQuery::default()
        .with_keyword("機械学習")
        .with_keyword("a&b")
        .add_to_url(&base_url());
    assert!(!url.query().unwrap().contains('&'));
    assert_eq!(param(&url, "keyword").as_deref(), Some("機械学習,a&b"));
}
