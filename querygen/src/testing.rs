/// Not a valid query; lets tests tell an overwritten file from a stale one.
pub(crate) const STALE_QUERY: &str = "stale";

pub(crate) const SMALL_CONFIG: &str = r#"{
  "count": 12,
  "min_len": 2,
  "max_len": 6,
  "low": 10,
  "high": 40
}"#;

pub(crate) const PARTIAL_CONFIG: &str = r#"{"count": 3}"#;
