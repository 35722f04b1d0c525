use chrono::{DateTime, Utc};

/// 統計集計の対象範囲。
#[derive(Debug, Clone)]
pub enum SalesScope {
    All,
    Host(String),
    Guest(String),
}

/// 予約レコードの (date, price) 射影。集計はこの二列しか読まない。
#[derive(Debug, Clone, PartialEq)]
pub struct SalePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}
