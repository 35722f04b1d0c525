use chrono::{DateTime, Datelike, Utc};
use kernel::model::stat::SalePoint;
use serde::Serialize;
use serde_json::{json, Value};

/// チャート列を組み立てる。先頭にラベル行 ["Day", "Sales"] を置き、
/// 以降は予約ごとに ["日/月", price] をレコード順で並べる。
/// ラベル行を先頭に置く形式はチャート描画側との取り決めなので崩さない。
pub fn chart_data(points: &[SalePoint]) -> Vec<Value> {
    let mut rows = Vec::with_capacity(points.len() + 1);
    rows.push(json!(["Day", "Sales"]));
    rows.extend(
        points
            .iter()
            .map(|p| json!([format!("{}/{}", p.date.day(), p.date.month()), p.price])),
    );
    rows
}

pub fn total_price(points: &[SalePoint]) -> f64 {
    points.iter().map(|p| p.price).sum()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatResponse {
    pub total_users: i64,
    pub total_rooms: i64,
    pub total_bookings: i64,
    pub total_price: f64,
    pub chart_data: Vec<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStatResponse {
    pub total_rooms: i64,
    pub total_bookings: i64,
    pub total_price: f64,
    pub chart_data: Vec<Value>,
    pub host_since: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestStatResponse {
    pub total_bookings: i64,
    pub total_price: f64,
    pub chart_data: Vec<Value>,
    pub guest_since: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(year: i32, month: u32, day: u32, price: f64) -> SalePoint {
        SalePoint {
            date: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn chart_starts_with_the_header_row() {
        let rows = chart_data(&[point(2024, 9, 5, 100.0), point(2024, 10, 2, 50.0)]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], json!(["Day", "Sales"]));
        assert_eq!(rows[1], json!(["5/9", 100.0]));
        assert_eq!(rows[2], json!(["2/10", 50.0]));
    }

    #[test]
    fn empty_scope_still_has_the_header() {
        let rows = chart_data(&[]);
        assert_eq!(rows, vec![json!(["Day", "Sales"])]);
    }

    #[test]
    fn revenue_is_the_sum_of_prices() {
        let points = [point(2024, 9, 5, 100.0), point(2024, 10, 2, 50.0)];
        assert_eq!(total_price(&points), 150.0);
        assert_eq!(total_price(&[]), 0.0);
    }

    #[test]
    fn chart_rows_keep_record_order_not_date_order() {
        // 日付順には並べ替えない
        let rows = chart_data(&[point(2024, 12, 11, 1030.0), point(2024, 9, 5, 1000.0)]);
        assert_eq!(rows[1], json!(["11/12", 1030.0]));
        assert_eq!(rows[2], json!(["5/9", 1000.0]));
    }
}
