//! 外部ストアの日付テキスト
//!
//! ストアの `lastReviewDate` 列は手入力されることもあり、形式が揃っていません。
//! - `YYYY/MM/DD`（書き込み時は常にこの形式）
//! - `MM/DD`（年は呼び出し側の「今年」）
//! - `YYYY-MM-DD`
//!
//! 空文字や解釈できない値は「未復習」として `None` を返します。エラーにはしません。

use chrono::NaiveDate;

const WRITE_FORMAT: &str = "%Y/%m/%d";

pub fn parse_flexible_date(text: &str, current_year: i32) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match text.split('/').collect::<Vec<_>>().as_slice() {
        [year, month, day] => ymd(year.parse().ok()?, month, day),
        [month, day] => ymd(current_year, month, day),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
    }
}

fn ymd(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

pub fn format_review_date(date: NaiveDate) -> String {
    date.format(WRITE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::full("2024/06/01", day(2024, 6, 1))]
    #[case::full_unpadded("2024/6/1", day(2024, 6, 1))]
    #[case::partial("06/01", day(2026, 6, 1))]
    #[case::partial_unpadded("6/1", day(2026, 6, 1))]
    #[case::iso("2024-06-01", day(2024, 6, 1))]
    #[case::padded_whitespace(" 2024/06/01 ", day(2024, 6, 1))]
    fn accepted_formats(#[case] text: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_flexible_date(text, 2026), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::words("yesterday")]
    #[case::bad_month("2024/13/01")]
    #[case::bad_day("02/30")]
    #[case::too_many_parts("2024/06/01/09")]
    #[case::negative("-1/-1")]
    fn rejected_values_mean_never_reviewed(#[case] text: &str) {
        assert_eq!(parse_flexible_date(text, 2026), None);
    }

    #[test]
    fn partial_date_uses_given_year_for_leap_day() {
        assert_eq!(parse_flexible_date("02/29", 2024), Some(day(2024, 2, 29)));
        assert_eq!(parse_flexible_date("02/29", 2025), None);
    }

    #[test]
    fn writes_full_format() {
        assert_eq!(format_review_date(day(2024, 6, 1)), "2024/06/01");
    }
}
