// models/filter.rs
use bson::{doc, Document};
use chrono::{DateTime, Datelike, Month, Utc};

use crate::models::transaction::Transaction;

/// Calendar month of `dateOfSale`, any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    Month(u32),
    // Name didn't parse; matches nothing
    Unrecognized,
}

impl MonthFilter {
    /// Accepts full English names or three-letter abbreviations, any case.
    pub fn parse(name: &str) -> Self {
        match name.trim().parse::<Month>() {
            Ok(month) => MonthFilter::Month(month.number_from_month()),
            Err(_) => MonthFilter::Unrecognized,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            MonthFilter::Month(n) => Some(*n),
            MonthFilter::Unrecognized => None,
        }
    }

    pub fn matches(&self, date: &DateTime<Utc>) -> bool {
        self.number() == Some(date.month())
    }

    pub fn to_document(&self) -> Document {
        match self {
            MonthFilter::Month(n) => {
                let month = *n as i32;
                doc! { "$expr": { "$eq": [{ "$month": "$dateOfSale" }, month] } }
            }
            MonthFilter::Unrecognized => doc! { "$expr": false },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionFilter {
    All,
    Search { text: String, price: Option<f64> },
    Month(MonthFilter),
}

impl TransactionFilter {
    /// Search and month never combine: non-blank search text wins and the
    /// month is dropped.
    pub fn build(search: Option<&str>, month: Option<&str>) -> Self {
        let search = search.filter(|s| !s.trim().is_empty());
        let month = month.filter(|m| !m.trim().is_empty());

        match (search, month) {
            (Some(text), _) => TransactionFilter::search(text),
            (None, Some(name)) => TransactionFilter::Month(MonthFilter::parse(name)),
            (None, None) => TransactionFilter::All,
        }
    }

    pub fn search(text: &str) -> Self {
        let price = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite());
        TransactionFilter::Search {
            text: text.to_string(),
            price,
        }
    }

    pub fn to_document(&self) -> Document {
        match self {
            TransactionFilter::All => doc! {},
            TransactionFilter::Search { text, price } => {
                let pattern = regex::escape(text);
                let mut clauses = vec![
                    doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                    doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
                ];
                if let Some(price) = *price {
                    clauses.push(doc! { "price": price });
                }
                doc! { "$or": clauses }
            }
            TransactionFilter::Month(month) => month.to_document(),
        }
    }

    /// [`to_document`](Self::to_document) evaluated in process.
    ///
    /// Case-insensitivity here is `str::to_lowercase` on both sides, while
    /// MongoDB folds with PCRE's `i` option. The two agree on ASCII. On other
    /// text they can differ: `to_lowercase` may expand one character into
    /// several (`İ` becomes `i̇`), PCRE folds one code point at a time.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Search { text, price } => {
                let needle = text.to_lowercase();
                transaction.title.to_lowercase().contains(&needle)
                    || transaction.description.to_lowercase().contains(&needle)
                    || price.map_or(false, |p| transaction.price == p)
            }
            TransactionFilter::Month(month) => month.matches(&transaction.date_of_sale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample;
    use bson::Bson;

    #[test]
    fn month_names_parse_case_insensitively() {
        assert_eq!(MonthFilter::parse("March"), MonthFilter::Month(3));
        assert_eq!(MonthFilter::parse("december"), MonthFilter::Month(12));
        assert_eq!(MonthFilter::parse("FEB"), MonthFilter::Month(2));
        assert_eq!(MonthFilter::parse(" June "), MonthFilter::Month(6));
        assert_eq!(MonthFilter::parse("Smarch"), MonthFilter::Unrecognized);
        assert_eq!(MonthFilter::parse("13"), MonthFilter::Unrecognized);
    }

    #[test]
    fn unrecognized_month_matches_nothing() {
        let filter = TransactionFilter::build(None, Some("Nonember"));
        let t = sample(1, "Lamp", "Desk lamp", 20.0, true, "2021-11-02");
        assert!(!filter.matches(&t));
        assert_eq!(filter.to_document(), doc! { "$expr": false });
    }

    #[test]
    fn month_filter_ignores_year() {
        let filter = TransactionFilter::build(None, Some("November"));
        assert!(filter.matches(&sample(1, "a", "b", 1.0, true, "2021-11-02")));
        assert!(filter.matches(&sample(2, "a", "b", 1.0, true, "2022-11-30")));
        assert!(!filter.matches(&sample(3, "a", "b", 1.0, true, "2021-12-01")));
    }

    #[test]
    fn search_overrides_month() {
        let both = TransactionFilter::build(Some("phone"), Some("February"));
        let search_only = TransactionFilter::build(Some("phone"), None);
        assert_eq!(both, search_only);
    }

    #[test]
    fn blank_inputs_match_everything() {
        assert_eq!(TransactionFilter::build(Some("   "), None), TransactionFilter::All);
        assert_eq!(TransactionFilter::build(None, Some("")), TransactionFilter::All);
        assert_eq!(TransactionFilter::All.to_document(), doc! {});
    }

    #[test]
    fn blank_search_falls_through_to_month() {
        assert_eq!(
            TransactionFilter::build(Some(" "), Some("April")),
            TransactionFilter::Month(MonthFilter::Month(4))
        );
    }

    #[test]
    fn numeric_search_also_matches_price() {
        let filter = TransactionFilter::build(Some("25"), None);
        let priced = sample(1, "Cable", "USB cable", 25.0, true, "2022-01-01");
        let textual = sample(2, "Pack of 25", "pens", 3.0, true, "2022-01-01");
        let neither = sample(3, "Cable", "USB cable", 26.0, true, "2022-01-01");
        assert!(filter.matches(&priced));
        assert!(filter.matches(&textual));
        assert!(!filter.matches(&neither));

        let document = filter.to_document();
        let clauses = document.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[2], Bson::Document(doc! { "price": 25.0 }));
    }

    #[test]
    fn text_search_is_case_insensitive_on_title_and_description() {
        let filter = TransactionFilter::build(Some("JACKET"), None);
        assert!(filter.matches(&sample(1, "Rain jacket", "x", 1.0, true, "2022-01-01")));
        assert!(filter.matches(&sample(2, "Coat", "a jacket-like coat", 1.0, true, "2022-01-01")));
        assert!(!filter.matches(&sample(3, "Coat", "wool", 1.0, true, "2022-01-01")));

        let document = filter.to_document();
        assert_eq!(document.get_array("$or").unwrap().len(), 2);
    }

    #[test]
    fn case_folding_is_plain_lowercasing() {
        let mixed = sample(1, "USB-C Hub", "x", 1.0, true, "2022-01-01");
        assert!(TransactionFilter::build(Some("usb-c"), None).matches(&mixed));
        assert!(TransactionFilter::build(Some("uSb-C HUB"), None).matches(&mixed));

        // `İ` lowercases to two code points, `i` plus a combining dot
        let dotted = sample(2, "İstanbul Mug", "x", 1.0, true, "2022-01-01");
        assert!(TransactionFilter::build(Some("i"), None).matches(&dotted));
        assert!(!TransactionFilter::build(Some("istanbul"), None).matches(&dotted));
    }

    #[test]
    fn search_text_is_matched_literally() {
        let filter = TransactionFilter::build(Some("c++ (2nd ed.)"), None);
        let document = filter.to_document();
        let clauses = document.get_array("$or").unwrap();
        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"c\+\+ \(2nd ed\.\)");
        assert_eq!(title.get_str("$options").unwrap(), "i");

        assert!(filter.matches(&sample(1, "C++ (2nd ed.) book", "x", 1.0, true, "2022-01-01")));
        assert!(!filter.matches(&sample(2, "cpp 2nd ed", "x", 1.0, true, "2022-01-01")));
    }

    #[test]
    fn month_document_compares_month_of_date_of_sale() {
        let document = MonthFilter::Month(3).to_document();
        assert_eq!(
            document,
            doc! { "$expr": { "$eq": [{ "$month": "$dateOfSale" }, 3] } }
        );
    }
}
