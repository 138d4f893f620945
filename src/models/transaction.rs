// models/transaction.rs
use bson::{doc, oid::ObjectId, Bson, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_sold() -> bool {
    true
}

// Stored document, one per product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,

    // Product id from the feed, not the storage key
    #[serde(rename = "id")]
    pub product_id: i64,

    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,

    #[serde(default = "default_sold")]
    pub sold: bool,

    #[serde(default)]
    pub image: String,

    #[serde(
        rename = "dateOfSale",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub date_of_sale: DateTime<Utc>,
}

// What the API hands out: hex `_id` and an RFC 3339 `dateOfSale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sold: bool,
    pub image: String,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        TransactionResponse {
            object_id: t.object_id.map(|id| id.to_hex()).unwrap_or_default(),
            id: t.product_id,
            title: t.title,
            description: t.description,
            price: t.price,
            category: t.category,
            sold: t.sold,
            image: t.image,
            date_of_sale: t.date_of_sale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub total_transactions: u64,
    pub transactions: Vec<TransactionResponse>,
    pub current_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatistics {
    pub total_sale_amount: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

impl MonthlyStatistics {
    /// Folds already-filtered records the same way the `$group` stage does.
    pub fn accumulate<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions
            .into_iter()
            .fold(MonthlyStatistics::default(), |mut stats, t| {
                if t.sold {
                    stats.total_sale_amount += t.price;
                    stats.total_sold_items += 1;
                } else {
                    stats.total_not_sold_items += 1;
                }
                stats
            })
    }

    /// Reads the single document produced by [`statistics_pipeline`].
    pub fn from_group_document(doc: &Document) -> Self {
        MonthlyStatistics {
            total_sale_amount: number_field(doc, "totalSaleAmount"),
            total_sold_items: number_field(doc, "totalSoldItems") as u64,
            total_not_sold_items: number_field(doc, "totalNotSoldItems") as u64,
        }
    }

    pub fn total_items(&self) -> u64 {
        self.total_sold_items + self.total_not_sold_items
    }
}

// `$sum` yields Int32, Int64 or Double depending on the inputs
fn number_field(doc: &Document, key: &str) -> f64 {
    match doc.get(key) {
        Some(Bson::Double(v)) => *v,
        Some(Bson::Int32(v)) => *v as f64,
        Some(Bson::Int64(v)) => *v as f64,
        _ => 0.0,
    }
}

/// `$match` on `filter`, then one `$group` that sums sold prices and counts
/// sold / unsold records.
pub fn statistics_pipeline(filter: Document) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        doc! {
            "$group": {
                "_id": Bson::Null,
                "totalSaleAmount": {
                    "$sum": { "$cond": [{ "$eq": ["$sold", true] }, "$price", 0] }
                },
                "totalSoldItems": {
                    "$sum": { "$cond": [{ "$eq": ["$sold", true] }, 1, 0] }
                },
                "totalNotSoldItems": {
                    "$sum": { "$cond": [{ "$eq": ["$sold", false] }, 1, 0] }
                },
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample;

    #[test]
    fn sold_defaults_to_true_when_missing() {
        let stored = doc! {
            "id": 7_i64,
            "title": "Desk",
            "description": "Oak desk",
            "price": 120.0,
            "category": "furniture",
            "dateOfSale": bson::DateTime::from_millis(1_646_870_400_000),
        };
        let t: Transaction = bson::from_document(stored).unwrap();
        assert!(t.sold);
        assert_eq!(t.image, "");
        assert_eq!(t.product_id, 7);
    }

    #[test]
    fn missing_required_field_fails_decoding() {
        let stored = doc! {
            "id": 7_i64,
            "description": "no title",
            "price": 1.0,
            "category": "misc",
            "dateOfSale": bson::DateTime::from_millis(0),
        };
        assert!(bson::from_document::<Transaction>(stored).is_err());
    }

    #[test]
    fn response_uses_api_field_names() {
        let mut t = sample(3, "Phone", "Smart phone", 25.0, true, "2022-02-14");
        t.object_id = Some(ObjectId::new());
        let hex = t.object_id.unwrap().to_hex();

        let json = serde_json::to_value(TransactionResponse::from(t)).unwrap();
        assert_eq!(json["_id"], hex);
        assert_eq!(json["id"], 3);
        assert_eq!(json["dateOfSale"], "2022-02-14T00:00:00Z");
    }

    #[test]
    fn accumulate_counts_sold_and_unsold() {
        let records = vec![
            sample(1, "A", "a", 10.0, true, "2022-03-01"),
            sample(2, "B", "b", 15.5, true, "2022-03-02"),
            sample(3, "C", "c", 99.0, false, "2022-03-03"),
        ];
        let stats = MonthlyStatistics::accumulate(&records);
        assert_eq!(stats.total_sale_amount, 25.5);
        assert_eq!(stats.total_sold_items, 2);
        assert_eq!(stats.total_not_sold_items, 1);
        assert_eq!(stats.total_items(), 3);
    }

    #[test]
    fn group_document_accepts_any_numeric_type() {
        let group = doc! {
            "_id": Bson::Null,
            "totalSaleAmount": 42_i32,
            "totalSoldItems": 3_i64,
            "totalNotSoldItems": 1.0,
        };
        let stats = MonthlyStatistics::from_group_document(&group);
        assert_eq!(stats.total_sale_amount, 42.0);
        assert_eq!(stats.total_sold_items, 3);
        assert_eq!(stats.total_not_sold_items, 1);

        assert_eq!(
            MonthlyStatistics::from_group_document(&doc! {}),
            MonthlyStatistics::default()
        );
    }

    #[test]
    fn pipeline_matches_then_groups() {
        let pipeline = statistics_pipeline(doc! { "sold": true });
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline[0].get_document("$match").unwrap(), &doc! { "sold": true });
        let group = pipeline[1].get_document("$group").unwrap();
        assert!(group.contains_key("totalSaleAmount"));
        assert!(group.contains_key("totalSoldItems"));
        assert!(group.contains_key("totalNotSoldItems"));
    }
}
