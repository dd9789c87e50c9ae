use serde::{Deserialize, Deserializer, Serialize};

use super::de;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn null_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_page))
}

fn null_page_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_page_size))
}

/// One page of a paginated endpoint. `total_records` is what the server
/// reports for the whole result set, not the number of records held here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "default_page", deserialize_with = "null_page")]
    pub page: u32,
    #[serde(default = "default_page_size", deserialize_with = "null_page_size")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "de::null_default")]
    pub total_records: usize,
    #[serde(default = "Vec::new", deserialize_with = "de::null_default")]
    pub records: Vec<T>,
    pub sort_key: Option<String>,
    pub sort_direction: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            total_records: 0,
            records: Vec::new(),
            sort_key: None,
            sort_direction: None,
        }
    }
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Whether later pages hold more records
    pub fn has_more(&self) -> bool {
        (self.page as usize).saturating_mul(self.page_size as usize) < self.total_records
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{HistoryRecord, QueueRecord};
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let page: Page<QueueRecord> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_records, 0);
        assert!(page.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_null_records() {
        let page: Page<HistoryRecord> =
            serde_json::from_value(json!({"totalRecords": 4, "records": null})).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total_records, 4);
    }

    #[test]
    fn test_null_page_numbers() {
        let page: Page<QueueRecord> =
            serde_json::from_value(json!({"page": null, "pageSize": null, "totalRecords": null}))
                .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_records, 0);
    }

    #[test]
    fn test_records_in_order() {
        let page: Page<HistoryRecord> = serde_json::from_value(json!({
            "page": 2,
            "pageSize": 2,
            "totalRecords": 5,
            "sortKey": "date",
            "sortDirection": "descending",
            "records": [{"id": 3}, {"id": 4}],
        }))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert!(page.has_more());
        assert_eq!(page.sort_key.as_deref(), Some("date"));
        let ids: Vec<i64> = page.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_last_page_has_no_more() {
        let page: Page<HistoryRecord> = serde_json::from_value(json!({
            "page": 3, "pageSize": 2, "totalRecords": 5, "records": [{"id": 5}],
        }))
        .unwrap();
        assert!(!page.has_more());
    }
}
