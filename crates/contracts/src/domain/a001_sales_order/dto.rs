use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::listing::{ListingQueryConfig, ListingRecord};

pub const DEFAULT_LIMIT: u32 = 20;

/// Ключи фильтров колонок списка заказов (имена query-параметров)
pub const FILTER_KEYS: [&str; 3] = ["status", "region", "customer"];

/// Регионы поставки (значения фильтра `region`)
pub const REGIONS: [&str; 4] = ["Север", "Юг", "Запад", "Восток"];

pub fn listing_config() -> ListingQueryConfig {
    ListingQueryConfig::new(DEFAULT_LIMIT, FILTER_KEYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesOrderStatus {
    Draft,
    Confirmed,
    Shipped,
    Invoiced,
    Cancelled,
}

impl SalesOrderStatus {
    pub const ALL: [SalesOrderStatus; 5] = [
        SalesOrderStatus::Draft,
        SalesOrderStatus::Confirmed,
        SalesOrderStatus::Shipped,
        SalesOrderStatus::Invoiced,
        SalesOrderStatus::Cancelled,
    ];

    /// Значение в query string и JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "draft",
            SalesOrderStatus::Confirmed => "confirmed",
            SalesOrderStatus::Shipped => "shipped",
            SalesOrderStatus::Invoiced => "invoiced",
            SalesOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "Черновик",
            SalesOrderStatus::Confirmed => "Подтверждён",
            SalesOrderStatus::Shipped => "Отгружен",
            SalesOrderStatus::Invoiced => "Выставлен счёт",
            SalesOrderStatus::Cancelled => "Отменён",
        }
    }
}

/// Строка списка заказов на поставку солнечного оборудования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderDto {
    pub id: String,
    pub order_no: String,
    pub customer: String,
    pub region: String,
    pub status: SalesOrderStatus,
    /// Мощность комплекта, кВт
    pub capacity_kw: f64,
    pub amount: f64,
    pub order_date: NaiveDate,
}

impl ListingRecord for SalesOrderDto {
    fn matches_query(&self, query: &str) -> bool {
        [&self.order_no, &self.customer, &self.region]
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.as_str().to_string()),
            "region" => Some(self.region.clone()),
            "customer" => Some(self.customer.clone()),
            _ => None,
        }
    }

    fn compare_by_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "order_no" => Some(self.order_no.cmp(&other.order_no)),
            "customer" => Some(self.customer.cmp(&other.customer)),
            "order_date" => Some(self.order_date.cmp(&other.order_date)),
            "capacity_kw" => self.capacity_kw.partial_cmp(&other.capacity_kw),
            "amount" => self.amount.partial_cmp(&other.amount),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_query_value() {
        for status in SalesOrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    fn order(order_no: &str, customer: &str, amount: f64) -> SalesOrderDto {
        SalesOrderDto {
            id: order_no.to_lowercase(),
            order_no: order_no.to_string(),
            customer: customer.to_string(),
            region: "Юг".to_string(),
            status: SalesOrderStatus::Confirmed,
            capacity_kw: 10.0,
            amount,
            order_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_listing_record_fields() {
        let a = order("SO-0001", "ООО Солнечный дом", 1500.0);
        let b = order("SO-0002", "ИП Петров", 900.0);

        assert!(a.matches_query("солнечный"));
        assert!(b.matches_query("so-0002"));
        assert!(!b.matches_query("солнечный"));

        assert_eq!(a.filter_value("status").as_deref(), Some("confirmed"));
        assert_eq!(a.filter_value("unknown"), None);

        assert_eq!(a.compare_by_field(&b, "amount"), Some(Ordering::Greater));
        assert_eq!(a.compare_by_field(&b, "order_no"), Some(Ordering::Less));
        assert_eq!(a.compare_by_field(&b, "color"), None);
    }

    #[test]
    fn test_listing_config() {
        let config = listing_config();
        assert_eq!(config.default_limit, DEFAULT_LIMIT);
        assert!(config.is_filter_key("region"));
        assert!(!config.is_filter_key("amount"));
    }
}
