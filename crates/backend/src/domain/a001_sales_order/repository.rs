use std::sync::RwLock;

use chrono::{Duration, NaiveDate};
use contracts::domain::a001_sales_order::dto::{SalesOrderDto, SalesOrderStatus, REGIONS};
use once_cell::sync::Lazy;
use uuid::Uuid;

const SEED_SIZE: usize = 240;

const CUSTOMERS: [&str; 6] = [
    "ООО Солнечный дом",
    "АО ЭнергоЮг",
    "ИП Петров",
    "ООО ГелиоСтрой",
    "Школа №12",
    "ООО Агро Свет",
];

static ORDERS: Lazy<RwLock<Vec<SalesOrderDto>>> = Lazy::new(|| RwLock::new(seed_orders(SEED_SIZE)));

/// Детерминированный набор заказов для демо-списка (меняется только id)
pub fn seed_orders(count: usize) -> Vec<SalesOrderDto> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..count)
        .map(|i| {
            let capacity_kw = 3.0 + (i % 17) as f64 * 1.5;
            SalesOrderDto {
                id: Uuid::new_v4().to_string(),
                order_no: format!("SO-{:05}", i + 1),
                customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                region: REGIONS[(i / 3) % REGIONS.len()].to_string(),
                status: SalesOrderStatus::ALL[(i * 7) % SalesOrderStatus::ALL.len()],
                capacity_kw,
                amount: (capacity_kw * 52_000.0 + (i % 11) as f64 * 1_250.0).round(),
                order_date: start + Duration::days((i * 3 % 365) as i64),
            }
        })
        .collect()
}

pub fn list_all() -> anyhow::Result<Vec<SalesOrderDto>> {
    let orders = ORDERS
        .read()
        .map_err(|e| anyhow::anyhow!("sales order store poisoned: {}", e))?;
    Ok(orders.clone())
}

pub fn get_by_id(id: &str) -> anyhow::Result<Option<SalesOrderDto>> {
    let orders = ORDERS
        .read()
        .map_err(|e| anyhow::anyhow!("sales order store poisoned: {}", e))?;
    Ok(orders.iter().find(|o| o.id == id).cloned())
}

pub fn count() -> usize {
    ORDERS.read().map(|orders| orders.len()).unwrap_or(0)
}
