// src/catalog/sample.rs
//! Built-in demo datasets.

use super::Dataset;
use crate::model::Record;

pub(super) fn datasets() -> Vec<Dataset> {
    vec![sales(), users(), products(), orders(), inventory()]
}

fn sales_row(month: &str, region: &str, amount: f64, quantity: f64) -> Record {
    Record::new()
        .with("month", month)
        .with("quarter", "Q1")
        .with("year", 2024.0)
        .with("region", region)
        .with("category", "Electronics")
        .with("amount", amount)
        .with("quantity", quantity)
        .with("revenue", amount)
}

fn sales() -> Dataset {
    Dataset::new("sales")
        .with_metrics(&["amount", "quantity", "revenue"])
        .with_dimensions(&["month", "quarter", "year", "region", "category"])
        .with_records(vec![
            sales_row("Jan", "North", 45000.0, 120.0),
            sales_row("Jan", "South", 38000.0, 95.0),
            sales_row("Feb", "North", 52000.0, 140.0),
            sales_row("Feb", "South", 41000.0, 105.0),
            sales_row("Mar", "North", 48000.0, 130.0),
            sales_row("Mar", "South", 44000.0, 115.0),
        ])
}

fn users_row(month: &str, channel: &str, signups: f64, active: f64, sessions: f64) -> Record {
    Record::new()
        .with("month", month)
        .with("year", 2024.0)
        .with("channel", channel)
        .with("signups", signups)
        .with("activeUsers", active)
        .with("sessions", sessions)
}

fn users() -> Dataset {
    Dataset::new("users")
        .with_metrics(&["signups", "activeUsers", "sessions"])
        .with_dimensions(&["month", "year", "channel"])
        .with_records(vec![
            users_row("Jan", "Organic", 1200.0, 8500.0, 45000.0),
            users_row("Jan", "Paid", 800.0, 3200.0, 18000.0),
            users_row("Feb", "Organic", 1350.0, 9200.0, 51000.0),
            users_row("Feb", "Paid", 950.0, 3800.0, 21000.0),
        ])
}

fn product_row(product: &str, price: f64, quantity: f64, revenue: f64, cost: f64) -> Record {
    Record::new()
        .with("product", product)
        .with("category", "Electronics")
        .with("price", price)
        .with("quantity", quantity)
        .with("revenue", revenue)
        .with("cost", cost)
        .with("profit", revenue - cost)
}

fn products() -> Dataset {
    Dataset::new("products")
        .with_metrics(&["price", "quantity", "revenue", "cost", "profit"])
        .with_dimensions(&["product", "category"])
        .with_records(vec![
            product_row("Laptop Pro", 1299.0, 450.0, 584550.0, 400000.0),
            product_row("Wireless Mouse", 49.0, 2200.0, 107800.0, 44000.0),
            product_row("USB-C Hub", 79.0, 1800.0, 142200.0, 54000.0),
            product_row("Headphones", 199.0, 1100.0, 218900.0, 88000.0),
        ])
}

fn order_row(month: &str, status: &str, count: f64, amount: f64) -> Record {
    Record::new()
        .with("month", month)
        .with("status", status)
        .with("region", "North")
        .with("count", count)
        .with("amount", amount)
}

fn orders() -> Dataset {
    Dataset::new("orders")
        .with_metrics(&["count", "amount"])
        .with_dimensions(&["month", "status", "region"])
        .with_records(vec![
            order_row("Jan", "completed", 1250.0, 125000.0),
            order_row("Jan", "pending", 85.0, 8500.0),
            order_row("Feb", "completed", 1380.0, 138000.0),
            order_row("Mar", "completed", 1520.0, 152000.0),
        ])
}

fn inventory_row(product: &str, quantity: f64, status: &str) -> Record {
    Record::new()
        .with("product", product)
        .with("category", "Electronics")
        .with("quantity", quantity)
        .with("status", status)
}

fn inventory() -> Dataset {
    Dataset::new("inventory")
        .with_metrics(&["quantity"])
        .with_dimensions(&["product", "category", "status"])
        .with_records(vec![
            inventory_row("Laptop Pro", 125.0, "in_stock"),
            inventory_row("Wireless Mouse", 580.0, "in_stock"),
            inventory_row("USB-C Hub", 45.0, "low_stock"),
            inventory_row("Headphones", 0.0, "out_of_stock"),
        ])
}
