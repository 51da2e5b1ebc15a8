//! Catalog store: the read-only list of sellable items.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::ids::ProductId;

/// A sellable item. Immutable for the duration of a sale session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub unit_price: Decimal,
    pub available_quantity: u32,
    pub category: String,
}

/// The single injected source of truth for products. Every consumer borrows
/// the same seeded snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<Vec<CatalogItem>>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn all(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Case-insensitive substring match on name or code, optionally narrowed
    /// to a category.
    pub fn search(&self, term: Option<&str>, category: Option<&str>) -> Vec<CatalogItem> {
        let term = term.map(str::to_lowercase);
        self.items
            .iter()
            .filter(|item| match &term {
                Some(term) => {
                    item.name.to_lowercase().contains(term)
                        || item.code.to_lowercase().contains(term)
                }
                None => true,
            })
            .filter(|item| match category {
                Some(category) => item.category.eq_ignore_ascii_case(category),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for item in self.items.iter() {
            match counts.iter_mut().find(|c| c.category == item.category) {
                Some(count) => count.count += 1,
                None => counts.push(CategoryCount {
                    category: item.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Sample stock until a real inventory backend is wired in.
fn seed_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: ProductId::new(),
            name: "iPhone 13 Pro Max 256GB".to_owned(),
            code: "IP13PM256".to_owned(),
            unit_price: Decimal::new(4200_00, 2),
            available_quantity: 5,
            category: "Smartphone".to_owned(),
        },
        CatalogItem {
            id: ProductId::new(),
            name: "Samsung Galaxy S23 Ultra".to_owned(),
            code: "SGS23U".to_owned(),
            unit_price: Decimal::new(3800_00, 2),
            available_quantity: 3,
            category: "Smartphone".to_owned(),
        },
        CatalogItem {
            id: ProductId::new(),
            name: "Cabo USB-C".to_owned(),
            code: "CABO001".to_owned(),
            unit_price: Decimal::new(25_00, 2),
            available_quantity: 50,
            category: "Acessorios".to_owned(),
        },
        CatalogItem {
            id: ProductId::new(),
            name: "iPad Pro 12.9".to_owned(),
            code: "IPADPRO129".to_owned(),
            unit_price: Decimal::new(8999_99, 2),
            available_quantity: 0,
            category: "Tablet".to_owned(),
        },
    ]
}

//-------------------------- Tests -------------------------------
