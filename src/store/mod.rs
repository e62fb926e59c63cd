use chrono::Utc;
use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, ProductPatch};

/// In-memory product collection plus the id counter.
///
/// `IndexMap` gives O(1) lookup by id while iterating in insertion order, so
/// listing needs no sort. Removal goes through `shift_remove` to keep that
/// order intact.
///
/// The store itself is not synchronised; `AppState` wraps it in a single
/// `RwLock` so the map and the counter always move together.
#[derive(Debug)]
pub struct ProductStore {
    products: IndexMap<u64, Product>,
    next_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: IndexMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> AppResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(AppError::product_not_found)
    }

    pub fn create(&mut self, payload: NewProduct) -> Product {
        let product = Product {
            id: self.allocate_id(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            stock: payload.stock,
            created_at: Utc::now(),
        };
        self.products.insert(product.id, product.clone());
        product
    }

    pub fn update(&mut self, id: u64, patch: ProductPatch) -> AppResult<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(AppError::product_not_found)?;
        product.apply(patch);
        Ok(product.clone())
    }

    /// Remove a product, returning what was stored. The id is not reused.
    pub fn delete(&mut self, id: u64) -> AppResult<Product> {
        self.products
            .shift_remove(&id)
            .ok_or_else(AppError::product_not_found)
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect()
    }
}
