use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core product entity.
///
/// Field names are Rust-side English; the wire format uses the fixed Spanish
/// keys clients already depend on (`nombre`, `precio`, `fecha_creacion`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    pub stock: i64,
    #[serde(rename = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Merge the supplied fields of `patch` into this product.
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    pub stock: i64,
}

/// Partial update. `None` means "not supplied"; `Some(0)` or `Some("")` are
/// real values and get written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make() -> Product {
        Product {
            id: 7,
            name: "Monitor".to_string(),
            description: "27 pulgadas".to_string(),
            price: 199.9,
            category: "Tecnologia".to_string(),
            stock: 4,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn serializes_with_spanish_field_names() {
        let value = serde_json::to_value(make()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["categoria", "descripcion", "fecha_creacion", "id", "nombre", "precio", "stock"]
        );
        assert_eq!(obj["nombre"], "Monitor");
        assert_eq!(obj["id"], 7);
    }

    #[test]
    fn new_product_requires_every_field() {
        let missing_price = json!({
            "nombre": "Teclado",
            "descripcion": "RGB",
            "categoria": "tecnologia",
            "stock": 5
        });
        assert!(serde_json::from_value::<NewProduct>(missing_price).is_err());
    }

    #[test]
    fn new_product_rejects_wrong_types() {
        let bad_stock = json!({
            "nombre": "Teclado",
            "descripcion": "RGB",
            "precio": 30.0,
            "categoria": "tecnologia",
            "stock": "cinco"
        });
        assert!(serde_json::from_value::<NewProduct>(bad_stock).is_err());
    }

    #[test]
    fn patch_leaves_absent_fields_unset() {
        let patch: ProductPatch = serde_json::from_value(json!({ "stock": 2 })).unwrap();
        assert_eq!(patch.stock, Some(2));
        assert!(patch.name.is_none());
        assert!(patch.price.is_none());
    }

    #[test]
    fn patch_null_counts_as_not_supplied() {
        let mut product = make();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "stock": null, "nombre": "X" })).unwrap();
        assert!(patch.stock.is_none());

        product.apply(patch);

        assert_eq!(product.name, "X");
        assert_eq!(product.stock, 4);
    }

    #[test]
    fn apply_writes_zero_and_empty_values() {
        let mut product = make();
        let created_at = product.created_at;
        let patch: ProductPatch =
            serde_json::from_value(json!({ "descripcion": "", "precio": 0.0, "stock": 0 }))
                .unwrap();

        product.apply(patch);

        assert_eq!(product.description, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.name, "Monitor");
        assert_eq!(product.id, 7);
        assert_eq!(product.created_at, created_at);
    }

    #[test]
    fn category_match_ignores_case() {
        let product = make();
        assert!(product.in_category("tecnologia"));
        assert!(product.in_category("TECNOLOGIA"));
        assert!(!product.in_category("hogar"));
    }
}
