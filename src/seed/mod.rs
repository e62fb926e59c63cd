use tracing::info;

use crate::models::{NewProduct, Product};
use crate::store::ProductStore;

/// Fixed startup catalogue: (nombre, descripcion, precio, categoria, stock).
static INITIAL_PRODUCTS: &[(&str, &str, f64, &str, i64)] = &[
    (
        "Laptop Gamer",
        "Laptop para gaming de alta gama",
        1500.99,
        "tecnologia",
        10,
    ),
    (
        "Mouse Inalámbrico",
        "Mouse ergonómico inalámbrico",
        45.50,
        "tecnologia",
        25,
    ),
];

/// Insert the startup catalogue through the regular create path so the id
/// counter advances past every seeded record.
pub fn seed_products(store: &mut ProductStore) -> Vec<Product> {
    let seeded: Vec<Product> = INITIAL_PRODUCTS
        .iter()
        .map(|&(name, description, price, category, stock)| {
            store.create(NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                stock,
            })
        })
        .collect();

    info!("Seeded {} products", seeded.len());
    seeded
}
