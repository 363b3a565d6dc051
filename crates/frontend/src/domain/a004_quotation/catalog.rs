use contracts::domain::a004_quotation::CatalogProduct;

/// Products offered in the quotation editor.
pub fn catalog() -> Vec<CatalogProduct> {
    [
        ("plan-ilimitado", "Plan Móvil Ilimitado", 65.0),
        ("plan-30gb", "Plan Móvil 30 GB", 45.0),
        ("hogar-200", "Internet Hogar 200 Mbps", 99.9),
        ("galaxy-a15", "Smartphone Galaxy A15", 749.0),
        ("router-wifi6", "Router WiFi 6", 189.0),
    ]
    .into_iter()
    .map(|(id, nombre, precio)| CatalogProduct {
        id: id.to_string(),
        nombre: nombre.to_string(),
        precio,
    })
    .collect()
}

pub fn find_product(id: &str) -> Option<CatalogProduct> {
    catalog().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_product() {
        let plan = find_product("plan-ilimitado").unwrap();
        assert_eq!(plan.nombre, "Plan Móvil Ilimitado");
        assert_eq!(plan.precio, 65.0);
        assert!(find_product("").is_none());
    }
}
