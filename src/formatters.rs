use crate::models::Product;

/// Shown instead of the list when the catalog has no products
pub const EMPTY_CATALOG_MESSAGE: &str = "No products in the catalog.";

pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// One card per product, numbered by position so the numbers can be fed
/// back into `show`, `set-stock` and `remove`.
pub fn format_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{EMPTY_CATALOG_MESSAGE}\n");
    }

    let mut output = String::new();
    for (index, product) in products.iter().enumerate() {
        output.push_str(&format!("[{index}] {}\n", product.name));
        output.push_str(&format!("    Price: {}\n", format_price(product.price)));
        output.push_str(&format!("    Stock: {}\n", product.stock));
    }
    output
}

/// Full detail view: the fixed fields followed by every extra attribute
pub fn format_product_details(index: usize, product: &Product) -> String {
    let mut output = format!("Product details [{index}]\n");
    output.push_str(&format!("  Name: {}\n", product.name));
    output.push_str(&format!("  Price: {}\n", format_price(product.price)));
    output.push_str(&format!("  Stock: {}\n", product.stock));

    for (name, value) in &product.attributes {
        output.push_str(&format!("  {name}: {value}\n"));
    }
    output
}
