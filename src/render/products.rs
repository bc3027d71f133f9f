//! Catalog listing view.

use std::fmt::Write;

use crate::analysis::utility::mean;
use crate::dataset::Product;

/// Renders the product catalog: item count, average parsed price when any
/// price parses, and a title/price table. An empty catalog renders a warning
/// line instead.
pub fn render_products(products: &[Product]) -> String {
    let mut out = String::new();

    writeln!(out, "== Products ==").unwrap();

    if products.is_empty() {
        writeln!(out, "The product list is empty.").unwrap();
        return out;
    }

    let prices: Vec<f64> = products.iter().filter_map(|p| p.price_value()).collect();
    let avg = mean(&prices);

    writeln!(out, "Items: {}", products.len()).unwrap();
    if avg > 0.0 {
        writeln!(out, "Average price: {avg:.2}").unwrap();
    }
    writeln!(out).unwrap();

    let title_width = products
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    writeln!(out, "{:<title_width$}  price", "title").unwrap();
    for product in products {
        writeln!(out, "{:<title_width$}  {}", product.title, product.price).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, price: &str) -> Product {
        Product {
            title: title.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_renders_count_and_average() {
        let out = render_products(&[product("A", "10.00"), product("B", "20.00")]);
        assert!(out.contains("Items: 2"));
        assert!(out.contains("Average price: 15.00"));
        assert!(out.contains("A"));
        assert!(out.contains("20.00"));
    }

    #[test]
    fn test_unparseable_prices_skip_average() {
        let out = render_products(&[product("A", "gratis"), product("B", "n/a")]);
        assert!(out.contains("Items: 2"));
        assert!(!out.contains("Average price"));
    }

    #[test]
    fn test_empty_catalog_warns() {
        let out = render_products(&[]);
        assert!(out.contains("empty"));
    }
}
