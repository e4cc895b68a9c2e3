// Catalog data, category slugs and filtering.

use craft_core::catalog::{Category, Filter, Product, PRODUCTS};

#[test]
fn slugs_round_trip_for_every_category() {
    for c in Category::ALL {
        assert_eq!(Category::from_slug(c.slug()), Some(c));
    }
    assert_eq!(Category::from_slug("macrame"), None);
}

#[test]
fn filter_parsing_falls_back_to_all() {
    assert_eq!(Filter::from_slug("all"), Filter::All);
    assert_eq!(
        Filter::from_slug("pottery"),
        Filter::Category(Category::Pottery)
    );
    assert_eq!(Filter::from_slug("unknown"), Filter::All);
}

#[test]
fn all_filter_matches_the_whole_catalog() {
    assert!(PRODUCTS.iter().all(|p| Filter::All.matches(p)));
}

#[test]
fn category_filter_selects_the_expected_products() {
    let pottery: Vec<&Product> = PRODUCTS
        .iter()
        .filter(|p| Filter::Category(Category::Pottery).matches(p))
        .collect();
    assert_eq!(pottery.len(), 2);
    assert!(pottery.iter().all(|p| p.category == Category::Pottery));

    let textiles = PRODUCTS
        .iter()
        .filter(|p| Filter::Category(Category::Textiles).matches(p))
        .count();
    assert_eq!(textiles, 1);
}

#[test]
fn every_category_has_at_least_one_product() {
    for c in Category::ALL {
        assert!(
            PRODUCTS.iter().any(|p| p.category == c),
            "no product in {:?}",
            c
        );
    }
}

#[test]
fn price_labels_group_thousands() {
    let labels: Vec<String> = PRODUCTS.iter().map(|p| p.price_label()).collect();
    assert!(labels.contains(&"Rs. 1,250".to_string()));
    assert!(labels.contains(&"Rs. 890".to_string()));
    assert!(labels.contains(&"Rs. 3,500".to_string()));

    let pricey = Product {
        name: "Carved Door Panel",
        price_rupees: 1_234_567,
        description: "Showpiece",
        category: Category::Woodwork,
    };
    assert_eq!(pricey.price_label(), "Rs. 1,234,567");
}
