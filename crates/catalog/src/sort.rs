//! Sort engine.

use std::cmp::Reverse;

use crate::product::Product;

/// Orderings offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    MostRecent,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::MostRecent,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
    ];

    /// Parse a dropdown option value. Unknown values yield `None`, which
    /// leaves the order untouched.
    pub fn parse(option: &str) -> Option<Self> {
        match option.trim() {
            "preco-crescente" | "price-asc" => Some(Self::PriceAscending),
            "preco-decrescente" | "price-desc" => Some(Self::PriceDescending),
            "mais-recente" | "most-recent" => Some(Self::MostRecent),
            _ => None,
        }
    }

    /// Value carried by the `<option>` / dropdown item.
    pub fn option_value(&self) -> &'static str {
        match self {
            SortKey::PriceAscending => "preco-crescente",
            SortKey::PriceDescending => "preco-decrescente",
            SortKey::MostRecent => "mais-recente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAscending => "Menor preço",
            SortKey::PriceDescending => "Maior preço",
            SortKey::MostRecent => "Mais recentes",
        }
    }
}

/// Stable in-place sort. `None` keeps the input order.
///
/// Most-recent puts products with an unparseable date after every dated one.
pub fn sort_products(products: &mut [Product], key: Option<SortKey>) {
    let Some(key) = key else {
        return;
    };

    match key {
        SortKey::PriceAscending => {
            products.sort_by(|a, b| a.price.amount().total_cmp(&b.price.amount()))
        }
        SortKey::PriceDescending => {
            products.sort_by(|a, b| b.price.amount().total_cmp(&a.price.amount()))
        }
        SortKey::MostRecent => products.sort_by_cached_key(|p| Reverse(p.timestamp())),
    }

    tracing::debug!(key = key.option_value(), count = products.len(), "products sorted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::test_support::product;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("A", 50.0, "Preto", &[], "2021-05-01"),
            product("B", 10.0, "Preto", &[], "2022-01-15"),
            product("C", 50.0, "Preto", &[], "not a date"),
            product("D", 99.9, "Preto", &[], "2020-12-31T23:59:59Z"),
        ]
    }

    #[test]
    fn parses_option_values() {
        assert_eq!(SortKey::parse("preco-crescente"), Some(SortKey::PriceAscending));
        assert_eq!(SortKey::parse("preco-decrescente"), Some(SortKey::PriceDescending));
        assert_eq!(SortKey::parse("mais-recente"), Some(SortKey::MostRecent));
        assert_eq!(SortKey::parse("most-recent"), Some(SortKey::MostRecent));
        assert_eq!(SortKey::parse("relevancia"), None);

        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.option_value()), Some(key));
        }
    }

    #[test]
    fn ascending_price_is_stable() {
        let mut products = sample();
        sort_products(&mut products, Some(SortKey::PriceAscending));
        assert_eq!(names(&products), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn descending_price_is_stable() {
        let mut products = sample();
        sort_products(&mut products, Some(SortKey::PriceDescending));
        assert_eq!(names(&products), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn most_recent_first_and_undated_last() {
        let mut products = sample();
        sort_products(&mut products, Some(SortKey::MostRecent));
        assert_eq!(names(&products), vec!["B", "A", "D", "C"]);
    }

    #[test]
    fn unknown_key_keeps_order() {
        let mut products = sample();
        sort_products(&mut products, SortKey::parse("whatever"));
        assert_eq!(names(&products), vec!["A", "B", "C", "D"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(
                (0.0f64..1000.0, 2000i32..2030, 1u32..13, 1u32..29),
                0..30,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (price, y, m, d))| {
                        product(&format!("P{i}"), price, "Preto", &[], &format!("{y:04}-{m:02}-{d:02}"))
                    })
                    .collect()
            })
        }

        fn sorted_names(products: &[Product]) -> Vec<String> {
            let mut names: Vec<String> = products.iter().map(|p| p.name.clone()).collect();
            names.sort();
            names
        }

        proptest! {
            /// Property: price sorts are monotonic permutations of the input.
            #[test]
            fn price_sorts_are_monotonic_permutations(input in arb_products()) {
                let mut asc = input.clone();
                sort_products(&mut asc, Some(SortKey::PriceAscending));
                prop_assert_eq!(asc.len(), input.len());
                prop_assert_eq!(sorted_names(&asc), sorted_names(&input));
                for pair in asc.windows(2) {
                    prop_assert!(pair[0].price.amount() <= pair[1].price.amount());
                }

                let mut desc = input.clone();
                sort_products(&mut desc, Some(SortKey::PriceDescending));
                prop_assert_eq!(sorted_names(&desc), sorted_names(&input));
                for pair in desc.windows(2) {
                    prop_assert!(pair[0].price.amount() >= pair[1].price.amount());
                }
            }

            /// Property: most-recent yields non-increasing dates.
            #[test]
            fn most_recent_is_non_increasing(input in arb_products()) {
                let mut sorted = input.clone();
                sort_products(&mut sorted, Some(SortKey::MostRecent));
                prop_assert_eq!(sorted.len(), input.len());
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].timestamp() >= pair[1].timestamp());
                }
            }
        }
    }
}
