//! Render pipeline: products → rows of cards (or the empty-state placeholder).
//!
//! The output is a plain view model; the Leptos front end and the preview
//! binary both draw from it.

use storefront_catalog::{GridLayout, Product, format_installment, format_price};
use storefront_core::DomainResult;

pub const EMPTY_PLACEHOLDER: &str = "Nenhum produto encontrado";

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Position of the product in the active (filtered, sorted) list.
    pub position: usize,
    pub name: String,
    pub image: String,
    /// e.g. `R$ 19,50`
    pub price_text: String,
    /// e.g. `até 3x de R$6,50`
    pub installment_text: String,
}

impl ProductCard {
    pub fn try_new(position: usize, product: &Product) -> DomainResult<Self> {
        let installment = format_installment(&product.parcelamento)?;
        Ok(Self {
            position,
            name: product.name.clone(),
            image: product.image.clone(),
            price_text: format!("R$ {}", format_price(product.price.amount())),
            installment_text: format!("até {installment}"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRow {
    pub cards: Vec<ProductCard>,
}

/// What the product container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// Single "no products found" placeholder, no rows.
    Empty,
    Rows(Vec<CardRow>),
}

impl GridView {
    /// `Empty` when there is nothing to draw.
    pub fn from_rows(rows: Vec<CardRow>) -> Self {
        if rows.is_empty() {
            GridView::Empty
        } else {
            GridView::Rows(rows)
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, GridView::Empty)
    }

    pub fn rows(&self) -> &[CardRow] {
        match self {
            GridView::Empty => &[],
            GridView::Rows(rows) => rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn card_count(&self) -> usize {
        self.rows().iter().map(|r| r.cards.len()).sum()
    }
}

impl core::fmt::Display for GridView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridView::Empty => writeln!(f, "{EMPTY_PLACEHOLDER}"),
            GridView::Rows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    writeln!(f, "-- row {} --", i + 1)?;
                    for card in &row.cards {
                        writeln!(
                            f,
                            "  [{}] {} | {} | {}",
                            card.position, card.name, card.price_text, card.installment_text
                        )?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Group `products` into rows of the layout's row capacity.
///
/// `offset` is the position of `products[0]` in the active list. A product
/// whose card cannot be formatted is logged and left out; the rest of its
/// row still renders.
pub fn render_rows(products: &[Product], offset: usize, layout: &GridLayout) -> Vec<CardRow> {
    layout
        .rows(products)
        .enumerate()
        .filter_map(|(row_index, chunk)| {
            let start = offset + row_index * layout.row_capacity();
            let cards: Vec<ProductCard> = chunk
                .iter()
                .enumerate()
                .filter_map(|(i, product)| match ProductCard::try_new(start + i, product) {
                    Ok(card) => Some(card),
                    Err(err) => {
                        tracing::error!(product = %product.name, error = %err, "product card not rendered");
                        None
                    }
                })
                .collect();

            (!cards.is_empty()).then_some(CardRow { cards })
        })
        .collect()
}

/// Clear-and-draw: the placeholder when no card can be drawn, rows otherwise.
pub fn render_page(products: &[Product], offset: usize, layout: &GridLayout) -> GridView {
    GridView::from_rows(render_rows(products, offset, layout))
}

/// Drawer preview of a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerEntry {
    pub name: String,
    pub image: String,
    /// e.g. `R$ 19,50`
    pub price_text: String,
    /// e.g. `ou 3x de R$6,50`
    pub installment_text: String,
}

impl DrawerEntry {
    pub fn try_new(product: &Product) -> DomainResult<Self> {
        let installment = format_installment(&product.parcelamento)?;
        Ok(Self {
            name: product.name.clone(),
            image: product.image.clone(),
            price_text: format!("R$ {}", format_price(product.price.amount())),
            installment_text: format!("ou {installment}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn product(name: &str, price: f64, parcelamento: Vec<f64>) -> Product {
        Product {
            name: name.to_string(),
            price: Money::new(price),
            image: format!("img/{name}.png"),
            date: "2021-01-01".to_string(),
            color: "Preto".to_string(),
            size: vec!["M".to_string()],
            parcelamento,
        }
    }

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| product(&format!("P{i}"), 10.0 + i as f64, vec![2.0, 5.0]))
            .collect()
    }

    #[test]
    fn card_texts() {
        let card = ProductCard::try_new(4, &product("Saia", 19.5, vec![3.0, 6.5])).unwrap();
        assert_eq!(card.position, 4);
        assert_eq!(card.price_text, "R$ 19,50");
        assert_eq!(card.installment_text, "até 3x de R$6,50");
        assert_eq!(card.image, "img/Saia.png");
    }

    #[test]
    fn empty_list_renders_only_the_placeholder() {
        let view = render_page(&[], 0, &GridLayout::default());
        assert!(view.is_empty_state());
        assert_eq!(view.row_count(), 0);
        assert_eq!(view.to_string(), "Nenhum produto encontrado\n");
    }

    #[test]
    fn groups_into_rows_of_capacity() {
        let layout = GridLayout::responsive(1200.0);
        let view = render_page(&products(7), 0, &layout);
        let sizes: Vec<usize> = view.rows().iter().map(|r| r.cards.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(view.card_count(), 7);

        let narrow = render_page(&products(5), 0, &GridLayout::responsive(375.0));
        let sizes: Vec<usize> = narrow.rows().iter().map(|r| r.cards.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn positions_continue_from_offset() {
        let rows = render_rows(&products(4), 9, &GridLayout::default());
        let positions: Vec<usize> = rows
            .iter()
            .flat_map(|r| r.cards.iter().map(|c| c.position))
            .collect();
        assert_eq!(positions, vec![9, 10, 11, 12]);
    }

    #[test]
    fn card_with_bad_installment_is_skipped() {
        let mut list = products(3);
        list[1].parcelamento = vec![1.0];
        let view = render_page(&list, 0, &GridLayout::default());
        assert_eq!(view.row_count(), 1);
        let names: Vec<&str> = view.rows()[0].cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["P0", "P2"]);
        assert_eq!(view.rows()[0].cards[1].position, 2);
    }

    #[test]
    fn page_without_drawable_cards_shows_the_placeholder() {
        let mut list = products(2);
        for p in &mut list {
            p.parcelamento = vec![];
        }
        let view = render_page(&list, 0, &GridLayout::default());
        assert_eq!(view, GridView::Empty);
        assert_eq!(view.to_string(), "Nenhum produto encontrado\n");
    }

    #[test]
    fn drawer_entry_texts() {
        let entry = DrawerEntry::try_new(&product("Vestido", 100.0, vec![10.0, 10.0])).unwrap();
        assert_eq!(entry.price_text, "R$ 100,00");
        assert_eq!(entry.installment_text, "ou 10x de R$10,00");
        assert!(DrawerEntry::try_new(&product("X", 1.0, vec![])).is_err());
    }
}
