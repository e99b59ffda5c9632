//! Listing page state and the event handlers that mutate it.
//!
//! One `ListingState` per page. Every handler takes `&mut self` and runs to
//! completion synchronously; the only async step (the catalog fetch) happens
//! outside and hands its result to [`ListingState::replace_catalog`].

use std::ops::Range;

use storefront_catalog::{
    Catalog, FilterSelection, GridLayout, Product, SortKey, show_load_more, sort_products,
};
use storefront_core::{DomainError, DomainResult};

use crate::config::StorefrontConfig;
use crate::render::{CardRow, DrawerEntry, GridView, render_page, render_rows};
use crate::ui::UiState;

#[derive(Debug, Clone)]
pub struct ListingState {
    catalog: Catalog,
    selection: FilterSelection,
    sort_key: Option<SortKey>,
    /// Filtered, then sorted. Card positions index into this list.
    active: Vec<Product>,
    layout: GridLayout,
    breakpoint_px: u32,
    rows_per_page: usize,
    load_more_threshold: usize,
    /// Ranges of `active` drawn so far: the first page, then one per load-more.
    segments: Vec<Range<usize>>,
    show_load_more: bool,
    cart_count: u32,
    drawer: Option<DrawerEntry>,
    ui: UiState,
}

impl ListingState {
    pub fn new(config: &StorefrontConfig, viewport_width_px: f64) -> Self {
        Self {
            catalog: Catalog::default(),
            selection: FilterSelection::new(),
            sort_key: None,
            active: Vec::new(),
            layout: config.layout_for(viewport_width_px),
            breakpoint_px: config.narrow_breakpoint_px,
            rows_per_page: config.rows_per_page,
            load_more_threshold: config.load_more_threshold,
            segments: Vec::new(),
            show_load_more: false,
            cart_count: 0,
            drawer: None,
            ui: UiState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Mutate the filter controls; call [`Self::apply_filters`] afterwards.
    pub fn selection_mut(&mut self) -> &mut FilterSelection {
        &mut self.selection
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn active_products(&self) -> &[Product] {
        &self.active
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn show_load_more(&self) -> bool {
        self.show_load_more
    }

    pub fn rendered_count(&self) -> usize {
        self.segments.last().map_or(0, |r| r.end)
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    pub fn drawer(&self) -> Option<&DrawerEntry> {
        self.drawer.as_ref()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// Swap in a freshly fetched catalog and draw the first page.
    pub fn replace_catalog(&mut self, products: Vec<Product>) -> GridView {
        tracing::info!(count = products.len(), "catalog loaded");
        self.catalog.replace(products);
        self.refresh()
    }

    /// Failed fetch: no catalog, the placeholder is shown.
    pub fn clear_catalog(&mut self) -> GridView {
        self.catalog.clear();
        self.refresh()
    }

    /// Recompute row capacity. The next render uses it; returns whether it changed.
    pub fn set_viewport_width(&mut self, width_px: f64) -> bool {
        let layout = GridLayout::for_viewport(width_px, self.breakpoint_px, self.rows_per_page);
        let changed = layout != self.layout;
        self.layout = layout;
        changed
    }

    /// Re-run filter and sort, then draw the first page from scratch.
    pub fn apply_filters(&mut self) -> GridView {
        self.refresh()
    }

    /// Color checkbox changed.
    pub fn set_color_filter(&mut self, color: &str, checked: bool) -> GridView {
        self.selection.set_color(color, checked);
        self.refresh()
    }

    /// Size button clicked (exclusive toggle).
    pub fn toggle_size_filter(&mut self, size: &str) -> GridView {
        self.selection.toggle_size(size);
        self.refresh()
    }

    /// Price checkbox changed. A malformed bucket is logged and ignored.
    pub fn set_price_filter(&mut self, bucket: &str, checked: bool) -> GridView {
        if let Err(err) = self.selection.set_price_range(bucket, checked) {
            tracing::warn!(bucket, error = %err, "price filter ignored");
        }
        self.refresh()
    }

    /// Change the ordering and redraw. `None` keeps catalog order.
    pub fn sort_by(&mut self, key: Option<SortKey>) -> GridView {
        self.sort_key = key;
        self.refresh()
    }

    /// Dropdown / select handler: parse the option value, then redraw.
    pub fn sort_by_option(&mut self, option: &str) -> GridView {
        self.sort_by(SortKey::parse(option))
    }

    fn refresh(&mut self) -> GridView {
        let mut active = self.selection.apply(self.catalog.products());
        sort_products(&mut active, self.sort_key);
        self.active = active;

        self.show_load_more = show_load_more(self.active.len(), self.load_more_threshold);

        let page = self.layout.first_page(&self.active);
        self.segments = vec![0..page.len()];

        render_page(page, 0, &self.layout)
    }

    /// Append every remaining product of the active list, uncapped.
    ///
    /// Returns only the appended rows; empty when everything is already shown.
    pub fn load_more(&mut self) -> Vec<CardRow> {
        let start = self.rendered_count();
        let remaining = self.layout.remaining(&self.active, start);
        if remaining.is_empty() {
            return Vec::new();
        }

        let rows = render_rows(remaining, start, &self.layout);
        self.segments.push(start..self.active.len());
        tracing::debug!(from = start, appended = remaining.len(), "load more");
        rows
    }

    /// Everything drawn so far, as the product container shows it.
    pub fn current_view(&self) -> GridView {
        let rows = self
            .segments
            .iter()
            .flat_map(|range| render_rows(&self.active[range.clone()], range.start, &self.layout))
            .collect();
        GridView::from_rows(rows)
    }

    /// Buy click on the card at `position`: bump the cart counter and show
    /// that product alone in the drawer.
    pub fn buy(&mut self, position: usize) -> DomainResult<DrawerEntry> {
        if position >= self.rendered_count() {
            return Err(DomainError::validation(format!(
                "no rendered product at position {position}"
            )));
        }
        let product = &self.active[position];

        self.cart_count = self.cart_count.saturating_add(1);

        let entry = DrawerEntry::try_new(product).inspect_err(|err| {
            tracing::error!(product = %product.name, error = %err, "drawer preview failed");
        })?;

        self.drawer = Some(entry.clone());
        self.ui.open_drawer();
        tracing::debug!(product = %entry.name, cart = self.cart_count, "added to cart");
        Ok(entry)
    }

    /// Minicart icon: open the drawer with whatever it shows.
    pub fn open_drawer(&mut self) {
        self.ui.open_drawer();
    }

    pub fn close_drawer(&mut self) {
        self.ui.close_drawer();
    }
}
