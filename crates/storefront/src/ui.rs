//! Presentational toggles: mobile menus, sort dropdown, "more colors", drawer.
//!
//! Nothing here touches the catalog; the listing state only reads the
//! dropdown selection back as a sort key.

use storefront_catalog::SortKey;

/// Colors listed before "show more colors" is expanded.
pub const COLLAPSED_COLOR_COUNT: usize = 5;
pub const MORE_COLORS_LABEL: &str = "Ver todas as cores";
pub const FEWER_COLORS_LABEL: &str = "Ver menos cores";

/// Size buttons, in display order.
pub const SIZE_OPTIONS: [&str; 11] = ["P", "M", "G", "GG", "U", "36", "38", "40", "42", "44", "46"];

/// Price checkboxes: (`min-max` value, label).
pub const PRICE_BUCKETS: [(&str, &str); 5] = [
    ("0-50", "de R$0 até R$50"),
    ("51-150", "de R$51 até R$150"),
    ("151-300", "de R$151 até R$300"),
    ("301-500", "de R$301 até R$500"),
    ("501-100000", "a partir de R$ 500"),
];

/// Slide-in menus used on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Filter,
    Sort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    filter_menu_open: bool,
    sort_menu_open: bool,
    dropdown_open: bool,
    all_colors_visible: bool,
    drawer_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self, menu: Menu) -> bool {
        match menu {
            Menu::Filter => self.filter_menu_open,
            Menu::Sort => self.sort_menu_open,
        }
    }

    pub fn toggle_menu(&mut self, menu: Menu) -> bool {
        let open = match menu {
            Menu::Filter => &mut self.filter_menu_open,
            Menu::Sort => &mut self.sort_menu_open,
        };
        *open = !*open;
        *open
    }

    /// The close button inside a menu only closes that menu.
    pub fn close_menu(&mut self, menu: Menu) {
        match menu {
            Menu::Filter => self.filter_menu_open = false,
            Menu::Sort => self.sort_menu_open = false,
        }
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    /// Picking a dropdown item closes the dropdown and yields the sort key
    /// to re-render with (`None` for unknown values).
    pub fn select_dropdown_option(&mut self, value: &str) -> Option<SortKey> {
        self.dropdown_open = false;
        let key = SortKey::parse(value);
        tracing::debug!(option = value, known = key.is_some(), "sort option selected");
        key
    }

    pub fn all_colors_visible(&self) -> bool {
        self.all_colors_visible
    }

    /// Returns the button's new label.
    pub fn toggle_more_colors(&mut self) -> &'static str {
        self.all_colors_visible = !self.all_colors_visible;
        self.more_colors_label()
    }

    pub fn more_colors_label(&self) -> &'static str {
        if self.all_colors_visible {
            FEWER_COLORS_LABEL
        } else {
            MORE_COLORS_LABEL
        }
    }

    pub fn visible_colors<'a>(&self, colors: &'a [String]) -> &'a [String] {
        if self.all_colors_visible {
            colors
        } else {
            &colors[..colors.len().min(COLLAPSED_COLOR_COUNT)]
        }
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
