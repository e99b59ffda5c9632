//! Listing page components.
//!
//! All event wiring lives here and is built once on mount. Every handler
//! goes through the single `RwSignal<ListingState>`.

use leptos::*;
use wasm_bindgen::JsValue;

use storefront_catalog::SortKey;

use crate::config::StorefrontConfig;
use crate::loader::{CatalogSource, HttpCatalogSource};
use crate::render::{CardRow, DrawerEntry, EMPTY_PLACEHOLDER, GridView, ProductCard};
use crate::state::ListingState;
use crate::ui::{Menu, PRICE_BUCKETS, SIZE_OPTIONS};

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::default();
    let state = create_rw_signal(ListingState::new(&config, viewport_width()));

    let source = HttpCatalogSource::from_config(&config);
    spawn_local(async move {
        match source.fetch().await {
            Ok(products) => state.update(|s| {
                s.replace_catalog(products);
            }),
            Err(err) => {
                console_error(&format!("Erro: {err}"));
                state.update(|s| {
                    s.clear_catalog();
                });
            }
        }
    });

    let _resize = window_event_listener(ev::resize, move |_| {
        let width = viewport_width();
        state.update(|s| {
            s.set_viewport_width(width);
        });
    });

    view! {
        <header class="header">
            <div class="minicart" on:click=move |_| state.update(|s| s.open_drawer())>
                <div class="minicart__count">
                    <span>{move || state.with(|s| s.cart_count())}</span>
                </div>
            </div>
        </header>

        <main class="listing">
            <div class="mobile-actions">
                <button
                    class="filter-mobile"
                    on:click=move |_| state.update(|s| {
                        s.ui_mut().toggle_menu(Menu::Filter);
                    })
                >
                    "Filtrar"
                </button>
                <button
                    class="sort-mobile"
                    on:click=move |_| state.update(|s| {
                        s.ui_mut().toggle_menu(Menu::Sort);
                    })
                >
                    "Ordenar"
                </button>
            </div>

            <FilterMenu state=state/>
            <SortMenu state=state/>

            <section class="products">
                <SortDropdown state=state/>
                <ProductGrid state=state/>
                <button
                    class="load-more-button"
                    style:display=move || if state.with(|s| s.show_load_more()) { "block" } else { "none" }
                    on:click=move |_| state.update(|s| {
                        s.load_more();
                    })
                >
                    "Carregar mais"
                </button>
            </section>
        </main>

        <Drawer state=state/>
    }
}

#[component]
fn FilterMenu(state: RwSignal<ListingState>) -> impl IntoView {
    let visible_colors = move || {
        state.with(|s| {
            let all = s.catalog().colors();
            s.ui()
                .visible_colors(&all)
                .iter()
                .map(|color| (color.clone(), s.selection().colors().contains(color)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside
            id="filter-menu"
            class="menu filter-menu"
            class:open=move || state.with(|s| s.ui().is_menu_open(Menu::Filter))
        >
            <button class="close-menu" on:click=move |_| state.update(|s| s.ui_mut().close_menu(Menu::Filter))>
                "X"
            </button>

            <div class="filter-group colors">
                <h3>"CORES"</h3>
                {move || {
                    visible_colors()
                        .into_iter()
                        .map(|(color, checked)| {
                            let value = color.clone();
                            let label = color.clone();
                            view! {
                                <label class="filter-option">
                                    <input
                                        type="checkbox"
                                        class="color-filter"
                                        value=color
                                        prop:checked=checked
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            state.update(|s| {
                                                s.set_color_filter(&value, checked);
                                            });
                                        }
                                    />
                                    {label}
                                </label>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="show-more-colors"
                    on:click=move |_| state.update(|s| {
                        s.ui_mut().toggle_more_colors();
                    })
                >
                    {move || state.with(|s| s.ui().more_colors_label())}
                </button>
            </div>

            <div class="filter-group sizes">
                <h3>"TAMANHOS"</h3>
                {SIZE_OPTIONS
                    .into_iter()
                    .map(|size| {
                        view! {
                            <button
                                class="btn-size-filter"
                                value=size
                                class:active=move || state.with(|s| s.selection().sizes().contains(size))
                                on:click=move |_| state.update(|s| {
                                    s.toggle_size_filter(size);
                                })
                            >
                                {size}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filter-group prices">
                <h3>"FAIXA DE PREÇO"</h3>
                {PRICE_BUCKETS
                    .into_iter()
                    .map(|(bucket, label)| {
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    class="price-filter"
                                    value=bucket
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| {
                                            s.set_price_filter(bucket, checked);
                                        });
                                    }
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

#[component]
fn SortMenu(state: RwSignal<ListingState>) -> impl IntoView {
    view! {
        <aside
            id="sort-menu"
            class="menu sort-menu"
            class:open=move || state.with(|s| s.ui().is_menu_open(Menu::Sort))
        >
            <button class="close-menu" on:click=move |_| state.update(|s| s.ui_mut().close_menu(Menu::Sort))>
                "X"
            </button>
            <select
                class="sort-dropdown"
                on:change=move |ev| {
                    let option = event_target_value(&ev);
                    state.update(|s| {
                        s.sort_by_option(&option);
                        s.ui_mut().close_menu(Menu::Sort);
                    });
                }
            >
                <option value="">"Ordenar por:"</option>
                {SortKey::ALL
                    .into_iter()
                    .map(|key| view! { <option value=key.option_value()>{key.label()}</option> })
                    .collect_view()}
            </select>
        </aside>
    }
}

#[component]
fn SortDropdown(state: RwSignal<ListingState>) -> impl IntoView {
    view! {
        <div class="dropdown">
            <button
                class="dropdown-toggle"
                on:click=move |_| state.update(|s| {
                    s.ui_mut().toggle_dropdown();
                })
            >
                {move || state.with(|s| s.sort_key().map_or("Ordenar por:", |k| k.label()))}
            </button>
            <ul class="dropdown-menu" class:open=move || state.with(|s| s.ui().is_dropdown_open())>
                {SortKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <li
                                class="dropdown-item"
                                data-value=key.option_value()
                                on:click=move |_| state.update(|s| {
                                    let selected = s.ui_mut().select_dropdown_option(key.option_value());
                                    s.sort_by(selected);
                                })
                            >
                                {key.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProductGrid(state: RwSignal<ListingState>) -> impl IntoView {
    view! {
        <div class="product-container">
            {move || match state.with(|s| s.current_view()) {
                GridView::Empty => view! { <p class="no-products">{EMPTY_PLACEHOLDER}</p> }.into_view(),
                GridView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| row_view(row, state))
                    .collect_view(),
            }}
        </div>
    }
}

fn row_view(row: CardRow, state: RwSignal<ListingState>) -> impl IntoView {
    view! {
        <div class="product-row">
            {row.cards.into_iter().map(|card| card_view(card, state)).collect_view()}
        </div>
    }
}

fn card_view(card: ProductCard, state: RwSignal<ListingState>) -> impl IntoView {
    let ProductCard {
        position,
        name,
        image,
        price_text,
        installment_text,
    } = card;
    let alt = name.clone();

    view! {
        <div class="product-card">
            <img src=image alt=alt/>
            <h2 class="product-name">{name}</h2>
            <p class="product-price">{price_text}</p>
            <p class="parcelamento">{installment_text}</p>
            <button
                class="buy-button"
                on:click=move |_| state.update(|s| {
                    if let Err(err) = s.buy(position) {
                        console_error(&format!("Erro: {err}"));
                    }
                })
            >
                "Comprar"
            </button>
        </div>
    }
}

#[component]
fn Drawer(state: RwSignal<ListingState>) -> impl IntoView {
    view! {
        <div class="drawer" class:open=move || state.with(|s| s.ui().is_drawer_open())>
            <button class="close-drawer-button" on:click=move |_| state.update(|s| s.close_drawer())>
                "X"
            </button>
            <div class="drawer-content">
                {move || state.with(|s| s.drawer().cloned()).map(drawer_entry_view)}
            </div>
        </div>
    }
}

fn drawer_entry_view(entry: DrawerEntry) -> impl IntoView {
    let DrawerEntry {
        name,
        image,
        price_text,
        installment_text,
    } = entry;
    let alt = name.clone();

    view! {
        <div class="product-info">
            <img src=image alt=alt/>
            <div class="right-col-minicart">
                <h2>{name}</h2>
                <p>{price_text}</p>
                <p>{installment_text}</p>
            </div>
        </div>
    }
}
