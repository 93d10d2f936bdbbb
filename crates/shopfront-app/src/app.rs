//! Application components and pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shopfront_catalog::{Product, SortOption};
use shopfront_data::{ProductSource, ProductsClient};
use shopfront_state::{format_price, CartStore, CatalogStore, LoadStatus};

/// Rating floors offered by the filter panel.
const MIN_RATING_CHOICES: [f64; 3] = [4.0, 3.0, 2.0];

/// The stores shared by every page, provided through context.
///
/// The view layer is stateless beyond these two signals: every render reads
/// a derived view and every intent is a signal update.
#[derive(Clone, Copy)]
pub struct Stores {
    pub catalog: RwSignal<CatalogStore>,
    pub cart: RwSignal<CartStore>,
}

/// Start (or retry) a catalog load.
///
/// The fetch runs on the event loop's executor; the generation token makes
/// sure a superseded load cannot clobber a newer one.
fn spawn_catalog_load(catalog: RwSignal<CatalogStore>) {
    let Some(generation) = catalog.try_update(|store| store.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let client = ProductsClient::new();
        let result = client.fetch_products().await;
        catalog.update(|store| {
            store.finish_load(generation, result);
        });
    });
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(CatalogStore::new());
    let cart = RwSignal::new(CartStore::new());
    provide_context(Stores { catalog, cart });

    spawn_catalog_load(catalog);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let cart_count = move || stores.cart.with(|cart| cart.len());

    view! {
        <header>
            <h1><a href="/">"Products"</a></h1>
            <nav>
                <a href="/cart" class="cart-link">
                    "Cart"
                    {move || {
                        let count = cart_count();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </a>
            </nav>
        </header>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page: load status, filter panel, product grid.
#[component]
fn HomePage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;

    view! {
        {move || match catalog.with(|store| store.status().clone()) {
            LoadStatus::Loading => view! {
                <p class="status">"Loading products..."</p>
            }.into_any(),
            LoadStatus::Error(message) => view! {
                <div class="status error">
                    <p>{message}</p>
                    <button on:click=move |_| spawn_catalog_load(catalog)>"Retry"</button>
                </div>
            }.into_any(),
            LoadStatus::Success => view! {
                <FilterPanel/>
                <ActiveFilters/>
                <ProductGrid/>
            }.into_any(),
        }}
    }
}

/// Single product page.
#[component]
fn ProductPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;
    let params = leptos_router::hooks::use_params_map();
    let product_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    view! {
        {move || {
            let found = product_id().and_then(|id| catalog.with(|store| store.product(id).cloned()));
            match found {
                Some(product) => view! { <ProductDetail product/> }.into_any(),
                None => view! {
                    <p>"Product not found"</p>
                    <a href="/">"Back to products"</a>
                }.into_any(),
            }
        }}
    }
}

/// Shopping cart page.
#[component]
fn CartPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;
    let cart = stores.cart;

    let cart_products =
        move || catalog.with(|store| cart.with(|cart| cart.cart_products(store.snapshot())));
    let total =
        move || catalog.with(|store| cart.with(|cart| cart.total_cost(store.snapshot())));

    view! {
        <h2>"My Cart"</h2>
        {move || {
            let products = cart_products();
            if products.is_empty() {
                view! {
                    <p>"Your cart is empty"</p>
                    <a href="/">"Continue shopping"</a>
                }.into_any()
            } else {
                view! {
                    <div class="cart">
                        {products.into_iter().map(|product| view! {
                            <CartRow product/>
                        }).collect::<Vec<_>>()}
                        <div class="cart-total">
                            <strong>"Total:"</strong>
                            <strong>{move || format_price(total())}</strong>
                        </div>
                        // Checkout is a placeholder; there is no payment flow.
                        <button class="checkout">"Proceed to Checkout"</button>
                    </div>
                }.into_any()
            }
        }}
    }
}

/// 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Filter Components
// ============================================================================

#[component]
fn FilterPanel() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;

    let categories = move || catalog.with(|store| store.categories());
    let selection = move || catalog.with(|store| store.selection().clone());

    view! {
        <section class="filters">
            <div class="filters-header">
                <h2>"Sort & Filter"</h2>
                <button on:click=move |_| catalog.update(|store| store.clear_filters())>
                    "Clear All"
                </button>
            </div>

            <div class="filter-group">
                <h3>"Sort"</h3>
                {SortOption::ALL.iter().map(|&option| view! {
                    <button
                        class="option"
                        class:active=move || selection().sort == option
                        on:click=move |_| catalog.update(|store| store.select_sort(option))
                    >
                        {option.display_name()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            <div class="filter-group">
                <h3>"Category"</h3>
                {move || categories().into_iter().map(|category| {
                    let label = category.clone();
                    let value = category.clone();
                    let is_active = {
                        let category = category.clone();
                        move || selection().category.as_deref() == Some(category.as_str())
                    };
                    view! {
                        <button
                            class="option"
                            class:active=is_active
                            on:click=move |_| {
                                catalog.update(|store| store.select_category(&value));
                            }
                        >
                            {label}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="filter-group">
                <h3>"Minimum Rating"</h3>
                {MIN_RATING_CHOICES.iter().map(|&rating| view! {
                    <button
                        class="option"
                        class:active=move || selection().min_rating == Some(rating)
                        on:click=move |_| {
                            catalog.update(|store| store.select_min_rating(rating));
                        }
                    >
                        {format!("{rating}+")}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Chips for the active filters; clicking a chip clears that filter.
#[component]
fn ActiveFilters() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;
    let selection = move || catalog.with(|store| store.selection().clone());

    view! {
        {move || {
            let current = selection();
            current.is_active().then(|| {
                let sort = current.sort;
                view! {
                    <div class="active-filters">
                        {(sort != SortOption::default()).then(|| view! {
                            <button
                                class="chip"
                                on:click=move |_| {
                                    catalog.update(|store| store.select_sort(SortOption::default()));
                                }
                            >
                                {sort.display_name()}
                            </button>
                        })}
                        {current.category.clone().map(|category| {
                            let label = category.clone();
                            view! {
                                <button
                                    class="chip"
                                    on:click=move |_| {
                                        catalog.update(|store| store.select_category(&category));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })}
                        {current.min_rating.map(|rating| view! {
                            <button
                                class="chip"
                                on:click=move |_| {
                                    catalog.update(|store| store.select_min_rating(rating));
                                }
                            >
                                {format!("{rating}+")}
                            </button>
                        })}
                    </div>
                }
            })
        }}
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductGrid() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let catalog = stores.catalog;
    let products = move || catalog.with(|store| store.filtered_products());

    view! {
        {move || {
            let products = products();
            if products.is_empty() {
                view! { <p class="empty">"No products found"</p> }.into_any()
            } else {
                view! {
                    <div class="products">
                        {products.into_iter().map(|product| view! {
                            <ProductCard product/>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }
        }}
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let stores = expect_context::<Stores>();
    let cart = stores.cart;

    let id = product.id;
    let href = format!("/product/{id}");
    let price = product.price_display();
    let rating = rating_label(&product);
    let in_cart = move || cart.with(|cart| cart.contains(id));

    view! {
        <div class="product-card">
            <a href=href>
                <img src=product.image.clone() alt=product.title.clone()/>
                <h3>{product.title.clone()}</h3>
            </a>
            <p class="price">{price}</p>
            <p class="category">{product.category.clone()}</p>
            <p class="rating">{rating}</p>
            {move || in_cart().then(|| view! { <span class="in-cart">"In cart"</span> })}
        </div>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let stores = expect_context::<Stores>();
    let cart = stores.cart;

    let id = product.id;
    let price = product.price_display();
    let rating = rating_label(&product);
    let in_cart = move || cart.with(|cart| cart.contains(id));

    view! {
        <div class="product-detail">
            <a href="/">"Back"</a>
            <img src=product.image.clone() alt=product.title.clone()/>
            <p class="category">{product.category.to_uppercase()}</p>
            <h1>{product.title.clone()}</h1>
            <p class="rating">{rating}</p>
            <h3>"Description"</h3>
            <p>{product.description.clone()}</p>
            <button
                class="add-to-cart"
                class:added=in_cart
                on:click=move |_| {
                    cart.update(|cart| {
                        cart.toggle(id);
                    });
                }
            >
                {move || if in_cart() {
                    "Added to Cart".to_string()
                } else {
                    format!("Add to Cart  {price}")
                }}
            </button>
        </div>
    }
}

#[component]
fn CartRow(product: Product) -> impl IntoView {
    let stores = expect_context::<Stores>();
    let cart = stores.cart;

    let id = product.id;
    let price = product.price_display();

    view! {
        <div class="cart-row">
            <img src=product.image.clone() alt=product.title.clone()/>
            <div class="cart-row-info">
                <strong>{product.title.clone()}</strong>
                <p class="price">{price}</p>
            </div>
            <button
                class="remove"
                on:click=move |_| {
                    cart.update(|cart| {
                        cart.toggle(id);
                    });
                }
            >
                "Remove"
            </button>
        </div>
    }
}

/// Human label for a product's rating summary.
fn rating_label(product: &Product) -> String {
    match (product.rating.rate, product.rating.count) {
        (Some(rate), Some(count)) => format!("{rate} ({count})"),
        (Some(rate), None) => format!("{rate}"),
        _ => "Not yet rated".to_string(),
    }
}
