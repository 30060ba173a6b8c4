use crate::domain::product::ui::create::ProductCreateForm;
use crate::domain::product::ui::details::ProductDetails;
use crate::shared::api_utils::{products_url, ApiError};
use crate::shared::components::PaginationControls;
use crate::shared::export::{export_to_csv, quote_field, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_indicator, page_slice, sort_list, total_pages, SearchInput, Searchable,
    Sortable,
};
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::rc::Rc;

mod state;
pub use state::{ProductListState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

pub const CSV_FILENAME: &str = "products_current_page.csv";

/// Shown when a thumbnail URL does not load
const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 width=%2750%27 height=%2750%27%3E%3Crect width=%2750%27 height=%2750%27 fill=%27%23ddd%27/%3E%3C/svg%3E";

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category_name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl ProductRow {
    fn from_product(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price: p.price,
            category_name: p.category_name(),
            description: p.description.clone(),
            image_url: p.primary_image(),
        }
    }

    fn price_display(&self) -> String {
        format!("${}", self.price)
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.title.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            "price" => self.price.total_cmp(&other.price),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for ProductRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Price", "Category", "Description"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            quote_field(&self.title),
            self.price.to_string(),
            quote_field(&self.category_name),
            quote_field(&self.description),
        ]
    }
}

/// The filtered view: rows of the working set matching the search keyword,
/// in the current sort order.
pub fn filtered_rows(products: &[Product], state: &ProductListState) -> Vec<ProductRow> {
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from_product).collect();
    let mut rows = filter_list(rows, &state.search);
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    // Working set: replaced wholesale on every successful fetch
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let state = RwSignal::new(ProductListState::default());

    let (show_create, set_show_create) = signal(false);
    let (editing, set_editing) = signal::<Option<Product>>(None);

    // A response is applied only if no newer fetch started meanwhile
    let fetch_generation = StoredValue::new(0u64);

    let fetch = move || {
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_products().await;
            if fetch_generation.get_value() != generation {
                return;
            }
            match result {
                Ok(v) => {
                    set_products.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("loading products failed: {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let visible_rows = move || {
        let s = state.get();
        let rows = filtered_rows(&products.get(), &s);
        page_slice(&rows, s.page, s.page_size)
    };

    let page_count = Signal::derive(move || {
        let s = state.get();
        total_pages(filtered_rows(&products.get(), &s).len(), s.page_size)
    });

    let handle_search = Callback::new(move |keyword: String| {
        state.update(|s| s.set_search(keyword));
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| s.toggle_sort(field));
        }
    };

    let change_page = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
    });

    let open_detail = move |id: i64| {
        // look up in the working set, so details open while a filter is active
        if let Some(p) = products.get().iter().find(|p| p.id == id) {
            set_editing.set(Some(p.clone()));
        }
    };

    let handle_export = move || {
        let page_rows = visible_rows();
        if let Err(e) = export_to_csv(&page_rows, CSV_FILENAME) {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&format!("Export failed: {}", e));
            }
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Product Catalog"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=handle_search
                        placeholder="Search by title...".to_string()
                    />
                    <select
                        class="form-control page-size-select"
                        on:change=move |ev| {
                            let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                            state.update(|s| s.set_page_size(size));
                        }
                        prop:value=move || state.get().page_size.to_string()
                    >
                        {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                            view! {
                                <option value={size.to_string()} selected=move || state.get().page_size == size>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="btn btn-primary" on:click=move |_| set_show_create.set(true)>
                        {icon("plus")}
                        {"New product"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| handle_export()>
                        {icon("download")}
                        {"CSV"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("title")
                                title="Sort"
                            >
                                {move || {
                                    let s = state.get();
                                    format!("Title{}", get_sort_indicator(&s.sort_field, "title", s.sort_ascending))
                                }}
                            </th>
                            <th
                                class="cursor-pointer user-select-none"
                                on:click=toggle_sort("price")
                                title="Sort"
                            >
                                {move || {
                                    let s = state.get();
                                    format!("Price{}", get_sort_indicator(&s.sort_field, "price", s.sort_ascending))
                                }}
                            </th>
                            <th>{"Category"}</th>
                            <th>{"Image"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if let Some(e) = error.get() {
                                return view! {
                                    <tr><td colspan="6" class="text-danger">{format!("Failed to load data: {}", e)}</td></tr>
                                }.into_any();
                            }

                            let rows = visible_rows();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="6">{"No data"}</td></tr>
                                }.into_any();
                            }

                            rows.into_iter().map(|row| {
                                let id = row.id;
                                let img_src = row.image_url.clone().unwrap_or_default();
                                view! {
                                    <tr title={row.description.clone()}>
                                        <td>{row.id}</td>
                                        <td class="fw-bold text-primary">{row.title.clone()}</td>
                                        <td class="fw-bold text-success">{row.price_display()}</td>
                                        <td>{row.category_name.clone()}</td>
                                        <td>
                                            <img
                                                src={img_src}
                                                class="product-img"
                                                on:error=move |ev| {
                                                    let img: web_sys::HtmlImageElement = event_target(&ev);
                                                    if img.src() != IMAGE_PLACEHOLDER {
                                                        img.set_src(IMAGE_PLACEHOLDER);
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-outline-info btn-sm"
                                                title="View details"
                                                on:click=move |_| open_detail(id)
                                            >
                                                {icon("eye")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_pages=page_count
                on_page_change=change_page
            />

            {move || if let Some(product) = editing.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <ProductDetails
                                product=product
                                on_saved=Rc::new(move |_| { set_editing.set(None); fetch(); })
                                on_cancel=Rc::new(move |_| set_editing.set(None))
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || if show_create.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <ProductCreateForm
                                on_saved=Rc::new(move |_| { set_show_create.set(false); fetch(); })
                                on_cancel=Rc::new(move |_| set_show_create.set(false))
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = products_url();
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    if !resp.ok() {
        return Err(ApiError::Fetch(resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| ApiError::Transport(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
    let data: Vec<Product> =
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::csv_text;
    use contracts::domain::product::Category;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("about {title}"),
            category: Some(Category {
                id: 1,
                name: "Clothes".to_string(),
            }),
            images: vec![format!("https://example.com/{id}.jpg")],
        }
    }

    #[test]
    fn row_projection_handles_missing_category_and_images() {
        let p = Product {
            id: 3,
            title: "Bare".to_string(),
            price: 5.0,
            description: String::new(),
            category: None,
            images: Vec::new(),
        };
        let row = ProductRow::from_product(&p);
        assert_eq!(row.category_name, "");
        assert!(row.image_url.is_none());
    }

    #[test]
    fn price_display_is_dollar_prefixed() {
        let row = ProductRow::from_product(&product(1, "Mug", 10.0));
        assert_eq!(row.price_display(), "$10");
        let row = ProductRow::from_product(&product(1, "Mug", 10.5));
        assert_eq!(row.price_display(), "$10.5");
    }

    #[test]
    fn csv_matches_the_expected_wire_format() {
        let row = ProductRow {
            id: 1,
            title: "A".to_string(),
            price: 10.0,
            category_name: "X".to_string(),
            description: "d".to_string(),
            image_url: None,
        };
        assert_eq!(
            csv_text(&[row]),
            "ID,Title,Price,Category,Description\n1,\"A\",10,\"X\",\"d\"\n"
        );
    }

    #[test]
    fn filtered_rows_match_title_substring() {
        let products = vec![
            product(1, "Red Shirt", 10.0),
            product(2, "Blue Mug", 5.0),
            product(3, "Dress shirt", 20.0),
        ];
        let state = ProductListState {
            search: "SHIRT".to_string(),
            ..Default::default()
        };
        let rows = filtered_rows(&products, &state);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn empty_search_yields_the_full_set() {
        let products = vec![product(1, "a", 1.0), product(2, "b", 2.0)];
        let rows = filtered_rows(&products, &ProductListState::default());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn toggling_sort_twice_reverses_the_order() {
        let products = vec![
            product(1, "banana", 3.0),
            product(2, "Apple", 1.0),
            product(3, "cherry", 2.0),
        ];
        let mut state = ProductListState::default();
        state.toggle_sort("title");
        let once: Vec<i64> = filtered_rows(&products, &state).iter().map(|r| r.id).collect();
        assert_eq!(once, vec![2, 1, 3]);
        state.toggle_sort("title");
        let twice: Vec<i64> = filtered_rows(&products, &state).iter().map(|r| r.id).collect();
        assert_eq!(twice, vec![3, 1, 2]);
    }

    #[test]
    fn price_sorts_numerically() {
        let products = vec![
            product(1, "a", 10.0),
            product(2, "b", 2.0),
            product(3, "c", 33.5),
        ];
        let mut state = ProductListState::default();
        state.toggle_sort("price");
        let rows = filtered_rows(&products, &state);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn two_products_on_one_page() {
        // Working set of 2, page size 10: 2 visible rows, 1 page indicator
        let products = vec![product(1, "a", 1.0), product(2, "b", 2.0)];
        let state = ProductListState::default();
        let rows = filtered_rows(&products, &state);
        assert_eq!(page_slice(&rows, state.page, state.page_size).len(), 2);
        assert_eq!(total_pages(rows.len(), state.page_size), 1);
    }
}
