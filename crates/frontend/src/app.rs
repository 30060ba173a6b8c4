use crate::domain::product::ui::list::ProductList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ProductList />
    }
}
