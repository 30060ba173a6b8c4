use super::model;
use contracts::domain::product::{Product, ProductUpdate};
use leptos::prelude::*;
use std::rc::Rc;

/// Edit form backing the detail modal. `price` stays a raw string until
/// submit, matching what the input element holds.
#[derive(Clone, Debug, Default)]
pub struct EditProductForm {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub description: String,
    /// Manual image URL override, cleared after a successful save
    pub image_url: String,
    /// Image currently shown in the preview
    pub current_image: String,
}

/// ViewModel for the product detail/edit form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<EditProductForm>,
}

impl ProductDetailsViewModel {
    /// Populate the form from a product out of the working set.
    pub fn new(product: &Product) -> Self {
        let form = EditProductForm {
            id: product.id,
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image_url: String::new(),
            current_image: product.primary_image().unwrap_or_default(),
        };
        Self {
            form: RwSignal::new(form),
        }
    }

    /// The image URL the update will carry: the trimmed manual override if
    /// one was entered, else the currently displayed image.
    pub fn resolved_image(form: &EditProductForm) -> String {
        let manual = form.image_url.trim();
        if manual.is_empty() {
            form.current_image.clone()
        } else {
            manual.to_string()
        }
    }

    pub fn to_update(form: &EditProductForm) -> ProductUpdate {
        ProductUpdate {
            title: form.title.clone(),
            price: form.price.trim().parse().unwrap_or(0.0),
            description: form.description.clone(),
            images: vec![Self::resolved_image(form)],
        }
    }

    /// Submit the update. On success the override field is cleared and
    /// `on_saved` runs (the caller refreshes the list and closes the modal);
    /// on failure an alert is shown and the modal stays open.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();
        let dto = Self::to_update(&current);
        let id = current.id;
        let form = self.form;
        wasm_bindgen_futures::spawn_local(async move {
            match model::update_product(id, &dto).await {
                Ok(()) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Product updated successfully!");
                    }
                    form.update(|f| f.image_url.clear());
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("updating product {id} failed: {e}");
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Update failed: {}", e));
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EditProductForm {
        EditProductForm {
            id: 5,
            title: "Mug".to_string(),
            price: "12.5".to_string(),
            description: "ceramic".to_string(),
            image_url: String::new(),
            current_image: "https://example.com/mug.jpg".to_string(),
        }
    }

    #[test]
    fn falls_back_to_the_displayed_image() {
        assert_eq!(
            ProductDetailsViewModel::resolved_image(&form()),
            "https://example.com/mug.jpg"
        );
    }

    #[test]
    fn manual_override_wins_and_is_trimmed() {
        let mut f = form();
        f.image_url = "  https://example.com/new.jpg  ".to_string();
        assert_eq!(
            ProductDetailsViewModel::resolved_image(&f),
            "https://example.com/new.jpg"
        );
    }

    #[test]
    fn update_body_coerces_the_price() {
        let dto = ProductDetailsViewModel::to_update(&form());
        assert_eq!(dto.price, 12.5);
        assert_eq!(dto.images, vec!["https://example.com/mug.jpg".to_string()]);

        let mut f = form();
        f.price = "not a number".to_string();
        assert_eq!(ProductDetailsViewModel::to_update(&f).price, 0.0);
    }
}
