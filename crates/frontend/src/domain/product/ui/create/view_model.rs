use super::model;
use contracts::domain::product::ProductCreate;
use leptos::prelude::*;
use std::rc::Rc;

/// Create form, all fields raw strings as the inputs hold them.
#[derive(Clone, Debug, Default)]
pub struct CreateProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
    pub category_id: String,
}

/// ViewModel for the new-product form
#[derive(Clone)]
pub struct ProductCreateViewModel {
    pub form: RwSignal<CreateProductForm>,
}

impl ProductCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CreateProductForm::default()),
        }
    }

    pub fn validate_form(form: &CreateProductForm) -> Result<(), &'static str> {
        if form.title.trim().is_empty()
            || form.price.trim().is_empty()
            || form.description.trim().is_empty()
            || form.image_url.trim().is_empty()
        {
            return Err("Please fill in all product fields!");
        }
        if form.price.trim().parse::<f64>().is_err() {
            return Err("Price must be a number!");
        }
        Ok(())
    }

    pub fn to_create(form: &CreateProductForm) -> ProductCreate {
        ProductCreate {
            title: form.title.clone(),
            price: form.price.trim().parse().unwrap_or(0.0),
            description: form.description.clone(),
            // unparsable category falls back to the default category
            category_id: form.category_id.trim().parse().unwrap_or(1),
            images: vec![form.image_url.clone()],
        }
    }

    /// Validate and submit. Validation failures alert and return before any
    /// request goes out; a successful create resets the form and runs
    /// `on_saved` (the caller refreshes the list and closes the modal).
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(msg);
            }
            return;
        }

        let dto = Self::to_create(&current);
        let form = self.form;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_product(&dto).await {
                Ok(created) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win
                            .alert_with_message(&format!("Product \"{}\" created!", created.title));
                    }
                    form.set(CreateProductForm::default());
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("creating product failed: {e}");
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Create failed: {}", e));
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreateProductForm {
        CreateProductForm {
            title: "Mug".to_string(),
            price: "12.5".to_string(),
            description: "ceramic".to_string(),
            image_url: "https://example.com/mug.jpg".to_string(),
            category_id: "3".to_string(),
        }
    }

    #[test]
    fn all_empty_fields_fail_validation() {
        let err = ProductCreateViewModel::validate_form(&CreateProductForm::default());
        assert_eq!(err, Err("Please fill in all product fields!"));
    }

    #[test]
    fn each_required_field_is_checked() {
        let cases: [fn(&mut CreateProductForm); 4] = [
            |f| f.title.clear(),
            |f| f.price.clear(),
            |f| f.description.clear(),
            |f| f.image_url.clear(),
        ];
        for clear in cases {
            let mut f = filled();
            clear(&mut f);
            assert!(ProductCreateViewModel::validate_form(&f).is_err());
        }
        // category id is optional
        let mut f = filled();
        f.category_id.clear();
        assert!(ProductCreateViewModel::validate_form(&f).is_ok());
    }

    #[test]
    fn non_numeric_price_fails_validation() {
        let mut f = filled();
        f.price = "twelve".to_string();
        assert_eq!(
            ProductCreateViewModel::validate_form(&f),
            Err("Price must be a number!")
        );
    }

    #[test]
    fn create_body_parses_numbers_and_defaults_the_category() {
        let dto = ProductCreateViewModel::to_create(&filled());
        assert_eq!(dto.price, 12.5);
        assert_eq!(dto.category_id, 3);
        assert_eq!(dto.images, vec!["https://example.com/mug.jpg".to_string()]);

        let mut f = filled();
        f.category_id = "garbage".to_string();
        assert_eq!(ProductCreateViewModel::to_create(&f).category_id, 1);
    }
}
