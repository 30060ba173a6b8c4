use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product category as the remote service returns it. Only the name is
/// rendered; the rest of the server object is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// A catalog product. Owned by the remote service; the client holds
/// transient copies replaced wholesale on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned unique id
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Absent for uncategorized products
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URLs. The service sometimes delivers these with stray
    /// bracket/quote characters baked into the string.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Name of the product's category, empty when uncategorized.
    pub fn category_name(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    /// First image URL, cleaned of literal `[`, `]` and `"` characters and
    /// trimmed. `None` when there are no images or cleaning leaves nothing.
    pub fn primary_image(&self) -> Option<String> {
        let raw = self.images.first()?;
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '"'))
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST {endpoint}` — create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductCreate {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

/// Body of `PUT {endpoint}/{id}` — update an existing product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_server_payload() {
        let json = r#"{
            "id": 7,
            "title": "Classic Red Pullover",
            "price": 89.5,
            "description": "A warm pullover",
            "category": { "id": 1, "name": "Clothes", "image": "x" },
            "images": ["https://example.com/a.jpg", "https://example.com/b.jpg"]
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.price, 89.5);
        assert_eq!(p.category_name(), "Clothes");
        assert_eq!(p.primary_image().as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn decodes_sparse_payload_without_category_or_images() {
        let json = r#"{ "id": 1, "title": "Bare", "price": 10 }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.description, "");
        assert!(p.category.is_none());
        assert_eq!(p.category_name(), "");
        assert!(p.primary_image().is_none());
    }

    #[test]
    fn primary_image_strips_brackets_and_quotes() {
        let p = Product {
            id: 1,
            title: "t".into(),
            price: 1.0,
            description: String::new(),
            category: None,
            images: vec![r#"["https://example.com/a.jpg" "#.into()],
        };
        assert_eq!(p.primary_image().as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn primary_image_none_when_cleaning_leaves_nothing() {
        let p = Product {
            id: 1,
            title: "t".into(),
            price: 1.0,
            description: String::new(),
            category: None,
            images: vec![r#"[""]"#.into()],
        };
        assert!(p.primary_image().is_none());
    }

    #[test]
    fn create_dto_uses_wire_field_names() {
        let dto = ProductCreate {
            title: "New".into(),
            price: 12.5,
            description: "d".into(),
            category_id: 1,
            images: vec!["https://example.com/a.jpg".into()],
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["images"][0], "https://example.com/a.jpg");
    }
}
