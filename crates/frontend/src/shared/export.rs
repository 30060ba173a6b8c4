/// CSV export with a client-side download
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Row types that can be exported to CSV
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// One CSV line worth of pre-formatted cells. Text cells go through
    /// [`quote_field`]; numeric cells are emitted bare.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Wrap a text field in double quotes, doubling any embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Build the CSV text for a list of rows: header line, then one line per row,
/// each terminated by `\n`.
pub fn csv_text<T: CsvExportable>(data: &[T]) -> String {
    let mut out = String::new();
    out.push_str(&T::headers().join(","));
    out.push('\n');
    for item in data {
        out.push_str(&item.to_csv_row().join(","));
        out.push('\n');
    }
    out
}

/// Serialize the rows and trigger a browser download of the resulting file.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_csv_blob(&csv_text(data))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download a blob through a temporary anchor element
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: String,
        amount: f64,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![quote_field(&self.name), self.amount.to_string()]
        }
    }

    #[test]
    fn builds_header_and_rows() {
        let rows = vec![
            Line { name: "A".into(), amount: 10.0 },
            Line { name: "B".into(), amount: 2.5 },
        ];
        assert_eq!(csv_text(&rows), "Name,Amount\n\"A\",10\n\"B\",2.5\n");
    }

    #[test]
    fn quote_field_doubles_embedded_quotes() {
        assert_eq!(quote_field(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(quote_field("a,b"), "\"a,b\"");
    }
}
