//! Downloadable CSV template for the bulk inventory upload.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const TEMPLATE_FILE_NAME: &str = "pharmy_inventory_template.csv";

/// Template body: the required header plus three example rows.
pub fn template_csv() -> String {
    [
        "medicine_name,quantity,price",
        "Paracetamol 500mg,100,5.50",
        "Ibuprofen 200mg,50,8.00",
        "Amoxicillin 250mg,75,12.50",
    ]
    .join("\n")
}

/// Build the template file in memory and trigger a browser download.
pub fn download_template() -> Result<(), String> {
    let blob = create_csv_blob(&template_csv())?;
    download_blob(&blob, TEMPLATE_FILE_NAME)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

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
    use crate::domain::inventory::csv::{parse_inventory_csv, ParsedRow};

    #[test]
    fn template_parses_to_exactly_its_three_example_rows() {
        let rows = parse_inventory_csv(&template_csv()).unwrap();
        assert_eq!(
            rows,
            vec![
                ParsedRow {
                    medicine_name: "Paracetamol 500mg".to_string(),
                    quantity: 100,
                    price: 5.50,
                },
                ParsedRow {
                    medicine_name: "Ibuprofen 200mg".to_string(),
                    quantity: 50,
                    price: 8.00,
                },
                ParsedRow {
                    medicine_name: "Amoxicillin 250mg".to_string(),
                    quantity: 75,
                    price: 12.50,
                },
            ]
        );
    }
}
