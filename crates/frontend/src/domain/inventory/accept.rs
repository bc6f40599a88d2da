//! Gate for which files may proceed to parsing.

/// Message surfaced when a selected file is rejected.
pub const UPLOAD_REJECTED_MESSAGE: &str = "Only CSV and TXT files are allowed.";

const ALLOWED_EXTENSIONS: [&str; 2] = [".csv", ".txt"];

// Browsers and OSes disagree on the declared type for .csv/.txt files;
// Windows/Excel reports "application/vnd.ms-excel" and some leave it unset.
const ALLOWED_MIME_TYPES: [&str; 3] = ["text/csv", "text/plain", "application/vnd.ms-excel"];

/// Accepts a file when both its extension and declared media type are on the
/// allow-list. An empty media type passes; the extension never may.
pub fn is_allowed_upload(file_name: &str, mime_type: &str) -> bool {
    let name = file_name.to_lowercase();
    let extension_ok = ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext));
    let mime_ok = mime_type.is_empty() || ALLOWED_MIME_TYPES.contains(&mime_type);
    extension_ok && mime_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_and_txt_with_allowed_or_empty_media_type() {
        assert!(is_allowed_upload("stock.csv", "text/csv"));
        assert!(is_allowed_upload("stock.txt", "text/plain"));
        assert!(is_allowed_upload("stock.csv", "application/vnd.ms-excel"));
        assert!(is_allowed_upload("stock.csv", ""));
        assert!(is_allowed_upload("STOCK.CSV", "text/csv"));
    }

    #[test]
    fn rejects_other_extensions_regardless_of_media_type() {
        assert!(!is_allowed_upload("stock.pdf", "text/csv"));
        assert!(!is_allowed_upload("stock.pdf", ""));
        assert!(!is_allowed_upload("stock", "text/plain"));
    }

    #[test]
    fn rejects_disallowed_media_types() {
        assert!(!is_allowed_upload("stock.csv", "application/pdf"));
        assert!(!is_allowed_upload("stock.txt", "image/png"));
    }
}
