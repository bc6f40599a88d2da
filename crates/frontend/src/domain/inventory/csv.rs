//! Client-side parser for bulk inventory CSV/TXT uploads.
//!
//! The parse is pure, synchronous and atomic: either every data row is valid
//! and the whole list is returned, or the first invalid row aborts the parse
//! with a row-numbered message and nothing is returned. The original file
//! (not the parsed rows) is what gets sent to the backend; this parse exists
//! to give the user immediate feedback before any network call.

/// One validated inventory record from an uploaded file.
///
/// Never constructed with an invalid field; see [`parse_inventory_csv`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub medicine_name: String,
    /// Fractional input is floored.
    pub quantity: u32,
    /// Rounded half away from zero to 2 decimal places.
    pub price: f64,
}

/// Tokenize a single CSV line into trimmed fields.
///
/// Quoting follows RFC4180: `"` toggles quoted mode, a doubled `""` emits
/// one literal quote, commas inside quotes do not split. An unterminated
/// quote is closed silently at end of line.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            if chars.get(i + 1) == Some(&'"') {
                current.push('"');
                i += 2;
                continue;
            }
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
        i += 1;
    }
    fields.push(current.trim().to_string());
    fields
}

fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn round_price(value: f64) -> f64 {
    // Half away from zero on the parsed f64 value; "5.005" parses just below
    // 5.005 in binary and therefore rounds down to 5.00.
    (value * 100.0).round() / 100.0
}

/// Parse the full text of an uploaded file into validated rows.
///
/// The header must contain `medicine_name`, `quantity` and `price`
/// (case-insensitive, any column order). Error messages reference data rows
/// as `Row N`, 1-indexed against the non-empty lines with the header as
/// line 1.
pub fn parse_inventory_csv(text: &str) -> Result<Vec<ParsedRow>, String> {
    let lines: Vec<String> = text
        .split(['\n'])
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err("CSV must include a header row and at least one data row.".to_string());
    }

    let header: Vec<String> = split_csv_line(&lines[0])
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    let name_idx = header.iter().position(|h| h == "medicine_name");
    let quantity_idx = header.iter().position(|h| h == "quantity");
    let price_idx = header.iter().position(|h| h == "price");
    let (Some(name_idx), Some(quantity_idx), Some(price_idx)) =
        (name_idx, quantity_idx, price_idx)
    else {
        return Err("CSV header must include: medicine_name, quantity, price.".to_string());
    };

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for (line_index, line) in lines.iter().enumerate().skip(1) {
        let fields = split_csv_line(line);
        let row_number = line_index + 1;

        let medicine_name = fields.get(name_idx).map(String::as_str).unwrap_or("").trim();
        if medicine_name.is_empty() {
            return Err(format!("Row {}: medicine_name is required", row_number));
        }

        let quantity = fields
            .get(quantity_idx)
            .and_then(|f| parse_number(f))
            .filter(|q| *q >= 0.0)
            .ok_or_else(|| {
                format!("Row {}: quantity must be a non-negative number", row_number)
            })?;

        let price = fields
            .get(price_idx)
            .and_then(|f| parse_number(f))
            .filter(|p| *p >= 0.0)
            .ok_or_else(|| format!("Row {}: price must be a non-negative number", row_number))?;

        rows.push(ParsedRow {
            medicine_name: medicine_name.to_string(),
            quantity: quantity.floor() as u32,
            price: round_price(price),
        });
    }

    if rows.is_empty() {
        return Err("CSV must include at least one data row.".to_string());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_quoted_fields_with_doubled_quotes() {
        let fields = split_csv_line(r#""Med, ""Extra"" Strength",10,5.00"#);
        assert_eq!(fields, vec!["Med, \"Extra\" Strength", "10", "5.00"]);
    }

    #[test]
    fn tokenizer_closes_unterminated_quote_at_end_of_line() {
        let fields = split_csv_line(r#""Aspirin 100mg,10,2.50"#);
        assert_eq!(fields, vec!["Aspirin 100mg,10,2.50"]);
    }

    #[test]
    fn tokenizer_trims_fields() {
        let fields = split_csv_line("  Aspirin 100mg , 10 ,2.50 ");
        assert_eq!(fields, vec!["Aspirin 100mg", "10", "2.50"]);
    }

    #[test]
    fn parses_rows_regardless_of_header_order() {
        let reordered = "price,medicine_name,quantity\n5.50,Paracetamol 500mg,100";
        let canonical = "medicine_name,quantity,price\nParacetamol 500mg,100,5.50";
        assert_eq!(
            parse_inventory_csv(reordered).unwrap(),
            parse_inventory_csv(canonical).unwrap()
        );
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let text = "Medicine_Name,QUANTITY,Price\nParacetamol 500mg,100,5.50";
        let rows = parse_inventory_csv(text).unwrap();
        assert_eq!(rows[0].medicine_name, "Paracetamol 500mg");
    }

    #[test]
    fn floors_quantity_and_rounds_price_to_two_decimals() {
        let text = "medicine_name,quantity,price\nParacetamol 500mg,10.9,5.005";
        let rows = parse_inventory_csv(text).unwrap();
        assert_eq!(rows[0].quantity, 10);
        // 5.005 is stored as 5.00499... in binary, so half-away-from-zero
        // rounding on the parsed value yields 5.00.
        assert_eq!(rows[0].price, 5.0);

        let text = "medicine_name,quantity,price\nIbuprofen 200mg,50,8.1234";
        let rows = parse_inventory_csv(text).unwrap();
        assert_eq!(rows[0].price, 8.12);
    }

    #[test]
    fn parse_is_atomic_and_reports_one_indexed_rows() {
        let text = "medicine_name,quantity,price\n\
                    A,1,1.00\n\
                    B,2,2.00\n\
                    C,-3,3.00\n\
                    D,4,4.00\n\
                    E,5,5.00";
        let err = parse_inventory_csv(text).unwrap_err();
        assert_eq!(err, "Row 4: quantity must be a non-negative number");
    }

    #[test]
    fn rejects_missing_header_columns() {
        let text = "medicine_name,amount,price\nParacetamol,10,5.00";
        assert_eq!(
            parse_inventory_csv(text).unwrap_err(),
            "CSV header must include: medicine_name, quantity, price."
        );
    }

    #[test]
    fn rejects_header_only_and_empty_input() {
        let expected = "CSV must include a header row and at least one data row.";
        assert_eq!(parse_inventory_csv("medicine_name,quantity,price").unwrap_err(), expected);
        assert_eq!(parse_inventory_csv("").unwrap_err(), expected);
    }

    #[test]
    fn rejects_empty_medicine_name() {
        let text = "medicine_name,quantity,price\n ,10,5.00";
        assert_eq!(
            parse_inventory_csv(text).unwrap_err(),
            "Row 2: medicine_name is required"
        );
    }

    #[test]
    fn rejects_non_numeric_quantity_and_price() {
        let text = "medicine_name,quantity,price\nParacetamol,many,5.00";
        assert_eq!(
            parse_inventory_csv(text).unwrap_err(),
            "Row 2: quantity must be a non-negative number"
        );

        let text = "medicine_name,quantity,price\nParacetamol,10,free";
        assert_eq!(
            parse_inventory_csv(text).unwrap_err(),
            "Row 2: price must be a non-negative number"
        );

        let text = "medicine_name,quantity,price\nParacetamol,10,";
        assert_eq!(
            parse_inventory_csv(text).unwrap_err(),
            "Row 2: price must be a non-negative number"
        );
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let text = "medicine_name,quantity,price\r\n\r\nParacetamol 500mg,100,5.50\r\n\r\n";
        let rows = parse_inventory_csv(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].medicine_name, "Paracetamol 500mg");
    }
}
