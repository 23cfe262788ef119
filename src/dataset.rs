use crate::scoring::ScoreError;

/// The 13 columns a product export must contain. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "Product Code",
    "product name",
    "Add-to-Cart Rate",
    "Total Sales",
    "Order Rate (Confirmed)",
    "Repeat Purchase Rate",
    "Quantity Sold (Confirmed)",
    "Average Time Before Repurchase",
    "Purchase Rate",
    "Product Visitors",
    "Number of Clicks from Search Results",
    "Buyer (Order confirmed)",
    "Product views",
];

/// Raw tabular input as parsed from a file: one header row plus string cells.
///
/// Rows are kept in their original order. Nothing here is interpreted; the
/// scoring engine checks the schema and converts rows to [`ProductRecord`]s.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// One product row with typed fields.
///
/// Static field access instead of lookup-by-column-name: a typo in a metric
/// name is a compile error here, not a runtime surprise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub product_code: String,
    pub product_name: String,
    pub add_to_cart_rate: f64,
    pub total_sales: f64,
    pub order_rate_confirmed: f64,
    pub repeat_purchase_rate: f64,
    pub quantity_sold_confirmed: f64,
    pub avg_time_before_repurchase: f64,
    pub purchase_rate: f64,
    pub product_visitors: f64,
    pub search_clicks: f64,
    pub buyers: f64,
    pub product_views: f64,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Every required column absent from the header row, in the order of
    /// [`REQUIRED_COLUMNS`]. Empty means the schema is complete.
    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect()
    }

    fn column_index(&self, name: &str) -> usize {
        // Only called after the schema check has passed.
        self.headers
            .iter()
            .position(|h| h == name)
            .unwrap_or_else(|| panic!("column '{}' checked but not found", name))
    }

    /// Convert rows to typed records. Fails with the full missing-column
    /// list if the schema is incomplete; a cell that does not parse as a
    /// number is a structural error naming the column and the 1-based data
    /// row.
    pub fn to_products(&self) -> Result<Vec<ProductRecord>, ScoreError> {
        let missing = self.missing_columns();
        if !missing.is_empty() {
            return Err(ScoreError::MissingColumns { columns: missing });
        }

        let idx: Vec<usize> = REQUIRED_COLUMNS
            .iter()
            .map(|col| self.column_index(col))
            .collect();

        let numeric = |row: &[String], row_no: usize, i: usize| -> Result<f64, ScoreError> {
            let value = row.get(idx[i]).map(String::as_str).unwrap_or("");
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ScoreError::NonNumericValue {
                    column: REQUIRED_COLUMNS[i].to_string(),
                    row: row_no,
                    value: value.to_string(),
                })
        };

        self.rows
            .iter()
            .enumerate()
            .map(|(n, row)| {
                let row_no = n + 1;
                Ok(ProductRecord {
                    product_code: row.get(idx[0]).cloned().unwrap_or_default(),
                    product_name: row.get(idx[1]).cloned().unwrap_or_default(),
                    add_to_cart_rate: numeric(row, row_no, 2)?,
                    total_sales: numeric(row, row_no, 3)?,
                    order_rate_confirmed: numeric(row, row_no, 4)?,
                    repeat_purchase_rate: numeric(row, row_no, 5)?,
                    quantity_sold_confirmed: numeric(row, row_no, 6)?,
                    avg_time_before_repurchase: numeric(row, row_no, 7)?,
                    purchase_rate: numeric(row, row_no, 8)?,
                    product_visitors: numeric(row, row_no, 9)?,
                    search_clicks: numeric(row, row_no, 10)?,
                    buyers: numeric(row, row_no, 11)?,
                    product_views: numeric(row, row_no, 12)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_headers() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn numeric_row(code: &str, name: &str) -> Vec<String> {
        let mut row = vec![code.to_string(), name.to_string()];
        row.extend((0..11).map(|i| format!("{}.5", i)));
        row
    }

    #[test]
    fn test_complete_schema_has_no_missing_columns() {
        let table = Table::new(full_headers(), vec![]);
        assert!(table.missing_columns().is_empty());
    }

    #[test]
    fn test_missing_columns_reports_every_absent_name() {
        let headers: Vec<String> = full_headers()
            .into_iter()
            .filter(|h| h != "Total Sales" && h != "Product views")
            .collect();
        let table = Table::new(headers, vec![]);
        assert_eq!(
            table.missing_columns(),
            vec!["Total Sales".to_string(), "Product views".to_string()]
        );
    }

    #[test]
    fn test_extra_columns_do_not_affect_schema_check() {
        let mut headers = full_headers();
        headers.push("Store ID".to_string());
        headers.push("Category".to_string());
        let table = Table::new(headers, vec![]);
        assert!(table.missing_columns().is_empty());

        let mut partial: Vec<String> = full_headers()
            .into_iter()
            .filter(|h| h != "Purchase Rate")
            .collect();
        partial.push("Store ID".to_string());
        let table = Table::new(partial, vec![]);
        assert_eq!(table.missing_columns(), vec!["Purchase Rate".to_string()]);
    }

    #[test]
    fn test_to_products_parses_typed_rows() {
        let table = Table::new(full_headers(), vec![numeric_row("P-1", "Widget")]);
        let products = table.to_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_code, "P-1");
        assert_eq!(products[0].product_name, "Widget");
        assert_eq!(products[0].add_to_cart_rate, 0.5);
        assert_eq!(products[0].product_views, 10.5);
    }

    #[test]
    fn test_to_products_ignores_extra_columns() {
        let mut headers = full_headers();
        headers.push("Category".to_string());
        let mut row = numeric_row("P-1", "Widget");
        row.push("garden".to_string());
        let table = Table::new(headers, vec![row]);
        let products = table.to_products().unwrap();
        assert_eq!(products[0].product_code, "P-1");
    }

    #[test]
    fn test_to_products_reports_non_numeric_cell() {
        let mut row = numeric_row("P-1", "Widget");
        row[3] = "n/a".to_string(); // Total Sales
        let table = Table::new(full_headers(), vec![numeric_row("P-0", "Ok"), row]);
        let err = table.to_products().unwrap_err();
        match err {
            ScoreError::NonNumericValue { column, row, value } => {
                assert_eq!(column, "Total Sales");
                assert_eq!(row, 2);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
