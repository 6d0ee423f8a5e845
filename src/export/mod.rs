//! CSV export of the filtered product set.
//!
//! Format: header `ID,Title,Price,Category,Description`, one row per product,
//! rows joined by `\n` with no trailing newline. Text columns are always
//! double-quoted with embedded quotes doubled; id and price are bare.

use crate::api::ProductSource;
use crate::model::{AppError, ExportError, Product};
use crate::view_state::ViewStateEngine;
use std::path::Path;
use tracing::info;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "products_export.csv";

/// Header row.
pub const CSV_HEADER: &str = "ID,Title,Price,Category,Description";

/// Serialize `products` to CSV text.
pub fn products_to_csv<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(products.into_iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(product: &Product) -> String {
    format!(
        "{},{},{},{},{}",
        product.id,
        quote(&product.title),
        product.price,
        quote(product.category_name().unwrap_or("")),
        quote(&product.description),
    )
}

/// Wrap in double quotes, doubling any embedded quote.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Write `products` as CSV to `path`.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// - [`ExportError::NothingToExport`] when `products` is empty; no file is created.
/// - [`ExportError::Io`] when the file cannot be written.
pub fn write_csv<'a, I>(path: &Path, products: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Product>,
    I::IntoIter: ExactSizeIterator,
{
    let products = products.into_iter();
    let count = products.len();
    if count == 0 {
        return Err(ExportError::NothingToExport);
    }

    let csv = products_to_csv(products);
    std::fs::write(path, csv).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(rows = count, path = %path.display(), "Exported products to CSV");
    Ok(count)
}

/// Fetch the whole catalog from `source` and export the rows `engine` derives.
///
/// Used by the headless `--export` mode: the engine carries the search and
/// sort chosen on the command line and is loaded with the fetched products.
pub fn export_from_source<S: ProductSource + ?Sized>(
    source: &S,
    mut engine: ViewStateEngine,
    path: &Path,
) -> Result<usize, AppError> {
    let products = source.fetch_all()?;
    engine.replace_all(products);
    Ok(write_csv(path, engine.derived())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductId};
    use std::fs;

    fn product(
        id: i64,
        title: &str,
        price: f64,
        category: Option<&str>,
        description: &str,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            description: description.to_string(),
            category: category.map(|name| Category {
                id: 1,
                name: name.to_string(),
            }),
            images: Vec::new(),
        }
    }

    #[test]
    fn header_only_for_no_products() {
        assert_eq!(products_to_csv(std::iter::empty()), CSV_HEADER);
    }

    #[test]
    fn rows_quote_text_columns() {
        let products = [
            product(1, "Shoe", 10.0, Some("Shoes"), "Running shoe"),
            product(2, "Hat", 5.5, None, "Wool"),
        ];
        let csv = products_to_csv(&products);
        assert_eq!(
            csv,
            "ID,Title,Price,Category,Description\n\
             1,\"Shoe\",10,\"Shoes\",\"Running shoe\"\n\
             2,\"Hat\",5.5,\"\",\"Wool\""
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote(r#"12" ruler"#), r#""12"" ruler""#);
        let products = [product(3, r#"The "Best" Tee"#, 1.0, None, "a, b")];
        let csv = products_to_csv(&products);
        assert!(csv.ends_with(r#"3,"The ""Best"" Tee",1,"","a, b""#));
    }

    #[test]
    fn write_csv_refuses_empty_set() {
        let path = std::env::temp_dir().join("prodadmin_export_empty.csv");
        let _ = fs::remove_file(&path);

        let empty: Vec<Product> = Vec::new();
        let result = write_csv(&path, &empty);

        assert!(matches!(result, Err(ExportError::NothingToExport)));
        assert!(!path.exists(), "No file should be written for an empty export");
    }

    #[test]
    fn write_csv_writes_file_and_counts_rows() {
        let path = std::env::temp_dir().join("prodadmin_export_rows.csv");
        let products = vec![
            product(1, "Shoe", 10.0, Some("Shoes"), "Running shoe"),
            product(2, "Hat", 5.0, None, "Wool"),
        ];

        let count = write_csv(&path, &products).unwrap();
        assert_eq!(count, 2);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
        assert!(written.starts_with(CSV_HEADER));

        fs::remove_file(path).ok();
    }

    struct FixedSource(Vec<Product>);

    impl ProductSource for FixedSource {
        fn fetch_all(&self) -> Result<Vec<Product>, crate::model::ApiError> {
            Ok(self.0.clone())
        }

        fn create(
            &self,
            _payload: &crate::model::ProductPayload,
        ) -> Result<Product, crate::model::ApiError> {
            unimplemented!("export never creates")
        }

        fn update(
            &self,
            _id: ProductId,
            _payload: &crate::model::ProductPayload,
        ) -> Result<crate::model::ProductPatch, crate::model::ApiError> {
            unimplemented!("export never updates")
        }
    }

    #[test]
    fn export_from_source_applies_search_and_sort() {
        use crate::view_state::{SortKey, SortSpec};

        let path = std::env::temp_dir().join("prodadmin_export_from_source.csv");
        let source = FixedSource(vec![
            product(1, "Shoe", 10.0, None, "a"),
            product(2, "Hat", 5.0, None, "b"),
            product(3, "Shoelace", 1.0, None, "c"),
        ]);
        let mut engine = ViewStateEngine::new();
        engine.set_search("shoe");
        engine.set_sort(Some(SortSpec::descending(SortKey::Id)));

        let count = export_from_source(&source, engine, &path).unwrap();
        assert_eq!(count, 2);

        let written = fs::read_to_string(&path).unwrap();
        let ids: Vec<&str> = written
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        assert_eq!(ids, vec!["3", "1"]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn export_from_source_reports_empty_result() {
        let path = std::env::temp_dir().join("prodadmin_export_from_source_empty.csv");
        let source = FixedSource(Vec::new());

        let result = export_from_source(&source, ViewStateEngine::new(), &path);
        assert!(matches!(
            result,
            Err(AppError::Export(ExportError::NothingToExport))
        ));
    }

    #[test]
    fn write_csv_reports_io_failure_with_path() {
        let path = std::env::temp_dir()
            .join("prodadmin_missing_dir_for_export")
            .join("nested")
            .join("out.csv");
        let products = vec![product(1, "Shoe", 10.0, None, "x")];

        match write_csv(&path, &products) {
            Err(ExportError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
