pub mod inspect;
pub mod schema;
pub mod template;

use std::path::Path;

use anyhow::Result;

pub use template::{generate_template, generate_template_in};

/// Summary printed after a successful run: path, column count, numbered columns.
pub fn format_summary(output_path: &Path) -> String {
    let mut out = format!(
        "Template generated successfully: {}\nColumns included: {}\nColumn names:\n",
        output_path.display(),
        schema::COLUMNS.len()
    );
    for (i, column) in schema::COLUMNS.iter().enumerate() {
        out.push_str(&format!("{:2}. {column}\n", i + 1));
    }
    out
}

pub fn run() -> Result<()> {
    let output_path = generate_template()?;
    inspect::verify_template(&output_path)?;
    print!("{}", format_summary(&output_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_columns_in_order() {
        let summary = format_summary(Path::new("assets/templates/shop_import_template.xlsx"));
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(
            lines[0],
            "Template generated successfully: assets/templates/shop_import_template.xlsx"
        );
        assert_eq!(lines[1], "Columns included: 43");
        assert_eq!(lines[2], "Column names:");
        assert_eq!(lines[3], " 1. name");
        assert_eq!(lines[44], "42. gMap link");
        assert_eq!(lines[45], "43. Note");
        assert_eq!(lines.len(), 46);
    }
}
