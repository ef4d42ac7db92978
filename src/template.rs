use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use umya_spreadsheet::structs::{Border, HorizontalAlignmentValues, VerticalAlignmentValues};

use crate::schema::{self, COLUMNS};

pub const TEMPLATE_DIR: &str = "assets/templates";
pub const TEMPLATE_FILE_NAME: &str = "shop_import_template.xlsx";
pub const SHEET_NAME: &str = "Shops";

pub(crate) fn cell_ref(col_1_based: usize, row_1_based: usize) -> String {
    fn col_to_name(mut col: usize) -> String {
        let mut name = String::new();
        while col > 0 {
            let rem = (col - 1) % 26;
            name.push((b'A' + rem as u8) as char);
            col = (col - 1) / 26;
        }
        name.chars().rev().collect()
    }

    format!("{}{}", col_to_name(col_1_based), row_1_based)
}

/// Bold, thin-bordered, centered header cells.
fn header_style() -> umya_spreadsheet::Style {
    let mut style = umya_spreadsheet::Style::default();
    style.get_font_mut().set_bold(true);

    let borders = style.get_borders_mut();
    borders.get_left_mut().set_border_style(Border::BORDER_THIN);
    borders.get_right_mut().set_border_style(Border::BORDER_THIN);
    borders.get_top_mut().set_border_style(Border::BORDER_THIN);
    borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);

    let alignment = style.get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Top);

    style
}

pub fn template_path(root: &Path) -> PathBuf {
    root.join(TEMPLATE_DIR).join(TEMPLATE_FILE_NAME)
}

/// Writes the template under the current working directory.
pub fn generate_template() -> Result<PathBuf> {
    generate_template_in(Path::new(""))
}

/// Writes `assets/templates/shop_import_template.xlsx` below `root`,
/// replacing any existing file, and returns its path.
pub fn generate_template_in(root: &Path) -> Result<PathBuf> {
    schema::validate()?;

    let output_dir = root.join(TEMPLATE_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create directory: {}", output_dir.display()))?;
    info!(dir = %output_dir.display(), "output directory ready");

    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(SHEET_NAME);

    let header_style = header_style();
    for (i, column) in COLUMNS.iter().enumerate() {
        let addr = cell_ref(i + 1, 1);
        sheet.get_cell_mut(addr.as_str()).set_value_string(*column);
        sheet
            .get_cell_mut(addr.as_str())
            .set_style(header_style.clone());
    }

    for (i, column) in COLUMNS.iter().enumerate() {
        // text cells only; columns without a sample stay blank
        let Some(value) = schema::sample_value(column) else {
            continue;
        };
        let addr = cell_ref(i + 1, 2);
        sheet.get_cell_mut(addr.as_str()).set_value_string(value);
        debug!(column = *column, cell = %addr, "sample value written");
    }

    let output_path = output_dir.join(TEMPLATE_FILE_NAME);
    umya_spreadsheet::writer::xlsx::write(&book, &output_path)
        .with_context(|| format!("failed to save file: {}", output_path.display()))?;
    info!(path = %output_path.display(), columns = COLUMNS.len(), "template saved");

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ref_spills_into_two_letters() {
        assert_eq!(cell_ref(1, 1), "A1");
        assert_eq!(cell_ref(26, 2), "Z2");
        assert_eq!(cell_ref(27, 1), "AA1");
        assert_eq!(cell_ref(43, 2), "AQ2");
    }

    #[test]
    fn template_path_is_fixed_below_root() {
        let path = template_path(Path::new("/tmp/x"));
        assert_eq!(
            path,
            PathBuf::from("/tmp/x/assets/templates/shop_import_template.xlsx")
        );
    }
}
