//! Reads a generated template back and checks it against the schema.

use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use calamine::{Data, Reader, open_workbook_auto};

use crate::schema::COLUMNS;
use crate::template::SHEET_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContents {
    pub sheet_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TemplateContents {
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }
}

fn datatype_to_string(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => format!("{other:?}"),
    }
}

/// Loads every row of the first sheet as strings.
pub fn read_template(path: &Path) -> Result<TemplateContents> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("failed to open file: {}", path.display()))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    // calamine ranges start at the first used cell; template data starts at A1
    let (height, width) = range.get_size();
    let rows = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| datatype_to_string(range.get((row, col))))
                .collect()
        })
        .collect();

    Ok(TemplateContents { sheet_names, rows })
}

pub fn verify_template(path: &Path) -> Result<TemplateContents> {
    let contents = read_template(path)?;

    ensure!(
        contents.sheet_names == [SHEET_NAME],
        "expected a single sheet named {SHEET_NAME}, found {:?}",
        contents.sheet_names
    );
    ensure!(
        contents.rows.len() == 2,
        "expected 2 rows, found {}",
        contents.rows.len()
    );
    ensure!(
        contents.header() == COLUMNS,
        "header row does not match the column schema"
    );

    Ok(contents)
}
