//! PDF and Excel renderings of the access report.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use rust_xlsxwriter::{Format, Workbook};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::dashboard::AccessReportRow,
};

const TITLE: &str = "Access report";
const HEADERS: [&str; 7] = ["Access", "Date (UTC)", "Plate", "Kind", "Color", "Owner", "Result"];

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;
const FONT_SIZE: f32 = 9.0;
const COLUMN_X: [f32; 7] = [15.0, 32.0, 67.0, 92.0, 117.0, 140.0, 180.0];

fn cells(row: &AccessReportRow) -> [String; 7] {
    [
        row.access_id.to_string(),
        row.occurred_at.format("%Y-%m-%d %H:%M").to_string(),
        row.plate.clone().unwrap_or_default(),
        row.vehicle_kind
            .map(|k| k.as_str().to_string())
            .unwrap_or_default(),
        row.color.clone().unwrap_or_default(),
        row.owner_name.clone().unwrap_or_default(),
        row.result.as_str().to_string(),
    ]
}

fn pdf_error(e: printpdf::Error) -> AppError {
    InternalError::Export {
        format: "pdf",
        reason: e.to_string(),
    }
    .into()
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    InternalError::Export {
        format: "xlsx",
        reason: e.to_string(),
    }
    .into()
}

/// Renders the report as an A4 table, starting a new page whenever one fills up.
pub fn render_pdf(rows: &[AccessReportRow]) -> Result<Vec<u8>, AppError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(TITLE, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(TITLE, 14.0, Mm(MARGIN), Mm(PAGE_HEIGHT.0 - MARGIN), &bold);
    let mut y = PAGE_HEIGHT.0 - MARGIN - 2.0 * ROW_HEIGHT;
    write_row(&layer, &HEADERS.map(str::to_string), y, &bold);

    for row in rows {
        y -= ROW_HEIGHT;
        if y < MARGIN {
            let (page, page_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT.0 - MARGIN;
            write_row(&layer, &HEADERS.map(str::to_string), y, &bold);
            y -= ROW_HEIGHT;
        }
        write_row(&layer, &cells(row), y, &regular);
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn write_row(layer: &PdfLayerReference, cells: &[String; 7], y: f32, font: &IndirectFontRef) {
    for (text, x) in cells.iter().zip(COLUMN_X) {
        layer.use_text(text.as_str(), FONT_SIZE, Mm(x), Mm(y), font);
    }
}

/// Renders the report as a single-sheet workbook with a bold header row.
pub fn render_xlsx(rows: &[AccessReportRow]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Accesses").map_err(xlsx_error)?;

    for (col, title) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(xlsx_error)?;
        sheet
            .set_column_width(col as u16, 18)
            .map_err(xlsx_error)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;

        sheet
            .write_number(line, 0, row.access_id as f64)
            .map_err(xlsx_error)?;
        for (col, text) in cells(row).into_iter().enumerate().skip(1) {
            sheet
                .write_string(line, col as u16, text)
                .map_err(xlsx_error)?;
        }
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{access::AccessResult, vehicle::VehicleKind};
    use chrono::Utc;

    fn rows(count: usize) -> Vec<AccessReportRow> {
        (0..count)
            .map(|i| AccessReportRow {
                access_id: i as i32 + 1,
                occurred_at: Utc::now(),
                plate: Some(format!("ABC{:03}", i)),
                vehicle_kind: Some(VehicleKind::Car),
                color: Some("Red".to_string()),
                owner_name: Some("Ana Gomez".to_string()),
                result: AccessResult::Authorized,
            })
            .collect()
    }

    #[test]
    fn renders_multi_page_pdf() {
        let bytes = render_pdf(&rows(120)).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_xlsx_archive() {
        let bytes = render_xlsx(&rows(3)).unwrap();

        // xlsx files are zip archives
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn renders_empty_report() {
        assert!(render_pdf(&[]).is_ok());
        assert!(render_xlsx(&[]).is_ok());
    }
}
