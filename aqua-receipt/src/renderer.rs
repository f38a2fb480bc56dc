//! Fixed-layout PDF rendering
//!
//! Renders the ordered blocks of a [`ReceiptData`] onto an A4 page: title,
//! generation date, order id, delivery address, itemized table with totals
//! row, footer. Column layout is fixed; names are truncated to fit.

use crate::data::ReceiptData;
use crate::error::ReceiptResult;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use shared::models::BottleSize;
use shared::pricing::format_amount;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fixed artifact name offered to the user
pub const RECEIPT_FILE_NAME: &str = "aquavita-order-receipt.pdf";

/// Widest product name the table column fits
const MAX_NAME_WIDTH: usize = 30;

fn fit_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_WIDTH {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(MAX_NAME_WIDTH - 1).collect();
        format!("{truncated}…")
    }
}

/// Render the receipt to PDF bytes.
///
/// Returns `ReceiptError::Empty` when no row survived filtering; any layout
/// or emission failure from the PDF library is propagated for the caller to
/// surface.
pub fn render_pdf(receipt: &ReceiptData) -> ReceiptResult<Vec<u8>> {
    if receipt.rows.is_empty() {
        return Err(crate::error::ReceiptError::Empty);
    }

    debug!(order_id = %receipt.order_id, rows = receipt.rows.len(), "rendering receipt");

    let (doc, page, layer) = PdfDocument::new(
        format!("{} Order Receipt", receipt.brand.name),
        Mm(210.0),
        Mm(297.0),
        "receipt",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);

    // Header
    layer.use_text(
        format!("{} Order Receipt", receipt.brand.name),
        20.0,
        Mm(62.0),
        Mm(277.0),
        &bold,
    );

    // Date and order info
    layer.use_text(format!("Date: {}", receipt.date), 12.0, Mm(20.0), Mm(257.0), &font);
    layer.use_text(
        format!("Order ID: {}", receipt.order_id),
        12.0,
        Mm(20.0),
        Mm(247.0),
        &font,
    );

    // Delivery address block
    layer.use_text("Delivery Address:", 14.0, Mm(20.0), Mm(227.0), &bold);
    let mut cursor = 217.0;
    for (label, value) in [
        ("Country", receipt.address.country.as_str()),
        ("State", receipt.address.state.as_str()),
        ("District", receipt.address.district.as_str()),
        ("Mandal", receipt.address.mandal.as_str()),
        ("Village", receipt.address.village.as_str()),
        ("Address", receipt.address.address.as_str()),
    ] {
        layer.use_text(format!("{label}: {value}"), 12.0, Mm(30.0), Mm(cursor), &font);
        cursor -= 8.0;
    }

    // Itemized table
    cursor -= 6.0;
    let ml500 = BottleSize::Ml500.label();
    let ml1000 = BottleSize::Ml1000.label();
    let columns = [
        (20.0, "S.No".to_string()),
        (32.0, "Product".to_string()),
        (95.0, format!("{ml500} Qty")),
        (118.0, format!("{ml500} Price")),
        (143.0, format!("{ml1000} Qty")),
        (166.0, format!("{ml1000} Price")),
        (191.0, "Total".to_string()),
    ];
    for (x, heading) in columns {
        layer.use_text(heading, 10.0, Mm(x), Mm(cursor), &bold);
    }
    cursor -= 4.0;
    layer.use_text("=".repeat(96), 10.0, Mm(20.0), Mm(cursor), &font);
    cursor -= 7.0;

    for row in &receipt.rows {
        layer.use_text(row.seq.to_string(), 10.0, Mm(20.0), Mm(cursor), &font);
        layer.use_text(fit_name(&row.name), 10.0, Mm(32.0), Mm(cursor), &font);
        layer.use_text(row.qty_500ml.to_string(), 10.0, Mm(95.0), Mm(cursor), &font);
        layer.use_text(format_amount(row.price_500ml), 10.0, Mm(118.0), Mm(cursor), &font);
        layer.use_text(row.qty_1000ml.to_string(), 10.0, Mm(143.0), Mm(cursor), &font);
        layer.use_text(format_amount(row.price_1000ml), 10.0, Mm(166.0), Mm(cursor), &font);
        layer.use_text(format_amount(row.total), 10.0, Mm(191.0), Mm(cursor), &font);
        cursor -= 7.0;
    }

    // Totals row
    layer.use_text("=".repeat(96), 10.0, Mm(20.0), Mm(cursor), &font);
    cursor -= 7.0;
    layer.use_text("Total", 10.0, Mm(32.0), Mm(cursor), &bold);
    layer.use_text(
        receipt.totals.qty_500ml.to_string(),
        10.0,
        Mm(95.0),
        Mm(cursor),
        &bold,
    );
    layer.use_text(
        receipt.totals.qty_1000ml.to_string(),
        10.0,
        Mm(143.0),
        Mm(cursor),
        &bold,
    );
    layer.use_text(
        format_amount(receipt.totals.amount),
        10.0,
        Mm(191.0),
        Mm(cursor),
        &bold,
    );

    // Footer
    cursor -= 20.0;
    layer.use_text("Thank you for your order!", 12.0, Mm(78.0), Mm(cursor), &font);
    cursor -= 10.0;
    layer.use_text(
        format!("For any queries, please contact: {}", receipt.brand.support_phone),
        12.0,
        Mm(58.0),
        Mm(cursor),
        &font,
    );

    Ok(doc.save_to_bytes()?)
}

/// Render and write the receipt under its fixed file name.
pub fn save_to_dir(receipt: &ReceiptData, dir: &Path) -> ReceiptResult<PathBuf> {
    let bytes = render_pdf(receipt)?;
    let path = dir.join(RECEIPT_FILE_NAME);
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), "receipt saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReceiptData;
    use shared::models::{default_catalog, BottleSize, BrandInfo, LocationDetails};
    use shared::pricing::DiscountRates;

    fn sample_receipt() -> ReceiptData {
        let mut items = default_catalog();
        items[0].set_quantity(BottleSize::Ml500, 2);
        items[1].set_quantity(BottleSize::Ml1000, 1);
        let address = LocationDetails {
            state: "Telangana".to_string(),
            district: "Rangareddy".to_string(),
            mandal: "Chevella".to_string(),
            village: "Aloor".to_string(),
            ..Default::default()
        };
        ReceiptData::build(
            "ORD-42",
            1_704_067_200_000,
            &address,
            &items,
            &DiscountRates::standard(),
            &BrandInfo::default(),
        )
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_receipt()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_receipt_rejected() {
        let receipt = ReceiptData::build(
            "ORD-43",
            0,
            &LocationDetails::default(),
            &default_catalog(),
            &DiscountRates::none(),
            &BrandInfo::default(),
        );
        assert!(matches!(
            render_pdf(&receipt),
            Err(crate::error::ReceiptError::Empty)
        ));
    }

    #[test]
    fn test_save_uses_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_to_dir(&sample_receipt(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), RECEIPT_FILE_NAME);
        assert!(path.exists());
    }

    #[test]
    fn test_fit_name_truncates() {
        let long = "A very long product name that exceeds the table column width";
        let fitted = fit_name(long);
        assert!(fitted.chars().count() <= MAX_NAME_WIDTH);
        assert!(fitted.ends_with('…'));
        assert_eq!(fit_name("Aquavita Soda"), "Aquavita Soda");
    }
}
