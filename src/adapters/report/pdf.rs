//! PDF health report via `printpdf`. Implements ReportRenderer.
//!
//! A4 page: centered title, a two-column Field/Value grid, footer with the
//! generation date. Builtin Helvetica only covers Latin-1, so rendered text
//! is reduced to ASCII first.

use crate::domain::{DomainError, HealthRecord};
use crate::ports::ReportRenderer;
use chrono::{DateTime, Local};
use printpdf::*;
use std::io::BufWriter;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;

const TITLE: &str = "MatriSense+ Health Report";

const TABLE_LEFT: f32 = 20.0;
const TABLE_RIGHT: f32 = 190.0;
const VALUE_COLUMN: f32 = 80.0;
const TABLE_TOP: f32 = PAGE_H - 30.0;
const ROW_H: f32 = 9.0;

/// Header fill (indigo) and title color, as 0-255 RGB.
const HEADER_FILL: (u8, u8, u8) = (63, 81, 181);
const TITLE_COLOR: (u8, u8, u8) = (40, 53, 147);
const FOOTER_GRAY: (u8, u8, u8) = (100, 100, 100);

/// Label/value rows in the fixed report order.
pub fn report_rows(record: &HealthRecord) -> Vec<(&'static str, String)> {
    let v = &record.vitals;
    let name = if record.name.trim().is_empty() {
        "N/A".to_string()
    } else {
        record.name.trim().to_string()
    };
    vec![
        ("Name", name),
        ("Age", format!("{}", v.age)),
        ("Systolic BP", format!("{} mmHg", v.systolic_bp)),
        ("Diastolic BP", format!("{} mmHg", v.diastolic_bp)),
        ("Blood Sugar", format!("{} mg/dL", v.blood_sugar)),
        ("Body Temp", format!("{} F", v.body_temp)),
        ("Heart Rate", format!("{} bpm", v.heart_rate)),
        ("Risk Level", record.risk.as_str().to_uppercase()),
    ]
}

pub fn footer_text(generated_at: DateTime<Local>) -> String {
    format!(
        "Generated on {} by MatriSense+",
        generated_at.format("%Y-%m-%d")
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportRenderer;

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(
        &self,
        record: &HealthRecord,
        generated_at: DateTime<Local>,
    ) -> Result<Vec<u8>, DomainError> {
        let (doc, page1, layer1) = PdfDocument::new(TITLE, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let layer = doc.get_page(page1).get_layer(layer1);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DomainError::Report(format!("PDF font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DomainError::Report(format!("PDF font error: {e}")))?;

        // Title
        layer.set_fill_color(rgb(TITLE_COLOR));
        layer.use_text(TITLE, 18.0, Mm(centered_x(TITLE, 18.0)), Mm(PAGE_H - 20.0), &bold);

        // Header row
        let rows = report_rows(record);
        let header_bottom = TABLE_TOP - ROW_H;
        layer.set_fill_color(rgb(HEADER_FILL));
        layer.add_rect(Rect::new(
            Mm(TABLE_LEFT),
            Mm(header_bottom),
            Mm(TABLE_RIGHT),
            Mm(TABLE_TOP),
        ));
        layer.set_fill_color(rgb((255, 255, 255)));
        let text_offset = 3.0;
        layer.use_text("Field", 11.0, Mm(TABLE_LEFT + 3.0), Mm(header_bottom + text_offset), &bold);
        layer.use_text("Value", 11.0, Mm(VALUE_COLUMN + 3.0), Mm(header_bottom + text_offset), &bold);

        // Body rows
        layer.set_fill_color(rgb((0, 0, 0)));
        let mut y = header_bottom;
        for (label, value) in &rows {
            let baseline = y - ROW_H + text_offset;
            layer.use_text(*label, 10.0, Mm(TABLE_LEFT + 3.0), Mm(baseline), &font);
            layer.use_text(ascii(value), 10.0, Mm(VALUE_COLUMN + 3.0), Mm(baseline), &font);
            y -= ROW_H;
        }
        let table_bottom = y;

        // Grid
        layer.set_outline_color(rgb((180, 180, 180)));
        layer.set_outline_thickness(0.5);
        for i in 0..=rows.len() + 1 {
            let line_y = TABLE_TOP - ROW_H * i as f32;
            layer.add_line(segment((TABLE_LEFT, line_y), (TABLE_RIGHT, line_y)));
        }
        for x in [TABLE_LEFT, VALUE_COLUMN, TABLE_RIGHT] {
            layer.add_line(segment((x, TABLE_TOP), (x, table_bottom)));
        }

        // Footer
        let footer = footer_text(generated_at);
        layer.set_fill_color(rgb(FOOTER_GRAY));
        layer.use_text(&footer, 10.0, Mm(centered_x(&footer, 10.0)), Mm(12.0), &font);

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| DomainError::Report(format!("PDF save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| DomainError::Report(format!("PDF buffer error: {e}")))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn segment(from: (f32, f32), to: (f32, f32)) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(from.0), Mm(from.1)), false),
            (Point::new(Mm(to.0), Mm(to.1)), false),
        ],
        is_closed: false,
    }
}

/// Approximate left edge for centered Helvetica text (average glyph ~0.5em).
fn centered_x(text: &str, font_size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.3528;
    let width = text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM;
    ((PAGE_W - width) / 2.0).max(TABLE_LEFT)
}

/// Replace anything outside printable ASCII with '?'.
fn ascii(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLabel, VitalSigns};
    use chrono::{TimeZone, Utc};

    fn record(name: &str, risk: RiskLabel) -> HealthRecord {
        HealthRecord {
            name: name.into(),
            vitals: VitalSigns {
                age: 29.0,
                systolic_bp: 150.0,
                diastolic_bp: 95.0,
                blood_sugar: 150.0,
                body_temp: 101.0,
                heart_rate: 110.0,
            },
            risk,
            assessed_at: Utc::now(),
        }
    }

    #[test]
    fn test_rows_fixed_order() {
        let rows = report_rows(&record("Meera", RiskLabel::High));
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Age",
                "Systolic BP",
                "Diastolic BP",
                "Blood Sugar",
                "Body Temp",
                "Heart Rate",
                "Risk Level"
            ]
        );
        assert_eq!(rows[0].1, "Meera");
        assert_eq!(rows[2].1, "150 mmHg");
        assert_eq!(rows[4].1, "150 mg/dL");
        assert_eq!(rows[5].1, "101 F");
        assert_eq!(rows[7].1, "HIGH");
    }

    #[test]
    fn test_blank_name_is_na() {
        let rows = report_rows(&record(" ", RiskLabel::Low));
        assert_eq!(rows[0].1, "N/A");
        assert_eq!(rows[7].1, "LOW");
    }

    #[test]
    fn test_footer_text() {
        let at = Local.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(footer_text(at), "Generated on 2025-06-01 by MatriSense+");
    }

    #[test]
    fn test_ascii_fallback() {
        assert_eq!(ascii("José 98.6"), "Jos? 98.6");
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = PdfReportRenderer::new()
            .render(&record("Meera", RiskLabel::Medium), Local::now())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
