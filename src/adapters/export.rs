use crate::domain::catalog::Catalog;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_finite;

const HEADERS: [&str; 3] = ["color", "model", "topSpeed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
    #[default]
    Table,
}

/// Renders the catalog for a downstream consumer.
///
/// A top speed that is NaN or infinite has no representation in every format,
/// so it is rejected here even when validation was not requested.
pub fn render(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    tracing::debug!("Rendering {} vehicles as {:?}", catalog.len(), format);

    for (index, vehicle) in catalog.iter().enumerate() {
        if let Some(top_speed) = vehicle.top_speed {
            validate_finite("topSpeed", top_speed).map_err(|e| CatalogError::RecordError {
                index,
                source: Box::new(e),
            })?;
        }
    }

    match format {
        OutputFormat::Json => render_json(catalog),
        OutputFormat::Csv => render_delimited(catalog, b','),
        OutputFormat::Tsv => render_delimited(catalog, b'\t'),
        OutputFormat::Table => Ok(render_table(catalog)),
    }
}

fn render_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.as_slice())?)
}

fn render_delimited(catalog: &Catalog, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for vehicle in catalog {
        let top_speed = format_speed(vehicle.top_speed).unwrap_or_default();
        writer.write_record([
            vehicle.color.as_str(),
            vehicle.model.as_str(),
            top_speed.as_str(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| CatalogError::CsvWriterError {
            message: e.to_string(),
        })?;

    Ok(String::from_utf8(data)?)
}

fn render_table(catalog: &Catalog) -> String {
    let rows: Vec<[String; 3]> = catalog
        .iter()
        .map(|v| {
            [
                v.color.clone(),
                v.model.clone(),
                format_speed(v.top_speed).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

// -0 is written as 0, same as the JSON output.
fn format_speed(speed: Option<f64>) -> Option<String> {
    speed.map(|v| (if v == 0.0 { 0.0 } else { v }).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::cars;
    use crate::domain::model::Vehicle;

    #[test]
    fn test_render_json() {
        let json = render(&cars(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"color": "blue", "model": "BMW"},
                {"color": "red", "model": "Mercedes", "topSpeed": 100}
            ])
        );
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&cars(), OutputFormat::Csv).unwrap();
        assert_eq!(csv, "color,model,topSpeed\nblue,BMW,\nred,Mercedes,100\n");
    }

    #[test]
    fn test_render_tsv() {
        let tsv = render(&cars(), OutputFormat::Tsv).unwrap();
        assert_eq!(tsv, "color\tmodel\ttopSpeed\nblue\tBMW\t\nred\tMercedes\t100\n");
    }

    #[test]
    fn test_render_csv_quotes_delimiters() {
        let catalog = Catalog::new(vec![Vehicle::new("dark, metallic blue", "BMW")]);
        let csv = render(&catalog, OutputFormat::Csv).unwrap();
        assert!(csv.contains("\"dark, metallic blue\",BMW,"));
    }

    #[test]
    fn test_render_table() {
        let table = render(&cars(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "color  model     topSpeed");
        assert_eq!(lines[1], "blue   BMW       -");
        assert_eq!(lines[2], "red    Mercedes  100");
    }

    #[test]
    fn test_non_finite_top_speed_is_rejected_in_every_format() {
        let catalog = Catalog::new(vec![
            Vehicle::new("blue", "BMW"),
            Vehicle::new("a", "A").with_top_speed(f64::NAN),
        ]);

        for format in [
            OutputFormat::Json,
            OutputFormat::Csv,
            OutputFormat::Tsv,
            OutputFormat::Table,
        ] {
            match render(&catalog, format) {
                Err(CatalogError::RecordError { index, source }) => {
                    assert_eq!(index, 1);
                    assert!(matches!(
                        *source,
                        CatalogError::InvalidValueError { ref field, .. } if field == "topSpeed"
                    ));
                }
                other => panic!("expected RecordError for {:?}, got {:?}", format, other),
            }
        }

        let catalog = Catalog::new(vec![Vehicle::new("a", "A").with_top_speed(f64::INFINITY)]);
        assert!(render(&catalog, OutputFormat::Json).is_err());
    }

    #[test]
    fn test_negative_zero_written_as_zero() {
        let catalog = Catalog::new(vec![Vehicle::new("b", "B").with_top_speed(-0.0)]);

        assert_eq!(
            render(&catalog, OutputFormat::Csv).unwrap(),
            "color,model,topSpeed\nb,B,0\n"
        );
        assert!(render(&catalog, OutputFormat::Table).unwrap().ends_with("B      0\n"));

        let value: serde_json::Value =
            serde_json::from_str(&render(&catalog, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value[0]["topSpeed"], serde_json::json!(0));
    }

    #[test]
    fn test_output_format_default_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
