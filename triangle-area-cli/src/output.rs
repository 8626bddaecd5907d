use std::io::Write;

use triangle_area_core::prelude::{AreaReport, ReportSettings};

use crate::{cli::OutputFormat, error::CliError, messages::Language};

/// Write area report in given format.
pub fn write_report<W: Write>(
    output: &mut W,
    report: &AreaReport,
    format: OutputFormat,
    settings: &ReportSettings,
    language: Language,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(output, report, settings, language)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, report)?;
            writeln!(output)?;
        }
        OutputFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut *output, report)?;
            writeln!(output)?;
        }
        OutputFormat::Yaml => {
            let contents = serde_yaml::to_string(report)?;
            write!(output, "{}", contents)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn write_text<W: Write>(
    output: &mut W,
    report: &AreaReport,
    settings: &ReportSettings,
    language: Language,
) -> Result<(), CliError> {
    writeln!(output, "{}", language.results_header())?;
    for entry in report.entries() {
        writeln!(
            output,
            "{} -> {}: {}",
            language.triangle(&entry.triangle),
            language.area_label(),
            settings.format_area(entry.area)
        )?;
    }
    let largest = report.largest();
    writeln!(
        output,
        "\n{}: {}",
        language.largest_label(),
        language.triangle(&largest.triangle)
    )?;
    writeln!(
        output,
        "{}: {}",
        language.largest_area_label(),
        settings.format_area(largest.area)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangle_area_core::prelude::{Point, Triangle};

    fn report() -> AreaReport {
        AreaReport::new(&[
            Triangle::new(
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 3.0),
            ),
            Triangle::new(
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 1.0),
            ),
        ])
        .unwrap()
    }

    fn render(format: OutputFormat, language: Language) -> String {
        let mut output = vec![];
        write_report(
            &mut output,
            &report(),
            format,
            &ReportSettings::default(),
            language,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text() {
        assert_eq!(
            render(OutputFormat::Text, Language::English),
            "\n--- Results ---\n\
             Triangle [A(0; 0), B(4; 0), C(0; 3)] -> Area: 6.00\n\
             Triangle [A(1; 1), B(1; 1), C(1; 1)] -> Area: 0.00\n\
             \n\
             Largest by area: Triangle [A(0; 0), B(4; 0), C(0; 3)]\n\
             Its area: 6.00\n"
        );
    }

    #[test]
    fn test_text_ukrainian() {
        let output = render(OutputFormat::Text, Language::Ukrainian);
        assert!(output.contains("Трикутник [A(1; 1), B(1; 1), C(1; 1)] -> Площа: 0.00"));
        assert!(output.ends_with("Його площа: 6.00\n"));
    }

    #[test]
    fn test_json() {
        let output = render(OutputFormat::Json, Language::English);
        let value = serde_json::from_str::<serde_json::Value>(&output).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 2);
        assert_eq!(value["entries"][1]["area"], 0.0);
        assert_eq!(value["largest"]["index"], 1);
        assert_eq!(value["largest"]["area"], 6.0);
    }

    #[test]
    fn test_yaml() {
        let output = render(OutputFormat::Yaml, Language::English);
        let value = serde_yaml::from_str::<serde_yaml::Value>(&output).unwrap();
        assert_eq!(value["largest"]["index"].as_u64(), Some(1));
        assert_eq!(value["largest"]["area"].as_f64(), Some(6.0));
    }
}
