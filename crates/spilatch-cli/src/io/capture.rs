// crates/spilatch-cli/src/io/capture.rs

use anyhow::{bail, Context, Result};

/// Delimited capture table layout. The CLI defaults match the scope CSV export:
/// `;`-separated fields with a decimal comma.
#[derive(Clone, Copy, Debug)]
pub struct CaptureFormat {
    pub sep: char,
    pub decimal: char,
    pub clk_col: usize,
    pub data_col: usize,
}

/// Clock and data voltages, one entry per table row.
#[derive(Clone, Debug, Default)]
pub struct Channels {
    pub clock: Vec<f64>,
    pub data: Vec<f64>,
}

/// Load a capture table and extract the clock/data columns.
pub fn load_channels(path: &str, fmt: CaptureFormat) -> Result<Channels> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read capture {path}"))?;
    let ch = parse_channels(&text, fmt).with_context(|| format!("parse capture {path}"))?;
    log::debug!("loaded {path}: rows={}", ch.clock.len());
    Ok(ch)
}

/// Parse table text. The first non-blank line is the header and is skipped.
pub fn parse_channels(text: &str, fmt: CaptureFormat) -> Result<Channels> {
    if fmt.sep == fmt.decimal {
        bail!("field separator and decimal separator are both {:?}", fmt.sep);
    }

    let Some(need) = fmt.clk_col.max(fmt.data_col).checked_add(1) else {
        bail!("column index out of range: clk_col={} data_col={}", fmt.clk_col, fmt.data_col);
    };
    let mut ch = Channels::default();
    let mut header_seen = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let fields: Vec<&str> = line.split(fmt.sep).collect();
        if fields.len() < need {
            bail!(
                "line {line_no}: {} fields, need at least {need} (clk_col={} data_col={})",
                fields.len(),
                fmt.clk_col,
                fmt.data_col
            );
        }

        ch.clock.push(parse_field(fields[fmt.clk_col], fmt.decimal, line_no, fmt.clk_col)?);
        ch.data.push(parse_field(fields[fmt.data_col], fmt.decimal, line_no, fmt.data_col)?);
    }

    Ok(ch)
}

fn parse_field(field: &str, decimal: char, line_no: usize, col: usize) -> Result<f64> {
    let s = field.trim();
    let normalized;
    let s = if decimal != '.' {
        normalized = s.replace(decimal, ".");
        normalized.as_str()
    } else {
        s
    };
    s.parse::<f64>()
        .with_context(|| format!("line {line_no} column {col}: not a number: {field:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_fmt() -> CaptureFormat {
        CaptureFormat {
            sep: ';',
            decimal: ',',
            clk_col: 1,
            data_col: 2,
        }
    }

    #[test]
    fn parses_scope_export_with_decimal_comma() {
        let text = "Time;SCLK;MOSI\n0,000;0,1;3,3\n1e-6;3,25;0,05\n\n2e-6;-0,02;1,5\n";
        let ch = parse_channels(text, scope_fmt()).unwrap();
        assert_eq!(ch.clock, vec![0.1, 3.25, -0.02]);
        assert_eq!(ch.data, vec![3.3, 0.05, 1.5]);
    }

    #[test]
    fn custom_columns_and_plain_csv() {
        let fmt = CaptureFormat {
            sep: ',',
            decimal: '.',
            clk_col: 3,
            data_col: 1,
        };
        let text = "t,miso,mosi,sclk\n0,1.0,2.0,3.0\n1, 0.5 ,2.5,0.0\n";
        let ch = parse_channels(text, fmt).unwrap();
        assert_eq!(ch.clock, vec![3.0, 0.0]);
        assert_eq!(ch.data, vec![1.0, 0.5]);
    }

    #[test]
    fn header_only_is_empty() {
        let ch = parse_channels("Time;SCLK;MOSI\n", scope_fmt()).unwrap();
        assert!(ch.clock.is_empty() && ch.data.is_empty());
    }

    #[test]
    fn short_row_names_line() {
        let err = parse_channels("a;b;c\n0;1\n", scope_fmt()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn bad_number_names_line_and_column() {
        let err = parse_channels("a;b;c\n0;1;2\n0;x;2\n", scope_fmt()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 3 column 1"), "{msg}");
    }

    #[test]
    fn same_separators_rejected() {
        let fmt = CaptureFormat {
            sep: ',',
            ..scope_fmt()
        };
        assert!(parse_channels("a,b,c\n", fmt).is_err());
    }

    #[test]
    fn huge_column_index_is_an_error_not_a_panic() {
        let fmt = CaptureFormat {
            clk_col: usize::MAX,
            ..scope_fmt()
        };
        let err = parse_channels("a;b;c\n0;1;2\n", fmt).unwrap_err();
        assert!(format!("{err:#}").contains("column index out of range"));

        let fmt = CaptureFormat {
            data_col: usize::MAX - 1,
            ..scope_fmt()
        };
        let err = parse_channels("a;b;c\n0;1;2\n", fmt).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
