use super::model::SamplePoint;

/// Raw distances are stored in metres; the chart works in kilometres.
const METRES_PER_KM: f64 = 1000.0;

/// Number of whitespace-separated fields a record must carry.
const FIELDS_PER_RECORD: usize = 4;

/// Parse a trajectory file into sample points, one per record line.
///
/// Records are separated by `\n`, `\r`, or `\r\n`.
/// Record layout: `<t> <x> <y> <p>` separated by arbitrary whitespace.
/// * field 0 is ignored
/// * x and y are divided by 1000 (m → km), p is kept as is
/// * a field that is not a number becomes `0.0`
/// * lines with fewer than four fields (blank lines included) are skipped
/// * extra trailing fields are ignored
pub fn parse_trajectory(text: &str) -> Vec<SamplePoint> {
    text.split(['\n', '\r'])
        .enumerate()
        .filter_map(|(line_no, line)| {
            let point = parse_record(line);
            if point.is_none() && !line.trim().is_empty() {
                log::debug!("skipping record {}: fewer than {FIELDS_PER_RECORD} fields", line_no + 1);
            }
            point
        })
        .collect()
}

/// Decode raw asset bytes (lossily) and parse them.
pub fn parse_trajectory_bytes(bytes: &[u8]) -> Vec<SamplePoint> {
    parse_trajectory(&String::from_utf8_lossy(bytes))
}

fn parse_record(line: &str) -> Option<SamplePoint> {
    let fields: Vec<&str> = line.split_whitespace().take(FIELDS_PER_RECORD).collect();
    if fields.len() < FIELDS_PER_RECORD {
        return None;
    }
    Some(SamplePoint {
        x: number_or_zero(fields[1]) / METRES_PER_KM,
        y: number_or_zero(fields[2]) / METRES_PER_KM,
        p: number_or_zero(fields[3]),
    })
}

fn number_or_zero(token: &str) -> f64 {
    token.parse().unwrap_or(0.0)
}
