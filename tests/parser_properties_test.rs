// tests/parser_properties_test.rs

use proptest::prelude::*;

use trajectory_viewer::data::parser::parse_trajectory;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

proptest! {
    /// Each well-formed record yields exactly one point, scaled m → km.
    #[test]
    fn well_formed_records_scale_x_and_y(
        rows in prop::collection::vec((finite(), finite(), finite(), finite()), 0..50)
    ) {
        let text: String = rows
            .iter()
            .map(|(t, x, y, p)| format!("{t} {x}\t{y}   {p}\n"))
            .collect();

        let points = parse_trajectory(&text);
        prop_assert_eq!(points.len(), rows.len());
        for (point, (_, x, y, p)) in points.iter().zip(&rows) {
            prop_assert_eq!(point.x, x / 1000.0);
            prop_assert_eq!(point.y, y / 1000.0);
            prop_assert_eq!(point.p, *p);
        }
    }

    /// Non-numeric fields never fail the parse; they read as zero.
    #[test]
    fn malformed_fields_read_as_zero(
        junk in "x[a-z_]{0,7}",
        x in finite(),
    ) {
        let text = format!("{junk} {x} {junk} {junk}\n");
        let points = parse_trajectory(&text);
        prop_assert_eq!(points.len(), 1);
        prop_assert_eq!(points[0].x, x / 1000.0);
        prop_assert_eq!(points[0].y, 0.0);
        prop_assert_eq!(points[0].p, 0.0);
    }

    /// Points come out in line order, and parsing is repeatable.
    #[test]
    fn order_preserved_and_parse_is_idempotent(xs in prop::collection::vec(0u32..1_000_000, 1..40)) {
        let text: String = xs
            .iter()
            .enumerate()
            .map(|(i, x)| format!("{i} {x} 0 1\n"))
            .collect();

        let first = parse_trajectory(&text);
        let second = parse_trajectory(&text);
        prop_assert_eq!(&first, &second);

        let got: Vec<f64> = first.iter().map(|p| p.x).collect();
        let want: Vec<f64> = xs.iter().map(|&x| f64::from(x) / 1000.0).collect();
        prop_assert_eq!(got, want);
    }
}
