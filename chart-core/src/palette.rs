use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Canonical 7-color sequence. Used as-is for seven series and as the
/// repeating unit for any count without a curated table entry.
pub const BASE_PALETTE: [&str; 7] = [
    "#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ae2c87", "#ffa58c", "#4378bf",
];

// Curated sequences for 1..=6 series, indexed by count - 1.
const BAR: [&[&str]; 6] = [
    &["#46bac2"],
    &["#46bac2", "#4378bf"],
    &["#8bdcbe", "#4378bf", "#46bac2"],
    &["#46bac2", "#371ea3", "#8bdcbe", "#4378bf"],
    &["#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ffa58c"],
    &["#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ae2c87", "#ffa58c"],
];

const LINE: [&[&str]; 6] = [
    &["#46bac2"],
    &["#8bdcbe", "#4378bf"],
    &["#8bdcbe", "#f05a71", "#4378bf"],
    &["#8bdcbe", "#f05a71", "#4378bf", "#ffa58c"],
    &["#8bdcbe", "#f05a71", "#4378bf", "#ae2c87", "#ffa58c"],
    &["#8bdcbe", "#f05a71", "#46bac2", "#ae2c87", "#ffa58c", "#4378bf"],
];

const POINT: [&str; 3] = ["#371ea3", "#46bac2", "#ceced9"];
const BREAK_DOWN: [&str; 3] = ["#8bdcbe", "#f05a71", "#371ea3"];

/// Kind of chart a palette is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Point,
    BreakDown,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Point,
        ChartKind::BreakDown,
    ];

    /// Token used by the widget options (`"bar"`, `"line"`, `"point"`, `"breakDown"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Point => "point",
            ChartKind::BreakDown => "breakDown",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ChartError::UnsupportedChartKind(s.to_string()))
    }
}

/// Colors for `count` series of the given chart kind.
///
/// Bar and line charts have hand-picked sequences for 1 to 7 series. Any
/// other count (including 0) falls back to the base sequence repeated
/// `count % 7 + 1` times. The result is not truncated to `count`; slice it
/// or use [`palette_exact`] when one color per series is needed.
///
/// The repeat rule under-supplies colors for counts such as 14 (two
/// repetitions) and is kept only for compatibility with existing widgets.
pub fn palette(count: usize, kind: ChartKind) -> Vec<&'static str> {
    match kind {
        ChartKind::Point => POINT.to_vec(),
        ChartKind::BreakDown => BREAK_DOWN.to_vec(),
        ChartKind::Bar => curated(&BAR, count),
        ChartKind::Line => curated(&LINE, count),
    }
}

fn curated(table: &[&'static [&'static str]; 6], count: usize) -> Vec<&'static str> {
    match count {
        1..=6 => table[count - 1].to_vec(),
        7 => BASE_PALETTE.to_vec(),
        _ => BASE_PALETTE.repeat(count % BASE_PALETTE.len() + 1),
    }
}

/// Same as [`palette`] but takes the chart kind as its widget token.
pub fn get_palette(count: usize, kind: &str) -> Result<Vec<&'static str>, ChartError> {
    Ok(palette(count, kind.parse()?))
}

/// Exactly `count` colors, cycling through [`palette`] when it comes up short.
pub fn palette_exact(count: usize, kind: ChartKind) -> Vec<&'static str> {
    palette(count, kind).into_iter().cycle().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: [&str; 7] = [
        "#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ae2c87", "#ffa58c", "#4378bf",
    ];

    #[test]
    fn bar_single_series() {
        assert_eq!(get_palette(1, "bar").unwrap(), vec!["#46bac2"]);
    }

    #[test]
    fn seven_series_is_base() {
        assert_eq!(get_palette(7, "bar").unwrap(), BASE.to_vec());
        assert_eq!(get_palette(7, "line").unwrap(), BASE.to_vec());
        assert_eq!(BASE_PALETTE, BASE);
    }

    #[test]
    fn line_three_series() {
        assert_eq!(
            get_palette(3, "line").unwrap(),
            vec!["#8bdcbe", "#f05a71", "#4378bf"]
        );
    }

    #[test]
    fn curated_tables() {
        let bar: [&[&str]; 7] = [
            &["#46bac2"],
            &["#46bac2", "#4378bf"],
            &["#8bdcbe", "#4378bf", "#46bac2"],
            &["#46bac2", "#371ea3", "#8bdcbe", "#4378bf"],
            &["#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ffa58c"],
            &["#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ae2c87", "#ffa58c"],
            &BASE,
        ];
        let line: [&[&str]; 7] = [
            &["#46bac2"],
            &["#8bdcbe", "#4378bf"],
            &["#8bdcbe", "#f05a71", "#4378bf"],
            &["#8bdcbe", "#f05a71", "#4378bf", "#ffa58c"],
            &["#8bdcbe", "#f05a71", "#4378bf", "#ae2c87", "#ffa58c"],
            &["#8bdcbe", "#f05a71", "#46bac2", "#ae2c87", "#ffa58c", "#4378bf"],
            &BASE,
        ];
        for (kind, table) in [("bar", bar), ("line", line)] {
            for (i, expected) in table.iter().enumerate() {
                let n = i + 1;
                assert_eq!(
                    get_palette(n, kind).unwrap(),
                    expected.to_vec(),
                    "{kind} with {n} series"
                );
            }
        }
    }

    #[test]
    fn fallback_repeats_base() {
        let colors = palette(10, ChartKind::Bar);
        assert_eq!(colors.len(), 28);
        for chunk in colors.chunks(7) {
            assert_eq!(chunk, BASE);
        }
    }

    #[test]
    fn zero_count_gives_one_base_repetition() {
        assert_eq!(palette(0, ChartKind::Bar), BASE.to_vec());
        assert_eq!(palette(0, ChartKind::Line), BASE.to_vec());
    }

    #[test]
    fn multiples_of_seven_give_one_base_repetition() {
        assert_eq!(palette(14, ChartKind::Bar), BASE.to_vec());
        assert_eq!(palette(21, ChartKind::Line), BASE.to_vec());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = get_palette(3, "pie").unwrap_err();
        assert_eq!(err, ChartError::UnsupportedChartKind("pie".into()));
        assert!(get_palette(3, "Bar").is_err());
        assert!(get_palette(3, "breakdown").is_err());
    }

    #[test]
    fn kind_tokens_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), kind);
        }
        let kind: ChartKind = serde_json::from_str("\"breakDown\"").unwrap();
        assert_eq!(kind, ChartKind::BreakDown);
        assert_eq!(serde_json::to_string(&ChartKind::Bar).unwrap(), "\"bar\"");
    }

    #[test]
    fn exact_palette() {
        assert!(palette_exact(0, ChartKind::Bar).is_empty());
        assert_eq!(palette_exact(2, ChartKind::Line), vec!["#8bdcbe", "#4378bf"]);
        let five_points = palette_exact(5, ChartKind::Point);
        assert_eq!(
            five_points,
            vec!["#371ea3", "#46bac2", "#ceced9", "#371ea3", "#46bac2"]
        );
        assert_eq!(palette_exact(14, ChartKind::Bar).len(), 14);
    }

    proptest! {
        #[test]
        fn point_and_break_down_ignore_count(n in 0usize..10_000) {
            prop_assert_eq!(palette(n, ChartKind::Point), vec!["#371ea3", "#46bac2", "#ceced9"]);
            prop_assert_eq!(
                palette(n, ChartKind::BreakDown),
                vec!["#8bdcbe", "#f05a71", "#371ea3"]
            );
            prop_assert_eq!(
                get_palette(n, "breakDown").unwrap(),
                vec!["#8bdcbe", "#f05a71", "#371ea3"]
            );
        }

        #[test]
        fn fallback_length_follows_repeat_rule(n in 8usize..10_000) {
            let expected = 7 * (n % 7 + 1);
            prop_assert_eq!(palette(n, ChartKind::Bar).len(), expected);
            prop_assert_eq!(palette(n, ChartKind::Line).len(), expected);
        }

        #[test]
        fn colors_are_hex_tokens(n in 0usize..64) {
            for kind in ChartKind::ALL {
                for c in palette(n, kind) {
                    prop_assert!(c.len() == 7 && c.starts_with('#'));
                    prop_assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
                }
            }
        }

        #[test]
        fn exact_has_requested_length(n in 0usize..200) {
            for kind in ChartKind::ALL {
                prop_assert_eq!(palette_exact(n, kind).len(), n);
            }
        }
    }
}
