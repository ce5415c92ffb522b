/// Default divisor applied to the terminal width to size a gauge.
pub const DEFAULT_DIVISOR: u16 = 4;

/// Gauge width in columns for a terminal `columns` wide.
pub fn gauge_width(columns: u16, divisor: u16) -> usize {
    usize::from(columns / divisor.max(1))
}

/// Formats `used / total` as `[ ||||     ] 40.00%`.
///
/// The bar always has exactly `width` cells between the brackets; readings
/// above 100% fill it completely while the label keeps the real percentage.
pub fn render_bar(used: f64, total: f64, width: usize) -> String {
    let pct = if total > 0.0 { used / total * 100.0 } else { 0.0 };
    let filled = if pct.is_finite() && pct > 0.0 {
        ((pct * width as f64 / 100.0).floor() as usize).min(width)
    } else {
        0
    };
    format!(
        "[ {}{} ] {:.2}%",
        "|".repeat(filled),
        " ".repeat(width - filled),
        pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use proptest::prelude::*;

    #[test]
    fn half_full_bar() {
        let bar = render_bar(50.0, 100.0, 20);
        assert_eq!(bar, format!("[ {}{} ] 50.00%", "|".repeat(10), " ".repeat(10)));
    }

    #[test]
    fn overfull_bar_is_clamped() {
        assert_snapshot!(render_bar(150.0, 100.0, 10), @"[ |||||||||| ] 150.00%");
    }

    #[test]
    fn floor_is_applied_to_partial_cells() {
        assert_snapshot!(render_bar(33.3, 100.0, 10), @"[ |||        ] 33.30%");
    }

    #[test]
    fn zero_total_and_negative_usage_render_empty() {
        assert_eq!(render_bar(5.0, 0.0, 4), "[      ] 0.00%");
        assert_eq!(render_bar(-5.0, 100.0, 4), "[      ] -5.00%");
    }

    #[test]
    fn zero_width_bar() {
        assert_eq!(render_bar(80.0, 100.0, 0), "[  ] 80.00%");
    }

    #[test]
    fn width_follows_divisor() {
        assert_eq!(gauge_width(120, DEFAULT_DIVISOR), 30);
        assert_eq!(gauge_width(10, 3), 3);
        assert_eq!(gauge_width(10, 0), 10);
    }

    proptest! {
        #[test]
        fn bar_cell_count_is_always_width(used in -50.0f64..500.0, width in 0usize..200) {
            let bar = render_bar(used, 100.0, width);
            let inner: String = bar
                .chars()
                .skip(2)
                .take(width)
                .collect();
            prop_assert!(inner.chars().all(|c| c == '|' || c == ' '));
            prop_assert!(bar[2 + width..].starts_with(" ] "));
        }
    }
}
