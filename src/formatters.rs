use crate::alerts::Alert;
use crate::chart::BarChart;
use crate::models::TemperatureStats;

const BAR_WIDTH: usize = 40;

/// Formats weather alerts into a human-readable string, one per line
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No active weather alerts.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        output.push_str(&format!("{}\n", alert));
    }
    output
}

/// Formats the temperature summary printed after analysis
pub fn format_summary(stats: &TemperatureStats) -> String {
    format!(
        "Average temperature: {:.1}\u{00b0}C\nTemperature range: {:.1}\u{00b0}C\n",
        stats.average,
        stats.range as f64
    )
}

/// Formats a bar chart as horizontal text bars scaled to the largest magnitude
pub fn format_bar_chart(chart: &BarChart) -> String {
    let mut output = format!("{}\n{} vs {}\n\n", chart.title, chart.y_label, chart.x_label);

    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let peak = chart.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

    for (label, value) in chart.labels.iter().zip(&chart.values) {
        let len = if peak > 0.0 {
            (value.abs() / peak * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = if *value < 0.0 { "-" } else { "\u{2588}" }.repeat(len);
        output.push_str(&format!(
            "{:<width$} | {:<bar_width$} {:.1}\n",
            label,
            bar,
            value,
            width = label_width,
            bar_width = BAR_WIDTH
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_alerts_message() {
        assert_eq!(format_alerts(&[]), "No active weather alerts.\n");
    }

    #[test]
    fn alerts_are_listed_in_order() {
        let alerts = [
            Alert::Heat {
                city: "Delhi".to_string(),
                temperature: 38,
            },
            Alert::Storm {
                city: "Mumbai".to_string(),
            },
        ];
        let text = format_alerts(&alerts);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Heat Warning in Delhi"));
        assert!(lines[1].contains("Storm Warning in Mumbai"));
    }

    #[test]
    fn summary_uses_one_decimal() {
        let stats = TemperatureStats {
            average: 23.456,
            max: 30,
            min: 12,
            range: 18,
        };
        assert_eq!(
            format_summary(&stats),
            "Average temperature: 23.5\u{00b0}C\nTemperature range: 18.0\u{00b0}C\n"
        );
    }

    #[test]
    fn bar_chart_scales_to_peak() {
        let chart = BarChart {
            title: "Temps".to_string(),
            x_label: "Cities".to_string(),
            y_label: "C".to_string(),
            labels: vec!["Oslo".to_string(), "Cairo".to_string()],
            values: vec![-10.0, 40.0],
        };
        let text = format_bar_chart(&chart);
        assert!(text.starts_with("Temps\n"));
        let oslo = text.lines().find(|l| l.starts_with("Oslo")).unwrap();
        let cairo = text.lines().find(|l| l.starts_with("Cairo")).unwrap();
        assert_eq!(oslo.matches('-').count(), 11); // 10 bar cells plus the sign
        assert_eq!(cairo.matches('\u{2588}').count(), BAR_WIDTH);
        assert!(cairo.ends_with("40.0"));
    }
}
