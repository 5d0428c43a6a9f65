use colored::Colorize;

use crate::analysis::YieldPrediction;

/// Format a text bar chart comparing the predicted yield with its what-if scenarios.
pub fn format_scenario_chart(pred: &YieldPrediction) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Yield Scenarios".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let rows = [
        ("Current", pred.predicted_yield_quintal_per_acre),
        ("N +10%", pred.scenarios.n_plus_10),
        ("P +10%", pred.scenarios.p_plus_10),
        ("Balanced NPK", pred.scenarios.balanced_npk),
    ];

    let max = rows.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    if max <= 0.0 {
        output.push_str("  No data available.\n");
        return output;
    }

    let bar_width = 40;

    output.push_str(&format!("  {:<14}  {:>8}  Yield\n", "Scenario", "q/acre"));
    output.push_str(&format!("  {}\n", "-".repeat(70)));

    for (label, value) in rows {
        let bar_len = ((value / max) * bar_width as f64).round() as usize;
        let bar = "\u{2588}".repeat(bar_len);
        let bar = if label == "Current" {
            bar.cyan()
        } else {
            bar.green()
        };
        output.push_str(&format!("  {label:<14}  {value:>8.1}  {bar}\n"));
    }

    output.push('\n');
    output
}

/// Print the yield scenario chart.
pub fn print_scenario_chart(pred: &YieldPrediction) {
    print!("{}", format_scenario_chart(pred));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EconomicAnalysis, YieldFactors, YieldScenarios};
    use crate::models::YieldRange;

    fn make_prediction(yield_q: f64) -> YieldPrediction {
        YieldPrediction {
            predicted_yield_quintal_per_acre: yield_q,
            confidence_percent: 80,
            yield_range: YieldRange::new(yield_q * 0.85, yield_q * 1.15),
            scenarios: YieldScenarios {
                n_plus_10: yield_q * 1.08,
                p_plus_10: yield_q * 1.05,
                balanced_npk: yield_q * 1.12,
            },
            economic_analysis: EconomicAnalysis {
                estimated_gain: 0,
                additional_cost: 800,
                profit_difference: -800,
            },
            factors: YieldFactors {
                irrigation: 1.0,
                nutrient: 1.0,
                sowing: 1.0,
                rotation: 1.0,
                multiplier: 1.0,
            },
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_chart_empty() {
        let output = format_scenario_chart(&make_prediction(0.0));
        assert!(output.contains("Yield Scenarios"));
        assert!(output.contains("No data available."));
    }

    #[test]
    fn test_chart_with_data() {
        let output = format_scenario_chart(&make_prediction(25.0));
        assert!(output.contains("Current"));
        assert!(output.contains("Balanced NPK"));
        assert!(output.contains("25.0"));
        assert!(output.contains("28.0"));
        // the balanced row is the longest bar
        assert!(output.contains(&"\u{2588}".repeat(40)));
    }
}
