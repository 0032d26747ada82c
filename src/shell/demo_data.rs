//! Sample figures shown on the dashboard and reports pages.

use serde::Serialize;

use crate::render::{Table, TableSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateData {
    pub name: &'static str,
    /// percent
    pub recovery_rate: f64,
    /// lakh rupees
    pub recovered_amount: f64,
    pub total_loans: u32,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub recovery_rate: f64,
    pub recovered_amount: f64,
}

pub const STATE_DATA: &[StateData] = &[
    StateData { name: "Maharashtra", recovery_rate: 25.8, recovered_amount: 3.2, total_loans: 1250, trend: Trend::Up },
    StateData { name: "Uttar Pradesh", recovery_rate: 41.0, recovered_amount: 12.5, total_loans: 2100, trend: Trend::Up },
    StateData { name: "Karnataka", recovery_rate: 38.5, recovered_amount: 8.7, total_loans: 980, trend: Trend::Stable },
    StateData { name: "Tamil Nadu", recovery_rate: 32.1, recovered_amount: 6.3, total_loans: 1150, trend: Trend::Down },
    StateData { name: "Gujarat", recovery_rate: 45.2, recovered_amount: 9.8, total_loans: 850, trend: Trend::Up },
    StateData { name: "Rajasthan", recovery_rate: 28.7, recovered_amount: 4.1, total_loans: 720, trend: Trend::Stable },
];

pub const MONTHLY_TRENDS: &[MonthlyTrend] = &[
    MonthlyTrend { month: "Jan", recovery_rate: 22.5, recovered_amount: 8.2 },
    MonthlyTrend { month: "Feb", recovery_rate: 24.1, recovered_amount: 9.1 },
    MonthlyTrend { month: "Mar", recovery_rate: 26.8, recovered_amount: 10.3 },
    MonthlyTrend { month: "Apr", recovery_rate: 28.3, recovered_amount: 11.7 },
    MonthlyTrend { month: "May", recovery_rate: 31.2, recovered_amount: 13.2 },
    MonthlyTrend { month: "Jun", recovery_rate: 33.7, recovered_amount: 14.8 },
];

/// Quick-start questions offered on an empty chat.
pub const STARTER_PROMPTS: &[(&str, &str)] = &[
    ("Recovery Analytics", "Show me recovery analytics and trends"),
    ("Regional Performance", "Analyze regional performance across states"),
    ("Monthly Trends", "Show monthly recovery trends"),
    ("Performance Metrics", "Display key performance metrics and KPIs"),
];

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    }
}

pub fn state_table() -> Table {
    Table {
        source: TableSource::Json,
        columns: ["State", "Recovery %", "Recovered (₹L)", "Loans", "Trend"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        rows: STATE_DATA
            .iter()
            .map(|s| {
                vec![
                    s.name.to_string(),
                    format!("{:.1}", s.recovery_rate),
                    format!("{:.1}", s.recovered_amount),
                    s.total_loans.to_string(),
                    trend_label(s.trend).to_string(),
                ]
            })
            .collect(),
    }
}

pub fn monthly_table() -> Table {
    Table {
        source: TableSource::Json,
        columns: ["Month", "Recovery %", "Recovered (₹L)"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        rows: MONTHLY_TRENDS
            .iter()
            .map(|m| {
                vec![
                    m.month.to_string(),
                    format!("{:.1}", m.recovery_rate),
                    format!("{:.1}", m.recovered_amount),
                ]
            })
            .collect(),
    }
}

/// Loan-weighted average recovery rate across all states.
pub fn overall_recovery_rate() -> f64 {
    let loans: u32 = STATE_DATA.iter().map(|s| s.total_loans).sum();
    if loans == 0 {
        return 0.0;
    }
    let weighted: f64 = STATE_DATA
        .iter()
        .map(|s| s.recovery_rate * f64::from(s.total_loans))
        .sum();
    weighted / f64::from(loans)
}

pub fn total_recovered() -> f64 {
    STATE_DATA.iter().map(|s| s.recovered_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_table_shape() {
        let table = state_table();
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows.len(), STATE_DATA.len());
        assert_eq!(table.rows[4], vec!["Gujarat", "45.2", "9.8", "850", "up"]);
    }

    #[test]
    fn test_monthly_table_in_calendar_order() {
        let months: Vec<String> = monthly_table().rows.into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn test_aggregates() {
        assert!((total_recovered() - 44.6).abs() < 1e-9);
        let rate = overall_recovery_rate();
        assert!(rate > 25.8 && rate < 45.2, "rate = {rate}");
    }
}
