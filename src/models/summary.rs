//! Plain results produced by the aggregator.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

impl Totals {
    pub fn add(&mut self, revenue: f64, cost: f64, profit: f64) {
        self.revenue += revenue;
        self.cost += cost;
        self.profit += profit;
    }
}

/// Dashboard card for the current day.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodaySummary {
    pub totals: Totals,
    pub records: usize,
    pub kilometers: f64,
    pub avg_efficiency: Option<f64>,
}

/// One point of a chart series: a calendar day or a week starting on Sunday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub start: NaiveDate,
    pub totals: Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoalTier {
    Reached,
    Almost,
    OnTrack,
    KeepGoing,
    GettingStarted,
}

impl GoalTier {
    pub fn from_progress(progress: f64) -> Self {
        if progress >= 100.0 {
            GoalTier::Reached
        } else if progress >= 80.0 {
            GoalTier::Almost
        } else if progress >= 60.0 {
            GoalTier::OnTrack
        } else if progress >= 40.0 {
            GoalTier::KeepGoing
        } else {
            GoalTier::GettingStarted
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GoalTier::Reached => "🎉 Goal reached! Great job this week!",
            GoalTier::Almost => "💪 Almost there! Keep the pace!",
            GoalTier::OnTrack => "🚀 You are on the right track!",
            GoalTier::KeepGoing => "⚡ Keep going, you can make it!",
            GoalTier::GettingStarted => "🔥 Let's go! Every ride counts!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub weekly_goal: f64,
    pub weekly_total: f64,
    /// Percentage in 0..=100.
    pub progress: f64,
    pub remaining: f64,
    pub working_days_left: u32,
    pub daily_target: Option<f64>,
    pub tier: GoalTier,
}
