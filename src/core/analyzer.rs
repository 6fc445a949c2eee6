use crate::domain::model::{
    meets_threshold, DailySales, Metrics, Outcome, Target, WeeklyReport, DAYS_IN_WEEK,
};

pub fn compute_metrics(sales: &DailySales) -> Metrics {
    let total: f64 = sales.values().iter().sum();
    let threshold_count = sales
        .values()
        .iter()
        .filter(|value| meets_threshold(**value))
        .count();

    Metrics {
        total,
        mean: total / DAYS_IN_WEEK as f64,
        threshold_count,
    }
}

pub fn evaluate_outcome(total: f64, target: Target) -> Outcome {
    let met = total >= target.value();
    let gap = if met {
        total - target.value()
    } else {
        target.value() - total
    };
    Outcome { met, gap }
}

pub fn analyze(target: Target, sales: DailySales) -> WeeklyReport {
    let metrics = compute_metrics(&sales);
    tracing::debug!(
        "Metrics: total={:.2}, mean={:.4}, days at threshold={}",
        metrics.total,
        metrics.mean,
        metrics.threshold_count
    );

    let outcome = evaluate_outcome(metrics.total, target);
    tracing::debug!("Outcome: met={}, gap={:.2}", outcome.met, outcome.gap);

    WeeklyReport {
        target,
        sales,
        metrics,
        outcome,
    }
}
