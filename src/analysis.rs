use crate::models::CountryRecord;
use ndarray::{Array1, ArrayView1};
use statrs::distribution::{ContinuousCDF, StudentsT};

// Pearson correlation between diet cost and obesity rate

// r = cov(X,Y) / (sigma_x * sigma_y). None when the lengths differ, fewer
// than two observations exist, or either column has zero variance.
pub fn pearson_correlation(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let x_mean = x.mean()?;
    let y_mean = y.mean()?;

    let numerator: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();
    let x_variance: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
    let y_variance: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    let denominator = (x_variance * y_variance).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

// Two-tailed p-value for r under the null of no linear association:
// t = r * sqrt((n-2) / (1-r^2)), t-distribution with n-2 degrees of freedom.
pub fn p_value(r: f64, n: usize) -> Option<f64> {
    if n < 2 {
        return None;
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        // Perfectly linear data; the statistic diverges
        return Some(0.0);
    }
    let df = (n - 2) as f64;
    let t = r * (df / denom).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}

pub fn correlate(records: &[CountryRecord]) -> Option<(f64, f64)> {
    let costs = Array1::from_iter(records.iter().map(|r| r.diet_cost));
    let rates = Array1::from_iter(records.iter().map(|r| r.obesity_rate));
    let r = pearson_correlation(&costs.view(), &rates.view())?;
    let p = p_value(r, records.len())?;
    Some((r, p))
}

// Mirrors the dtype / missing-count report of the source script. Missing
// counts are zero by construction once drop_incomplete has run.
pub fn print_column_summary(records: &[CountryRecord]) {
    println!("Column types and missing values over {} rows:", records.len());
    println!("  Country          String  0 missing");
    println!("  HealthyDietCost  f64     0 missing");
    println!("  ObesityRate      f64     0 missing");
    println!("  Population       u64     0 missing");
}
