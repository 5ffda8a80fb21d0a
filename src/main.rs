mod analysis;
mod chart;
mod clean;
mod join;
mod load;
mod models;
mod normalize;

use std::error::Error;

const DIET_COST_FILE: &str = "FAOSTAT.xls";
const OBESITY_FILE: &str = "obesity.csv";
const POPULATION_FILE: &str = "world_population.csv";
const CHART_FILE: &str = "obesity_vs_diet_cost.png";

fn main() -> Result<(), Box<dyn Error>> {
    // Step 1: Load the three datasets
    let mut diet = load::load_diet_costs(DIET_COST_FILE)?;
    let obesity_raw = load::load_obesity(OBESITY_FILE)?;
    let population = load::load_population(POPULATION_FILE)?;

    // Step 2: Standardize country names so the joins can match
    normalize::canonicalize_diet_countries(&mut diet);
    let obesity = normalize::strip_quote_artifacts(obesity_raw);

    // Step 3: Left-join obesity rates, patch the known gaps, then left-join
    // population
    let mut joined = join::join_obesity(&diet, &obesity);
    clean::apply_obesity_overrides(&mut joined);
    clean::report_missing_obesity(&joined);
    let joined = join::join_population(joined, &population);

    // Step 4: Keep only fully populated records
    let records = clean::drop_incomplete(joined);

    analysis::print_column_summary(&records);

    match analysis::correlate(&records) {
        Some((r, p)) => {
            println!("Pearson correlation coefficient: {}", r);
            println!("P-value: {}", p);
        }
        None => println!("Correlation is undefined (fewer than 2 rows or zero variance)"),
    }

    chart::render_scatter(&records, CHART_FILE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietCostRow, ObesityRow, PopulationRecord};

    // The pipeline from normalization to the completeness filter, on the
    // United States naming mismatch.
    #[test]
    fn mismatched_spellings_still_join() {
        let mut diet = vec![DietCostRow {
            country: "United States of America".to_string(),
            cost: 3.5,
        }];
        let obesity = vec![ObesityRow {
            country: "United States".to_string(),
            rate: 22.1,
        }];
        let population = vec![PopulationRecord {
            country: "United States".to_string(),
            population: 331_000_000,
        }];

        normalize::canonicalize_diet_countries(&mut diet);
        let mut joined = join::join_obesity(&diet, &obesity);
        clean::apply_obesity_overrides(&mut joined);
        let joined = join::join_population(joined, &population);
        let records = clean::drop_incomplete(joined);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "United States");
        assert_eq!(records[0].diet_cost, 3.5);
        assert_eq!(records[0].obesity_rate, 22.1);
        assert_eq!(records[0].population, 331_000_000);
        assert!(chart::needs_label(records[0].population));
    }
}
