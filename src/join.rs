use crate::models::{DietCostRow, JoinedRow, ObesityRow, PopulationRecord};
use std::collections::HashMap;

// Sequential left-joins on the country key

// Left join: every diet row survives; countries absent from the obesity
// table get None. Matching is exact string equality, so the normalizer must
// already have run. A duplicated right-side country keeps its last row.
pub fn join_obesity(diet: &[DietCostRow], obesity: &[ObesityRow]) -> Vec<JoinedRow> {
    let rate_by_country: HashMap<&str, f64> = obesity
        .iter()
        .map(|row| (row.country.as_str(), row.rate))
        .collect();

    diet.iter()
        .map(|row| JoinedRow {
            country: row.country.clone(),
            diet_cost: row.cost,
            obesity_rate: rate_by_country.get(row.country.as_str()).copied(),
            population: None,
        })
        .collect()
}

// Second left join, adding the 2022 population where the country matches.
pub fn join_population(rows: Vec<JoinedRow>, population: &[PopulationRecord]) -> Vec<JoinedRow> {
    let pop_by_country: HashMap<&str, u64> = population
        .iter()
        .map(|record| (record.country.as_str(), record.population))
        .collect();

    rows.into_iter()
        .map(|mut row| {
            row.population = pop_by_country.get(row.country.as_str()).copied();
            row
        })
        .collect()
}
