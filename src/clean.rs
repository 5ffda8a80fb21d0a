use crate::models::{CountryRecord, JoinedRow};

// Manual patches and the completeness filter

// Obesity rates the join cannot supply, taken from
// https://data.worldobesity.org/rankings/. Replaces whatever the join
// produced for these countries, so the patch is auditable on its own.
pub fn obesity_overrides() -> [(&'static str, f64); 7] {
    [
        ("Spain", 19.39),
        ("Tanzania", 6.73),
        ("Tunisia", 19.92),
        ("Suriname", 19.67),
        ("South Korea", 8.82),
        ("Peru", 23.62),
        ("Finland", 21.88),
    ]
}

pub fn apply_obesity_overrides(rows: &mut [JoinedRow]) {
    for (country, rate) in obesity_overrides() {
        for row in rows.iter_mut() {
            if row.country == country {
                row.obesity_rate = Some(rate);
            }
        }
    }
}

// Print the countries that still have no obesity rate after the overrides,
// so join misses are visible before the completeness filter drops them.
pub fn report_missing_obesity(rows: &[JoinedRow]) {
    let missing: Vec<&str> = rows
        .iter()
        .filter(|row| row.obesity_rate.is_none())
        .map(|row| row.country.as_str())
        .collect();

    if missing.is_empty() {
        println!("All countries matched an obesity rate.");
    } else {
        println!(
            "{} countries have no obesity rate and will be dropped: {}",
            missing.len(),
            missing.join(", ")
        );
    }
}

// Keep only rows with all four fields present. Blunt by design: a country
// missing population data is excluded even if its other fields were fine.
pub fn drop_incomplete(rows: Vec<JoinedRow>) -> Vec<CountryRecord> {
    rows.into_iter()
        .filter_map(|row| match (row.obesity_rate, row.population) {
            (Some(obesity_rate), Some(population)) => Some(CountryRecord {
                country: row.country,
                diet_cost: row.diet_cost,
                obesity_rate,
                population,
            }),
            _ => None,
        })
        .collect()
}
