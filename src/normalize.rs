use crate::models::{DietCostRow, ObesityRow};
use std::collections::HashMap;

// Country-name reconciliation

// FAOSTAT spelling -> the spelling used by the obesity and population
// tables. Exact-match substitution only; maintained by hand as new
// mismatches surface.
pub fn country_mapping() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("United States of America", "United States"),
        ("Bolivia (Plurinational State of)", "Bolivia"),
        ("Brunei Darussalam", "Brunei"),
        ("Cabo Verde", "Cape Verde"),
        ("China, Hong Kong SAR", "China"),
        ("Congo", "Republic of the Congo"),
        ("Lao People's Democratic Republic", "Laos"),
        ("Netherlands (Kingdom of the)", "Netherlands"),
        ("Republic of Korea", "South Korea"),
        ("Republic of Moldova", "Moldova"),
        ("Russian Federation", "Russia"),
        ("Türkiye", "Turkey"),
        ("United Republic of Tanzania", "Tanzania"),
        ("Viet Nam", "Vietnam"),
        (
            "United Kingdom of Great Britain and Northern Ireland",
            "United Kingdom",
        ),
        ("Iran (Islamic Republic of)", "Iran"),
    ])
}

// Rewrite diet-table country names to the canonical spelling. Names not in
// the table pass through unchanged, so an unmapped country will simply miss
// the join downstream.
pub fn canonicalize_diet_countries(rows: &mut [DietCostRow]) {
    let mapping = country_mapping();
    for row in rows.iter_mut() {
        if let Some(&canonical) = mapping.get(row.country.as_str()) {
            row.country = canonical.to_string();
        }
    }
}

// The obesity table's country fields carry a leading '"' left over from its
// irregular quoting; strip it along with surrounding whitespace.
pub fn strip_quote_artifacts(rows: Vec<ObesityRow>) -> Vec<ObesityRow> {
    rows.into_iter()
        .map(|row| ObesityRow {
            country: row
                .country
                .trim()
                .trim_start_matches('"')
                .trim()
                .to_string(),
            rate: row.rate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mapping_entry_is_applied_exactly() {
        for (&source, &canonical) in country_mapping().iter() {
            let mut rows = vec![DietCostRow {
                country: source.to_string(),
                cost: 1.0,
            }];
            canonicalize_diet_countries(&mut rows);
            assert_eq!(rows[0].country, canonical);
        }
    }

    #[test]
    fn unmapped_names_pass_through() {
        let mut rows = vec![DietCostRow {
            country: "Sweden".to_string(),
            cost: 2.5,
        }];
        canonicalize_diet_countries(&mut rows);
        assert_eq!(rows[0].country, "Sweden");
    }

    #[test]
    fn quote_artifact_is_stripped() {
        let rows = strip_quote_artifacts(vec![
            ObesityRow {
                country: "\"United States".to_string(),
                rate: 22.1,
            },
            ObesityRow {
                country: " Finland ".to_string(),
                rate: 21.88,
            },
        ]);
        assert_eq!(rows[0].country, "United States");
        assert_eq!(rows[1].country, "Finland");
    }
}
