use serde::Deserialize;

// One row of the FAOSTAT diet-cost sheet ('Area' / 'Value' columns).
#[derive(Debug, Clone, PartialEq)]
pub struct DietCostRow {
    pub country: String,
    pub cost: f64,
}

// One row of the obesity table (first two columns of obesity.csv).
#[derive(Debug, Clone, PartialEq)]
pub struct ObesityRow {
    pub country: String,
    pub rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Country/Territory")]
    pub country: String,
    #[serde(rename = "2022 Population")]
    pub population: u64,
}

// Intermediate state between the joins and the completeness filter;
// unmatched right-side fields stay None.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub country: String,
    pub diet_cost: f64,
    pub obesity_rate: Option<f64>,
    pub population: Option<u64>,
}

// Final per-country record; every field is present once the clean
// stage has run.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub diet_cost: f64,
    pub obesity_rate: f64,
    pub population: u64,
}
