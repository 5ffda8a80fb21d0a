use crate::models::{DietCostRow, ObesityRow, PopulationRecord};
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io;

// Load the three datasets

pub fn load_diet_costs(path: &str) -> Result<Vec<DietCostRow>, Box<dyn Error>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or("FAOSTAT workbook has no worksheets")??;
    diet_costs_from_range(&range)
}

pub(crate) fn diet_costs_from_range(range: &Range<Data>) -> Result<Vec<DietCostRow>, Box<dyn Error>> {
    let mut rows = range.rows();
    let header = rows.next().ok_or("FAOSTAT sheet is empty")?;
    let area_col = find_column(header, "Area")?;
    let value_col = find_column(header, "Value")?;

    let mut out = Vec::new();
    for row in rows {
        // Rows without a country name or a numeric cost are dropped
        let country = match row.get(area_col) {
            Some(Data::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => continue,
        };
        let cost = match row.get(value_col) {
            Some(Data::Float(v)) => *v,
            Some(Data::Int(v)) => *v as f64,
            Some(Data::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => continue,
            },
            _ => continue,
        };
        out.push(DietCostRow { country, cost });
    }

    Ok(out)
}

fn find_column(header: &[Data], name: &str) -> Result<usize, Box<dyn Error>> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or_else(|| format!("FAOSTAT sheet is missing the '{}' column", name).into())
}

pub fn load_obesity(path: &str) -> Result<Vec<ObesityRow>, Box<dyn Error>> {
    obesity_from_reader(File::open(path)?)
}

// obesity.csv has no usable header row and carries stray quote characters,
// so quoting is disabled and the fields are cleaned up by hand. The first
// record is a header artifact and is skipped.
pub(crate) fn obesity_from_reader<R: io::Read>(input: R) -> Result<Vec<ObesityRow>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(input);

    let mut out = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        if i == 0 {
            continue;
        }
        let country = record.get(0).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }
        let rate = match record.get(1).unwrap_or("").trim().trim_matches('"').parse::<f64>() {
            Ok(v) => v,
            Err(_) => continue,
        };
        out.push(ObesityRow {
            country: country.to_string(),
            rate,
        });
    }

    Ok(out)
}

pub fn load_population(path: &str) -> Result<Vec<PopulationRecord>, Box<dyn Error>> {
    population_from_reader(File::open(path)?)
}

pub(crate) fn population_from_reader<R: io::Read>(
    input: R,
) -> Result<Vec<PopulationRecord>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: PopulationRecord = result?;
        if record.country.trim().is_empty() {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
