use crate::models::CountryRecord;
use itertools::Itertools;
use ordered_float::NotNan;
use plotters::prelude::*;
use std::error::Error;

// Bubble scatter chart: x = diet cost, y = obesity rate, size = population

const LABEL_POPULATION_ABOVE: u64 = 30_000_000;
const LABEL_POPULATION_BELOW: u64 = 2_000_000;
const MIN_BUBBLE_RADIUS: f64 = 4.0;
const MAX_BUBBLE_RADIUS: f64 = 40.0;

// Only population outliers get a text label; labelling every bubble would
// make the chart unreadable.
pub fn needs_label(population: u64) -> bool {
    population > LABEL_POPULATION_ABOVE || population < LABEL_POPULATION_BELOW
}

// Linear map of population onto a fixed radius range, anchored at the
// dataset's own min/max so the smallest and largest bubbles always span the
// full visual range.
pub fn bubble_radius(population: u64, min_pop: u64, max_pop: u64) -> f64 {
    if max_pop <= min_pop {
        return MIN_BUBBLE_RADIUS;
    }
    let t = ((population as f64 - min_pop as f64) / (max_pop as f64 - min_pop as f64))
        .clamp(0.0, 1.0);
    MIN_BUBBLE_RADIUS + t * (MAX_BUBBLE_RADIUS - MIN_BUBBLE_RADIUS)
}

pub fn render_scatter(records: &[CountryRecord], output_file: &str) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = records
        .iter()
        .filter_map(|r| NotNan::new(r.diet_cost).ok())
        .minmax()
        .into_option()
        .ok_or("no complete records to plot")?;
    let (y_min, y_max) = records
        .iter()
        .filter_map(|r| NotNan::new(r.obesity_rate).ok())
        .minmax()
        .into_option()
        .ok_or("no complete records to plot")?;
    let (pop_min, pop_max) = records
        .iter()
        .map(|r| r.population)
        .minmax()
        .into_option()
        .ok_or("no complete records to plot")?;

    let x_pad = (((x_max - x_min).into_inner()) * 0.05).max(0.25);
    let y_pad = (((y_max - y_min).into_inner()) * 0.05).max(1.0);

    let root = BitMapBackend::new(output_file, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Share of Adult Obese vs. Daily Healthy Diet Cost, 2024",
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min.into_inner() - x_pad)..(x_max.into_inner() + x_pad),
            (y_min.into_inner() - y_pad)..(y_max.into_inner() + y_pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Healthy Diet Cost (PPP dollar per person per day)")
        .y_desc("Obesity Rate (%)")
        .draw()?;

    // One hue per country; the per-country legend is suppressed on purpose
    let n = records.len().max(1);
    chart.draw_series(records.iter().enumerate().map(|(i, r)| {
        let color = HSLColor(0.75 * i as f64 / n as f64, 0.7, 0.45).mix(0.6);
        Circle::new(
            (r.diet_cost, r.obesity_rate),
            bubble_radius(r.population, pop_min, pop_max).round() as i32,
            color.filled(),
        )
    }))?;

    // Country names over a translucent box so they do not hide other points
    chart.draw_series(
        records
            .iter()
            .filter(|r| needs_label(r.population))
            .map(|r| {
                let width = 6 * r.country.len() as i32 + 4;
                EmptyElement::at((r.diet_cost, r.obesity_rate))
                    + Rectangle::new([(0, 0), (width, 14)], WHITE.mix(0.5).filled())
                    + Text::new(r.country.clone(), (2, 1), ("sans-serif", 10).into_font())
            }),
    )?;

    draw_size_legend(&root)?;

    root.present()?;
    println!("Scatter plot saved to {}", output_file);

    Ok(())
}

// Synthetic legend relating three representative population values to
// bubble sizes, drawn in the top-right corner of the canvas.
fn draw_size_legend(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
) -> Result<(), Box<dyn Error>> {
    root.draw(&Text::new(
        "Population Size",
        (1010, 50),
        ("sans-serif", 14).into_font(),
    ))?;

    let entries: [(&str, i32); 3] = [("10 M", 6), ("100 M", 14), ("1000 M", 30)];
    let gray = RGBColor(128, 128, 128);

    let mut y = 95;
    for (label, radius) in entries {
        root.draw(&Circle::new((1045, y), radius, gray.mix(0.5).filled()))?;
        root.draw(&Text::new(label, (1090, y - 7), ("sans-serif", 12).into_font()))?;
        y += 2 * radius + 25;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_population_gets_larger_bubble() {
        let (min_pop, max_pop) = (500_000, 1_400_000_000);
        let small = bubble_radius(5_000_000, min_pop, max_pop);
        let large = bubble_radius(331_000_000, min_pop, max_pop);
        assert!(large > small);
    }

    #[test]
    fn bubble_radius_stays_in_range() {
        let (min_pop, max_pop) = (500_000, 1_400_000_000);
        assert_eq!(bubble_radius(min_pop, min_pop, max_pop), MIN_BUBBLE_RADIUS);
        assert_eq!(bubble_radius(max_pop, min_pop, max_pop), MAX_BUBBLE_RADIUS);
        for pop in [1_000_000, 50_000_000, 900_000_000] {
            let r = bubble_radius(pop, min_pop, max_pop);
            assert!((MIN_BUBBLE_RADIUS..=MAX_BUBBLE_RADIUS).contains(&r));
        }
        // Degenerate span collapses to the smallest bubble
        assert_eq!(bubble_radius(7, 7, 7), MIN_BUBBLE_RADIUS);
    }

    #[test]
    fn only_population_outliers_are_labelled() {
        assert!(needs_label(331_000_000));
        assert!(needs_label(1_500_000));
        assert!(!needs_label(2_000_000));
        assert!(!needs_label(10_000_000));
        assert!(!needs_label(30_000_000));
    }
}
