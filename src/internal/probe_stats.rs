#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::match_on_vec_items)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::Rng;

// Simulation of probe-chain degradation under the grow-by-one policy,
// compared against a table that doubles and rehashes when probing fails.
const INITIAL_CAPACITY: usize = 512;
const NUM_CHECKPOINTS: usize = 12;
const KEYS_PER_CHECKPOINT: usize = 96;

const POLICIES: [&str; 2] = ["Grow-by-one (no rehash)", "Double and rehash"];

// Simple hash function for simulation purposes
fn hash_function(key: usize, size: usize) -> usize {
    key % size
}

// Linear probing insert with grow-by-one on an exhausted cyclic scan
// (the policy the library implements)
fn insert_grow_by_one(table: &mut Vec<Option<usize>>, key: usize) {
    let size = table.len();
    let mut index = hash_function(key, size);

    for _ in 0..size {
        match table[index] {
            None => {
                table[index] = Some(key);
                return;
            }
            Some(existing) if existing == key => return,
            Some(_) => {}
        }
        index = (index + 1) % size;
    }

    // no free slot anywhere along the scan: append one at the tail
    table.push(Some(key));
}

// Linear probing insert that doubles the table and rehashes every entry
// once occupancy crosses 85%
fn insert_rehash(table: &mut Vec<Option<usize>>, occupied: &mut usize, key: usize) {
    if *occupied * 100 >= table.len() * 85 {
        let mut bigger = vec![None; table.len() * 2];
        for slot in table.iter().flatten() {
            let mut index = hash_function(*slot, bigger.len());
            while bigger[index].is_some() {
                index = (index + 1) % bigger.len();
            }
            bigger[index] = Some(*slot);
        }
        *table = bigger;
    }

    let size = table.len();
    let mut index = hash_function(key, size);
    loop {
        match table[index] {
            None => {
                table[index] = Some(key);
                *occupied += 1;
                return;
            }
            Some(existing) if existing == key => return,
            Some(_) => index = (index + 1) % size,
        }
    }
}

// Number of probes a lookup takes; a miss costs the full cyclic scan
fn lookup_probes(table: &[Option<usize>], key: usize) -> usize {
    let size = table.len();
    let mut index = hash_function(key, size);

    for probes in 1..=size {
        match table[index] {
            None => return probes,
            Some(existing) if existing == key => return probes,
            Some(_) => index = (index + 1) % size,
        }
    }

    size
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<usize> = (0..NUM_CHECKPOINTS * KEYS_PER_CHECKPOINT)
        .map(|_| rng.random_range(1..1_000_000))
        .collect();

    let mut grow_table: Vec<Option<usize>> = vec![None; INITIAL_CAPACITY];
    let mut rehash_table: Vec<Option<usize>> = vec![None; INITIAL_CAPACITY];
    let mut rehash_occupied = 0usize;

    // Average lookup probes per policy, one sample per checkpoint
    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); POLICIES.len()];
    let mut keys_inserted: Vec<usize> = Vec::new();

    for checkpoint in 0..NUM_CHECKPOINTS {
        let upto = (checkpoint + 1) * KEYS_PER_CHECKPOINT;
        for &key in &keys[checkpoint * KEYS_PER_CHECKPOINT..upto] {
            insert_grow_by_one(&mut grow_table, key);
            insert_rehash(&mut rehash_table, &mut rehash_occupied, key);
        }

        let inserted = &keys[..upto];
        let grow_avg = inserted.iter().map(|&k| lookup_probes(&grow_table, k)).sum::<usize>()
            as f64
            / inserted.len() as f64;
        let rehash_avg = inserted.iter().map(|&k| lookup_probes(&rehash_table, k)).sum::<usize>()
            as f64
            / inserted.len() as f64;

        average_probes[0].push(grow_avg);
        average_probes[1].push(rehash_avg);
        keys_inserted.push(upto);

        println!(
            "{} keys: grow-by-one avg probes = {:.2} (capacity {}), rehash avg probes = {:.2} (capacity {})",
            upto,
            grow_avg,
            grow_table.len(),
            rehash_avg,
            rehash_table.len()
        );
    }

    // Plot the degradation curves
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220)];
    let font_family = "sans-serif";
    let root = BitMapBackend::new("probe_chain_degradation.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Probe-Chain Degradation by Growth Policy", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(keys_inserted.len() - 1), 0.0..max_avg)?;

    let x_labels: Vec<String> = keys_inserted.iter().map(|&n| n.to_string()).collect();
    chart
        .configure_mesh()
        .x_labels(keys_inserted.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Lookup Probes")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (policy_idx, &policy) in POLICIES.iter().enumerate() {
        let color = &colors[policy_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                (0..keys_inserted.len() - 1).map(|i| (i, average_probes[policy_idx][i])),
                line_style,
            ))?
            .label(policy)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..keys_inserted.len() - 1).map(|i| {
            Circle::new((i, average_probes[policy_idx][i]), 4, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot image: probe_chain_degradation.png");

    Ok(())
}
