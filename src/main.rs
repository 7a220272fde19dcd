use std::env;
use std::error::Error;

use csv::{ReaderBuilder, Trim};
use ndarray::{Array2, Axis};
use serde::Serialize;

use mystats::{stats, summary::Summary};

#[derive(Debug, Serialize)]
struct ColumnStats {
    column: usize,
    variance: f64,
    std_dev: f64,
}

fn read_sample(path: &str) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let mut buf = Vec::new();

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    for result in rdr.deserialize() {
        let record: Vec<f64> = result?;
        buf.push(record);
    }
    Ok(buf)
}

/// Per-column stats only make sense for rectangular files with more than one column.
fn to_matrix(records: &[Vec<f64>]) -> Option<Array2<f64>> {
    let width = records.first()?.len();
    if width < 2 || records.iter().any(|record| record.len() != width) {
        return None;
    }

    let flat: Vec<f64> = records.iter().flatten().copied().collect();
    Array2::from_shape_vec((records.len(), width), flat).ok()
}

fn column_stats(matrix: &Array2<f64>) -> Vec<ColumnStats> {
    let variances = stats::variance_axis(matrix, Axis(0));
    let std_devs = stats::std_dev_axis(matrix, Axis(0));

    variances
        .iter()
        .zip(std_devs.iter())
        .enumerate()
        .map(|(column, (&variance, &std_dev))| ColumnStats {
            column,
            variance,
            std_dev,
        })
        .collect()
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let records = read_sample(path)?;
    let values: Vec<f64> = records.iter().flatten().copied().collect();
    println!("{}", serde_json::to_string_pretty(&Summary::of(&values))?);

    if let Some(matrix) = to_matrix(&records) {
        for column in column_stats(&matrix) {
            println!("{}", serde_json::to_string(&column)?);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: mystats [PATH], reading sample.csv");
            "sample.csv".to_string()
        },
    };

    run(&path)
}

#[test]
fn test_to_matrix() {
    let records = vec![vec![1.0, 10.0], vec![2.0, 10.0], vec![3.0, 10.0]];
    let matrix = to_matrix(&records).unwrap();
    assert_eq!(matrix.shape(), &[3, 2]);

    let columns = column_stats(&matrix);
    assert_eq!(columns.len(), 2);
    assert!((columns[0].variance - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(columns[1].std_dev, 0.0);

    assert!(to_matrix(&[vec![1.0], vec![2.0]]).is_none());
    assert!(to_matrix(&[vec![1.0, 2.0], vec![3.0]]).is_none());
    assert!(to_matrix(&[]).is_none());
}
