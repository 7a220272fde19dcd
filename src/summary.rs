use serde::{Deserialize, Deserializer, Serialize};

use crate::stats;

/// Descriptive statistics for one sample.
///
/// An empty sample keeps `len == 0` and NaN statistics. JSON has no NaN, so those are written
/// as `null` and read back as NaN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub len: usize,
    #[serde(deserialize_with = "nan_from_null")]
    pub mean: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub variance: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub std_dev: f64,
}

impl Summary {
    pub fn of(data: &[f64]) -> Self {
        let mean = stats::mean(data);
        let variance = stats::variance_about(data, mean);

        Self {
            len: data.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

fn nan_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[test]
fn test_summary() {
    let summary = Summary::of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(summary.len, 5);
    assert_eq!(summary.mean, 3.0);
    assert_eq!(summary.variance, 2.0);
    assert_eq!(summary.std_dev, stats::std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]));

    assert_eq!(Summary::of(&[10.0, 10.0, 10.0]).std_dev, 0.0);
    assert!((Summary::of(&[1.0, 1.0, 1.0, 1.0, 100.0]).std_dev - 39.6).abs() < 1e-9);
}

#[test]
fn test_summary_json() {
    let json = serde_json::to_value(Summary::of(&[42.0])).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "len": 1, "mean": 42.0, "variance": 0.0, "std_dev": 0.0 })
    );

    let empty = Summary::of(&[]);
    assert_eq!(empty.len, 0);
    assert!(empty.mean.is_nan() && empty.variance.is_nan() && empty.std_dev.is_nan());

    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, r#"{"len":0,"mean":null,"variance":null,"std_dev":null}"#);
}

#[test]
fn test_summary_json_read_back() {
    let summary = Summary::of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let json = serde_json::to_string(&summary).unwrap();
    assert_eq!(serde_json::from_str::<Summary>(&json).unwrap(), summary);

    let json = serde_json::to_string(&Summary::of(&[])).unwrap();
    let empty: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(empty.len, 0);
    assert!(empty.mean.is_nan() && empty.variance.is_nan() && empty.std_dev.is_nan());
}
