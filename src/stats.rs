use ndarray::{Array1, Array2, Axis};
use num_traits::{Float, NumCast};

/// Arithmetic mean of `data`.
///
/// An empty sample divides `0 / 0` and returns NaN rather than panicking.
pub fn mean<'a, T, I>(data: I) -> T
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (sum, count) = data
        .into_iter()
        .fold((T::zero(), 0usize), |(sum, count), &value| {
            (sum + value, count + 1)
        });

    sum / to_float(count)
}

/// Population variance of `data` (divisor N, not N - 1).
///
/// Takes anything that can be iterated twice by reference: slices, arrays, `&Vec<T>` and
/// ndarray views all work.
///
/// ```
/// use mystats::stats::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.0);
/// ```
pub fn variance<'a, T, I>(data: I) -> T
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T> + Clone,
{
    let data_mean = mean(data.clone());

    variance_about(data, data_mean)
}

/// Mean squared deviation of `data` from an already computed `data_mean`.
pub(crate) fn variance_about<'a, T, I>(data: I, data_mean: T) -> T
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (total, count) = data
        .into_iter()
        .fold((T::zero(), 0usize), |(total, count), &value| {
            let diff = value - data_mean;

            (total + diff * diff, count + 1)
        });

    total / to_float(count)
}

// Counts are kept in usize; f32 stops representing every integer past 2^24.
fn to_float<T: Float>(count: usize) -> T {
    <T as NumCast>::from(count).unwrap_or_else(T::nan)
}

/// Population standard deviation, the square root of [`variance`].
pub fn std_dev<'a, T, I>(data: I) -> T
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T> + Clone,
{
    variance(data).sqrt()
}

/// Variance of every lane along `axis`.
///
/// `Axis(0)` walks down the rows and yields one variance per column, `Axis(1)` yields one
/// per row.
pub fn variance_axis<T: Float>(matrix: &Array2<T>, axis: Axis) -> Array1<T> {
    matrix.lanes(axis).into_iter().map(variance).collect()
}

pub fn std_dev_axis<T: Float>(matrix: &Array2<T>, axis: Axis) -> Array1<T> {
    variance_axis(matrix, axis).mapv(T::sqrt)
}
