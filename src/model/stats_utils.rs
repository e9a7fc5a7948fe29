use super::constants::PERCENTAGE_SCALE;

/// `part / total * 100`, truncated. 0 when `total` is 0.
pub fn percentage(part: i32, total: i32) -> i32 {
    if total <= 0 {
        return 0;
    }

    (part as i64 * PERCENTAGE_SCALE / total as i64) as i32
}

/// Arithmetic mean, 0 for an empty input.
pub fn average<I>(values: I) -> f32
where
    I: IntoIterator<Item = i32>
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), v| (sum + v as i64, count + 1));

    if count == 0 {
        return 0.0;
    }

    sum as f32 / count as f32
}
