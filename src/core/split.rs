//! Fixed-width segmentation of cleaned values.

/// Split `value` at the given character offsets.
///
/// Always yields `points.len() + 1` segments: starts are `[0, points..]`,
/// ends are `[points.., len]`. A negative offset counts from the end of
/// the string, Python style. Offsets beyond either end are clamped, so an
/// out-of-range cutpoint yields an empty segment rather than an error —
/// several rules rely on that to pick up an optional trailing group.
///
/// ```
/// use kennung::core::split_at;
///
/// assert_eq!(
///     split_at("abcdefghijklmnop", &[3, 6, 9]),
///     vec!["abc", "def", "ghi", "jklmnop"]
/// );
/// assert_eq!(split_at("211003420017", &[2, -4, -1]), vec!["21", "100342", "001", "7"]);
/// ```
pub fn split_at<'a>(value: &'a str, points: &[isize]) -> Vec<&'a str> {
    // Char-offset table so the function stays total on non-ASCII input.
    let bounds: Vec<usize> = value
        .char_indices()
        .map(|(i, _)| i)
        .chain([value.len()])
        .collect();
    let chars = bounds.len() - 1;

    let resolve = |p: isize| -> usize {
        let p = if p < 0 { chars as isize + p } else { p };
        p.clamp(0, chars as isize) as usize
    };

    let mut cuts = Vec::with_capacity(points.len() + 2);
    cuts.push(0);
    cuts.extend(points.iter().map(|&p| resolve(p)));
    cuts.push(chars);

    cuts.windows(2)
        .map(|w| {
            if w[1] <= w[0] {
                ""
            } else {
                &value[bounds[w[0]]..bounds[w[1]]]
            }
        })
        .collect()
}
