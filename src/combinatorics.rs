/// Replace each entry of `m` by its position (counting from 1) in the sorted sequence, e.g.
/// `[5, 7, 2]` becomes `[2, 3, 1]`. For a sequence of distinct integers this is the permutation of
/// $\{1, \ldots, n\}$ with the same relative order.
///
/// Repeated entries are all sent to the position of their first occurrence.
pub fn convert_perm(m: &[u32]) -> Vec<u32> {
    let mut sorted = m.to_vec();
    sorted.sort_unstable();
    m.iter()
        .map(|&x| sorted.partition_point(|&y| y < x) as u32 + 1)
        .collect()
}
