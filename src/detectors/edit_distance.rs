/// Levenshtein distance: the minimum number of single-character
/// insertions, deletions and substitutions turning `a` into `b`.
///
/// Classic dynamic program over a (|b|+1) x (|a|+1) table, kept as two
/// rolling rows. Operates on chars, not bytes. Total and symmetric.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr: Vec<usize> = vec![0; a.len() + 1];

    for i in 1..=b.len() {
        curr[0] = i;
        for j in 1..=a.len() {
            if b[i - 1] == a[j - 1] {
                curr[j] = prev[j - 1];
            } else {
                let substitution = prev[j - 1];
                let insertion = curr[j - 1];
                let deletion = prev[j];
                curr[j] = substitution.min(insertion).min(deletion) + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
