//! Suffix array construction by induced sorting (SA-IS).
//!
//! `construct` is generic over the symbol type so that it can be called
//! both on the caller's widened byte string and, recursively, on the
//! reduced LMS-name string produced by the previous level.

use crate::buckets::Buckets;
use crate::types::{to_usize, Types};

#[cfg(not(test))]
const NAIVE_SORT_THRESHOLD: usize = 128;
// Small enough that the unit tests below exercise the induced-sort path
// itself rather than only the naive fallback.
#[cfg(test)]
const NAIVE_SORT_THRESHOLD: usize = 4;

pub(crate) const NIL: u32 = std::u32::MAX;

/// Build the suffix array of `s` (alphabet size `sigma`) into `sa`.
///
/// `depth` is only used for diagnostics; it is not needed for
/// correctness and is bounded by `O(log n)` in practice.
pub(crate) fn construct<T>(s: &[T], sigma: usize, sa: &mut [u32], depth: u32)
where
    T: Copy + Into<u32> + Ord,
{
    let n = s.len();
    debug_assert_eq!(sa.len(), n);
    log::trace!("sa-is depth={} n={} sigma={}", depth, n, sigma);

    if n == 0 {
        return;
    }
    if n == 1 {
        sa[0] = 0;
        return;
    }
    if n < NAIVE_SORT_THRESHOLD {
        naive_sort(s, sa);
        return;
    }

    let types = Types::calculate(s);
    let lms = collect_lms(&types, n);
    let buckets = Buckets::calculate(s, sigma);

    induced_sort_pass(s, &types, &buckets, &lms, sa);

    let sorted_lms = resolve_lms_order(s, &types, &lms, sa, depth);

    induced_sort_pass(s, &types, &buckets, &sorted_lms, sa);

    debug_assert!(is_permutation(sa), "sa-is produced a non-permutation");
    debug_assert!(
        is_sorted_suffixes(s, sa),
        "sa-is produced an unsorted suffix array"
    );
}

/// The simplest but time-costing way to calculate a suffix array: sort
/// the `0..n` indices by comparing the suffixes they name directly.
/// Used both as the small-input fallback and, recursively, whenever a
/// reduced sub-problem is itself small.
fn naive_sort<T: Ord>(s: &[T], sa: &mut [u32]) {
    let n = s.len();
    for (i, x) in sa.iter_mut().enumerate() {
        *x = i as u32;
    }
    sa.sort_by(|&i, &j| Ord::cmp(&s[i as usize..], &s[j as usize..]));
}

fn collect_lms(types: &Types, n: usize) -> Vec<u32> {
    (0..n as u32).filter(|&i| types.is_lms(i as usize)).collect()
}

/// Reset `sa`, place `order` into bucket tails, then run both induced
/// passes. Each call derives brand new head/tail cursor tables from
/// `buckets`; none are carried over from a previous pass.
fn induced_sort_pass<T>(s: &[T], types: &Types, buckets: &Buckets, order: &[u32], sa: &mut [u32])
where
    T: Copy + Into<u32>,
{
    for x in sa.iter_mut() {
        *x = NIL;
    }
    place_lms(s, buckets, order, sa);
    induce_l(s, types, buckets, sa);
    induce_s(s, types, buckets, sa);
}

/// Place the positions of `order` into their bucket tails, iterating in
/// reverse so that within a bucket the relative order of `order` is
/// preserved.
fn place_lms<T>(s: &[T], buckets: &Buckets, order: &[u32], sa: &mut [u32])
where
    T: Copy + Into<u32>,
{
    let mut tails = buckets.tails();
    for &p in order.iter().rev() {
        let c = to_usize(s[p as usize]);
        tails[c] -= 1;
        sa[tails[c] as usize] = p;
    }
    debug_assert!(no_duplicates(sa), "place_lms wrote a position twice");
}

/// Induce L-type positions, left to right, from whatever is currently in
/// `sa` (LMS positions on the first pass, sorted LMS positions on the
/// second).
fn induce_l<T>(s: &[T], types: &Types, buckets: &Buckets, sa: &mut [u32])
where
    T: Copy + Into<u32>,
{
    let mut heads = buckets.heads();
    for k in 0..sa.len() {
        let p = sa[k];
        if p == NIL || p == 0 {
            continue;
        }
        let prev = p - 1;
        if !types[prev as usize] {
            let c = to_usize(s[prev as usize]);
            sa[heads[c] as usize] = prev;
            heads[c] += 1;
        }
    }
    debug_assert!(no_duplicates(sa), "induce_l wrote a position twice");
}

/// Induce S-type positions, right to left.
fn induce_s<T>(s: &[T], types: &Types, buckets: &Buckets, sa: &mut [u32])
where
    T: Copy + Into<u32>,
{
    let mut tails = buckets.tails();
    for k in (0..sa.len()).rev() {
        let p = sa[k];
        if p == NIL || p == 0 {
            continue;
        }
        let prev = p - 1;
        if types[prev as usize] {
            let c = to_usize(s[prev as usize]);
            tails[c] -= 1;
            sa[tails[c] as usize] = prev;
        }
    }
    debug_assert!(no_duplicates(sa), "induce_s wrote a position twice");
}

/// Determine the order of LMS positions to seed the final induced sort,
/// naming LMS substrings and recursing on the reduced problem only when
/// the names are not already a permutation.
fn resolve_lms_order<T>(s: &[T], types: &Types, lms: &[u32], sa: &[u32], depth: u32) -> Vec<u32>
where
    T: Copy + Into<u32> + Ord,
{
    let m = lms.len();
    if m <= 1 {
        return lms.to_vec();
    }

    let (names, sigma_reduced) = name_lms_substrings(s, types, lms, sa);
    if sigma_reduced == m {
        // every LMS substring is unique: the order already computed by
        // the first induced pass is the sorted order.
        sa.iter()
            .copied()
            .filter(|&p| types.is_lms(p as usize))
            .collect()
    } else {
        let mut sub_sa = vec![NIL; m];
        construct(&names, sigma_reduced, &mut sub_sa, depth + 1);
        sub_sa.iter().map(|&i| lms[i as usize]).collect()
    }
}

/// Name each LMS substring, walking the (possibly only partially sorted)
/// LMS order in `sa`. Returns the per-LMS-position names in the original
/// left-to-right order of `lms`, plus the resulting reduced alphabet
/// size.
fn name_lms_substrings<T>(s: &[T], types: &Types, lms: &[u32], sa: &[u32]) -> (Vec<u32>, usize)
where
    T: Copy + Into<u32> + Ord,
{
    let n = s.len();
    let mut index_names = vec![NIL; n];
    let mut name: u32 = 0;
    let mut prev: Option<usize> = None;

    for &p in sa.iter() {
        let p = p as usize;
        if !types.is_lms(p) {
            continue;
        }
        if let Some(pp) = prev {
            if !lms_substrings_eq(s, types, pp, p, n) {
                name += 1;
            }
        }
        index_names[p] = name;
        prev = Some(p);
    }

    let sigma_reduced = if prev.is_some() { name as usize + 1 } else { 0 };
    let names = lms.iter().map(|&p| index_names[p as usize]).collect();
    (names, sigma_reduced)
}

/// Two LMS substrings are equal iff they have the same length, the same
/// symbols, and the same L/S labels throughout. The LMS substring ending
/// the string (anchored at the sentinel) only equals itself.
fn lms_substrings_eq<T>(s: &[T], types: &Types, x: usize, y: usize, n: usize) -> bool
where
    T: Copy + Into<u32>,
{
    if x == y {
        return true;
    }
    if x == n - 1 || y == n - 1 {
        return false;
    }

    let mut i = 0;
    loop {
        let xi = x + i;
        let yi = y + i;
        if s[xi].into() != s[yi].into() || types[xi] != types[yi] {
            return false;
        }
        if i > 0 && (types.is_lms(xi) || types.is_lms(yi)) {
            return types.is_lms(xi) && types.is_lms(yi);
        }
        i += 1;
    }
}

fn is_permutation(sa: &[u32]) -> bool {
    let mut seen = vec![false; sa.len()];
    for &p in sa {
        if p == NIL || p as usize >= sa.len() || seen[p as usize] {
            return false;
        }
        seen[p as usize] = true;
    }
    true
}

/// No position appears twice among the non-`NIL` entries of `sa`. Holds
/// at every intermediate step of an induced-sort pass, before the pass
/// has necessarily filled every slot.
fn no_duplicates(sa: &[u32]) -> bool {
    let mut seen = vec![false; sa.len()];
    for &p in sa {
        if p == NIL {
            continue;
        }
        if p as usize >= sa.len() || seen[p as usize] {
            return false;
        }
        seen[p as usize] = true;
    }
    true
}

fn is_sorted_suffixes<T: Ord>(s: &[T], sa: &[u32]) -> bool {
    (1..sa.len()).all(|k| s[sa[k - 1] as usize..] < s[sa[k] as usize..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widen(s: &[u8]) -> Vec<u32> {
        s.iter().map(|&b| b as u32).collect()
    }

    fn suffix_array(s: &[u8]) -> Vec<u32> {
        let widened = widen(s);
        let mut sa = vec![NIL; widened.len()];
        construct(&widened, 256, &mut sa, 0);
        sa
    }

    #[test]
    fn hello_sentinel() {
        assert_eq!(suffix_array(b"hello\0"), vec![5, 1, 0, 2, 3, 4]);
    }

    #[test]
    fn all_equal_then_sentinel() {
        assert_eq!(suffix_array(b"aaaa\0"), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn single_symbol() {
        assert_eq!(suffix_array(b"\0"), vec![0]);
    }

    #[test]
    fn periodic_input() {
        let sa = suffix_array(b"abababab\0");
        assert!(is_permutation(&sa));
        let s = widen(b"abababab\0");
        for k in 1..sa.len() {
            assert!(s[sa[k - 1] as usize..] < s[sa[k] as usize..]);
        }
    }

    #[test]
    fn forces_recursion_with_many_duplicate_lms_substrings() {
        // long run of a repeating two-symbol unit forces the reduced
        // problem to itself contain duplicate names.
        let mut s = vec![1u8, 2];
        s = s.iter().cycle().take(300).copied().collect();
        s.push(0);
        let sa = suffix_array(&s);
        assert!(is_permutation(&sa));
        assert_eq!(sa[0], (s.len() - 1) as u32);
    }
}
