//! Suffix array and longest-common-prefix array construction over
//! integer-alphabet inputs that end in a unique minimal sentinel.
//!
//! The suffix array is built in linear time with SA-IS as described in
//! [Two Efficient Algorithms for Linear Time Suffix Array
//! Construction](https://ieeexplore.ieee.org/document/5582081). The LCP
//! array is then built in amortized linear time from the suffix array
//! via the permuted-LCP (phi) algorithm.

mod buckets;
mod error;
mod lcp;
mod sais;
mod types;


pub use error::Error;
use error::Result;

const MAX_LEN: usize = std::u32::MAX as usize - 2;

/// Build the suffix array of `input` into `out_sa`.
///
/// `input` must end in a unique symbol strictly smaller than every other
/// symbol in it, and `out_sa.len()` must equal `input.len()`.
pub fn build_suffix_array(input: &[u8], out_sa: &mut [u32]) -> Result<()> {
    let n = input.len();
    if out_sa.len() != n {
        return Err(Error::PreconditionViolated(format!(
            "out_sa has length {} but input has length {}",
            out_sa.len(),
            n
        )));
    }
    if n >= MAX_LEN {
        return Err(Error::PreconditionViolated(format!(
            "input length {} exceeds the maximum indexable length {}",
            n, MAX_LEN
        )));
    }
    check_sentinel(input)?;

    log::debug!("build_suffix_array: n={}", n);
    let widened: Vec<u32> = input.iter().map(|&b| b as u32).collect();
    sais::construct(&widened, 256, out_sa, 0);
    Ok(())
}

/// Build the LCP array of `input` given its suffix array `sa`, into
/// `out_lcp`. `out_lcp[0]` is left at `0`; there is no suffix preceding
/// `sa[0]`.
///
/// `sa` must be a suffix array of `input` as produced by
/// [`build_suffix_array`]; `sa.len()` and `out_lcp.len()` must both equal
/// `input.len()`.
pub fn build_lcp(sa: &[u32], input: &[u8], out_lcp: &mut [u32]) -> Result<()> {
    let n = input.len();
    if sa.len() != n || out_lcp.len() != n {
        return Err(Error::PreconditionViolated(format!(
            "sa (len {}) and out_lcp (len {}) must both have length {}",
            sa.len(),
            out_lcp.len(),
            n
        )));
    }

    log::debug!("build_lcp: n={}", n);
    let widened: Vec<u32> = input.iter().map(|&b| b as u32).collect();
    lcp::build(sa, &widened, out_lcp);
    Ok(())
}

fn check_sentinel(input: &[u8]) -> Result<()> {
    let n = input.len();
    if n == 0 {
        return Ok(());
    }
    let last = input[n - 1];
    if input[..n - 1].iter().any(|&b| b <= last) {
        return Err(Error::PreconditionViolated(
            "the last symbol must be strictly smaller than every other symbol".into(),
        ));
    }
    Ok(())
}

/// Owns a borrowed byte string together with its constructed suffix
/// array, and can lazily build the corresponding LCP array.
#[derive(Clone)]
pub struct SuffixArray<'s> {
    s: &'s [u8],
    sa: Vec<u32>,
}

impl<'s> SuffixArray<'s> {
    /// Construct the suffix array of `s`.
    pub fn new(s: &'s [u8]) -> Result<Self> {
        let mut sa = vec![0u32; s.len()];
        build_suffix_array(s, &mut sa)?;
        Ok(SuffixArray { s, sa })
    }

    /// The constructed suffix array.
    pub fn as_slice(&self) -> &[u32] {
        &self.sa
    }

    /// Length of the underlying byte string.
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// Test if the underlying byte string is empty.
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Build the LCP array of the underlying byte string.
    pub fn lcp(&self) -> Result<Vec<u32>> {
        let mut lcp = vec![0u32; self.s.len()];
        build_lcp(&self.sa, self.s, &mut lcp)?;
        Ok(lcp)
    }
}

impl<'s> AsRef<[u8]> for SuffixArray<'s> {
    fn as_ref(&self) -> &[u8] {
        self.s
    }
}

impl<'s> From<SuffixArray<'s>> for Vec<u32> {
    fn from(sa: SuffixArray<'s>) -> Vec<u32> {
        sa.sa
    }
}
