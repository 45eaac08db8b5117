use fp::prime::ValidPrime;
use itertools::repeat_n;

use super::{Profile, ProfileValue, TruncationType};

/// Check the inequality $e(r) \geq \min(e(r - i) - i, e(i))$ for all $0 < i < r$, over the
/// indices covered by `pro`.
fn satisfies_recursion(pro: &[ProfileValue]) -> bool {
    for (r, &pro_r) in (1..).zip(pro) {
        for i in 1..r {
            let bound = std::cmp::min(pro[r - i - 1].saturating_sub(i as u32), pro[i - 1]);
            if pro_r < bound {
                return false;
            }
        }
    }
    true
}

/// `values` followed by `len` copies of `fill`
fn padded<T: Copy>(values: &[T], fill: T, len: usize) -> Vec<T> {
    values.iter().copied().chain(repeat_n(fill, len)).collect()
}

/// Whether `profile` (with the given truncation type) is the profile function of a sub-Hopf
/// algebra of the mod 2 Steenrod algebra.
///
/// The profile is padded with as many copies of the truncation value as it has entries, which is
/// enough for every constraint involving a stored entry to be checked.
pub fn is_valid_mod2(profile: &[ProfileValue], truncation_type: TruncationType) -> bool {
    let pro = padded(profile, truncation_type.value(), profile.len());
    satisfies_recursion(&pro)
}

/// Whether $(e, k)$ is the profile function of a sub-Hopf algebra of the Steenrod algebra at an
/// odd prime.
///
/// Besides the recursion on $e$, if $k(r) = 1$ then for each $j < r$ with $i = r - j$ we need
/// $e(i) \leq j$ or $k(j) = 1$. Entries of $k$ outside $\{1, 2\}$ make the profile invalid.
pub fn is_valid_generic(e: &[ProfileValue], k: &[u32], truncation_type: TruncationType) -> bool {
    if !k.iter().all(|&x| x == 1 || x == 2) {
        return false;
    }

    let mut e_pad = padded(e, truncation_type.value(), e.len());
    let k_pad = match truncation_type {
        TruncationType::Infinite => padded(k, 2, 1),
        TruncationType::Zero => padded(k, 1, e.len()),
    };
    if k_pad.len() > e_pad.len() {
        e_pad.resize(k_pad.len(), truncation_type.value());
    }

    if !satisfies_recursion(&e_pad) {
        return false;
    }

    for (r, _) in k_pad.iter().enumerate().filter(|&(_, &k_r)| k_r == 1) {
        for j in 0..r {
            let i = r - j;
            if e_pad[i - 1].exceeds(j as u32) && k_pad[j] == 2 {
                return false;
            }
        }
    }
    true
}

/// Whether `profile` is a valid profile function at the prime `p`. A profile of the wrong shape
/// for `p` is never valid.
///
/// ```
/// # use steenrod::profile::{is_valid_profile, Profile, TruncationType};
/// # use fp::prime::TWO;
/// let profile = Profile::Mod2(vec![3u32.into(), 2u32.into(), 1u32.into()]);
/// assert!(is_valid_profile(&profile, TruncationType::Zero, TWO));
/// ```
pub fn is_valid_profile(profile: &Profile, truncation_type: TruncationType, p: ValidPrime) -> bool {
    match profile {
        Profile::Mod2(e) if !p.is_odd() => is_valid_mod2(e, truncation_type),
        Profile::Generic { e, k } if p.is_odd() => is_valid_generic(e, k, truncation_type),
        _ => false,
    }
}
