use fp::prime::ValidPrime;

use super::{
    is_valid_profile, NormalizedProfile, Profile, ProfileInput, ProfileValue, Sequence,
    TruncationSpec, TruncationType,
};
use crate::{Result, SteenrodError};

/// The number of values sampled from a profile given as a function, plus one.
pub const DEFAULT_PRECISION: usize = 100;

/// `values` with every trailing copy of `redundant` removed.
fn without_trailing<'a, T: PartialEq>(values: &'a [T], redundant: &T) -> &'a [T] {
    let len = values
        .iter()
        .rposition(|x| x != redundant)
        .map_or(0, |i| i + 1);
    &values[..len]
}

/// The end of a sampling range, saturating at `u32::MAX`.
fn sample_end(precision: usize) -> u32 {
    u32::try_from(precision).unwrap_or(u32::MAX)
}

/// Normalize the profile function $e$, returning it together with the resolved truncation type.
///
/// An explicit sequence defaults to truncation type zero, a function to infinity. A function is
/// sampled at `1..precision`.
fn normalize_e(
    e: Sequence<ProfileValue>,
    precision: Option<usize>,
    truncation: TruncationSpec,
) -> (Vec<ProfileValue>, TruncationType) {
    let truncation_type = match e {
        Sequence::Explicit(_) => truncation.resolve(TruncationType::Zero),
        Sequence::Generator(_) => truncation.resolve(TruncationType::Infinite),
    };
    let e = e.sample(1..sample_end(precision.unwrap_or(DEFAULT_PRECISION)));

    let e = match truncation_type {
        TruncationType::Zero => without_trailing(&e, &ProfileValue::ZERO).to_vec(),
        TruncationType::Infinite => e,
    };
    (e, truncation_type)
}

/// Turn user input into a canonical, validated profile.
///
/// The whole algebra is requested with [`ProfileInput::Full`], which always has truncation type
/// infinity. Otherwise, the truncation type is taken from `truncation`, where
/// [`TruncationSpec::Auto`] means zero for an explicit sequence and infinity for a function.
/// Functions are sampled at `1..precision` (`precision` defaults to [`DEFAULT_PRECISION`]).
///
/// At an odd prime, the auxiliary function $k$ is sampled at `0..precision - 1`, where `precision`
/// is one more than the length of $e$ if $e$ was sampled from a function. Trailing entries of $k$
/// equal to [`TruncationType::k_value`] are dropped.
///
/// # Errors
///
/// Returns [`SteenrodError::InvalidProfileShape`] if the input has the wrong form for `p`, and
/// [`SteenrodError::InvalidProfile`] if the result does not define a sub-Hopf algebra.
///
/// ```
/// # use steenrod::profile::*;
/// # use fp::prime::TWO;
/// let normalized = normalize_profile(
///     ProfileInput::function(|n| 4 - n as i32),
///     Some(4),
///     TruncationSpec::Auto,
///     TWO,
/// )
/// .unwrap();
/// assert_eq!(normalized.truncation_type, TruncationType::Infinite);
/// assert_eq!(
///     normalized.profile,
///     Profile::Mod2(vec![3u32.into(), 2u32.into(), 1u32.into()])
/// );
/// ```
pub fn normalize_profile(
    profile: ProfileInput,
    precision: Option<usize>,
    truncation: TruncationSpec,
    p: ValidPrime,
) -> Result<NormalizedProfile> {
    let normalized = match profile {
        ProfileInput::Full => NormalizedProfile::full(p),
        ProfileInput::Mod2(_) if p.is_odd() => {
            return Err(SteenrodError::InvalidProfileShape(format!(
                "expected a pair (e, k) at the prime {p}"
            )));
        }
        ProfileInput::Generic { .. } if !p.is_odd() => {
            return Err(SteenrodError::InvalidProfileShape(format!(
                "expected a single sequence at the prime {p}"
            )));
        }
        ProfileInput::Mod2(e) => {
            let (e, truncation_type) = normalize_e(e, precision, truncation);
            NormalizedProfile {
                profile: Profile::Mod2(e),
                truncation_type,
            }
        }
        ProfileInput::Generic { e, k } => {
            let sampled = matches!(e, Sequence::Generator(_));
            let (e, truncation_type) = normalize_e(e, precision, truncation);
            let precision = if sampled {
                e.len() + 1
            } else {
                precision.unwrap_or(DEFAULT_PRECISION)
            };

            let k = k.sample(0..sample_end(precision.saturating_sub(1)));
            let k = without_trailing(&k, &truncation_type.k_value()).to_vec();
            NormalizedProfile {
                profile: Profile::Generic { e, k },
                truncation_type,
            }
        }
    };

    if is_valid_profile(&normalized.profile, normalized.truncation_type, p) {
        Ok(normalized)
    } else {
        tracing::debug!(
            profile = %normalized.profile,
            truncation_type = %normalized.truncation_type,
            %p,
            "rejected invalid profile"
        );
        Err(SteenrodError::InvalidProfile)
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;
    use crate::profile::ProfileValue::Infinite;

    const TWO: ValidPrime = ValidPrime::new(2);

    fn values(v: &[u32]) -> Vec<ProfileValue> {
        v.iter().map(|&x| x.into()).collect()
    }

    fn mod2(e: &[u32], truncation_type: TruncationType) -> NormalizedProfile {
        NormalizedProfile {
            profile: Profile::Mod2(values(e)),
            truncation_type,
        }
    }

    #[test]
    fn full() {
        let normalized =
            normalize_profile(ProfileInput::Full, None, TruncationSpec::Zero, TWO).unwrap();
        assert_eq!(normalized, mod2(&[], TruncationType::Infinite));
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn full_generic() {
        let p = ValidPrime::new(5);
        let normalized =
            normalize_profile(ProfileInput::Full, None, TruncationSpec::Auto, p).unwrap();
        assert_eq!(normalized, NormalizedProfile::full(p));
    }

    #[test]
    fn explicit() {
        let normalized = normalize_profile(
            ProfileInput::explicit([1u32, 2, 1, 0, 0]),
            None,
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[1, 2, 1], TruncationType::Zero));

        let normalized = normalize_profile(
            ProfileInput::explicit([6u32, 2]),
            None,
            TruncationSpec::Infinite,
            TWO,
        );
        assert_eq!(normalized, Err(SteenrodError::InvalidProfile));

        let normalized = normalize_profile(
            ProfileInput::explicit([0u32, 0]),
            None,
            TruncationSpec::Zero,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[], TruncationType::Zero));
    }

    #[test]
    fn function() {
        let normalized = normalize_profile(
            ProfileInput::function(|n| 4 - n as i32),
            Some(4),
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[3, 2, 1], TruncationType::Infinite));

        let normalized = normalize_profile(
            ProfileInput::function(|n| 4 - n as i32),
            Some(4),
            TruncationSpec::Zero,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[3, 2, 1], TruncationType::Zero));

        let normalized = normalize_profile(
            ProfileInput::function(|_| 3),
            Some(4),
            TruncationSpec::Zero,
            TWO,
        );
        assert_eq!(normalized, Err(SteenrodError::InvalidProfile));

        let normalized = normalize_profile(
            ProfileInput::function(|_| 3),
            Some(4),
            TruncationSpec::Infinite,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[3, 3, 3], TruncationType::Infinite));
    }

    #[test]
    fn function_clamps_and_strips() {
        // 4 - n goes negative after n = 4, and the negative values become zeros that are stripped.
        let normalized = normalize_profile(
            ProfileInput::function(|n| 4 - n as i64),
            None,
            TruncationSpec::Zero,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized, mod2(&[3, 2, 1], TruncationType::Zero));

        let normalized = normalize_profile(
            ProfileInput::function(|_| Infinite),
            Some(3),
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap();
        assert_eq!(
            normalized.profile,
            Profile::Mod2(vec![Infinite, Infinite])
        );
        assert!(normalized.is_full());
    }

    #[test]
    fn default_precision() {
        let normalized = normalize_profile(
            ProfileInput::function(|_| Infinite),
            None,
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap();
        assert_eq!(normalized.profile.e().len(), DEFAULT_PRECISION - 1);
    }

    #[test]
    fn sample_end_saturates() {
        assert_eq!(sample_end(DEFAULT_PRECISION), 100);
        assert_eq!(sample_end(u32::MAX as usize), u32::MAX);
        assert_eq!(sample_end(usize::MAX), u32::MAX);
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn explicit_e_with_sampled_k() {
        // k is sampled at 0..DEFAULT_PRECISION - 1, so the 2 at j = 98 survives and the one at
        // j = 99 is never seen.
        let normalized = normalize_profile(
            ProfileInput::generic(
                Sequence::explicit([2u32, 1]),
                Sequence::function(|j| if j >= 98 { 2u32 } else { 1 }),
            ),
            None,
            TruncationSpec::Auto,
            ValidPrime::new(3),
        )
        .unwrap();
        assert_eq!(normalized.truncation_type, TruncationType::Zero);
        let k = normalized.profile.k().unwrap();
        assert_eq!(k.len(), DEFAULT_PRECISION - 1);
        assert_eq!(k[97], 1);
        assert_eq!(k[98], 2);
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn generic() {
        let p = ValidPrime::new(3);
        let normalized = normalize_profile(
            ProfileInput::generic(
                Sequence::explicit([2u32, 1, 0]),
                Sequence::explicit([2u32, 2, 2, 1]),
            ),
            None,
            TruncationSpec::Auto,
            p,
        )
        .unwrap();
        assert_eq!(
            normalized.profile,
            Profile::Generic {
                e: values(&[2, 1]),
                k: vec![2, 2, 2]
            }
        );
        assert_eq!(normalized.truncation_type, TruncationType::Zero);

        // Sampling e resets the precision used for k, so k is only sampled at 0.
        let normalized = normalize_profile(
            ProfileInput::generic(
                Sequence::function(|n| 2 - n as i32),
                Sequence::function(|j| if j == 0 { 1u32 } else { 2 }),
            ),
            Some(10),
            TruncationSpec::Zero,
            p,
        )
        .unwrap();
        assert_eq!(
            normalized.profile,
            Profile::Generic {
                e: values(&[1]),
                k: vec![]
            }
        );

        let normalized = normalize_profile(
            ProfileInput::generic(
                Sequence::function(|_| Infinite),
                Sequence::function(|_| 2u32),
            ),
            Some(3),
            TruncationSpec::Auto,
            p,
        )
        .unwrap();
        assert_eq!(
            normalized.profile,
            Profile::Generic {
                e: vec![Infinite, Infinite],
                k: vec![]
            }
        );
        assert!(normalized.is_full());
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn generic_invalid() {
        let p = ValidPrime::new(7);
        let normalized = normalize_profile(
            ProfileInput::generic(Sequence::explicit([1u32]), Sequence::explicit([2u32])),
            None,
            TruncationSpec::Zero,
            p,
        );
        assert_eq!(normalized, Err(SteenrodError::InvalidProfile));

        let normalized = normalize_profile(
            ProfileInput::generic(Sequence::explicit([0u32]), Sequence::explicit([3u32])),
            None,
            TruncationSpec::Zero,
            p,
        );
        assert_eq!(normalized, Err(SteenrodError::InvalidProfile));
    }

    #[test]
    fn shape() {
        let err = normalize_profile(
            ProfileInput::generic(Sequence::explicit([1u32]), Sequence::explicit([1u32])),
            None,
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap_err();
        expect!["Invalid form for profile: expected a single sequence at the prime 2"]
            .assert_eq(&err.to_string());
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn shape_at_odd_prime() {
        let err = normalize_profile(
            ProfileInput::explicit([1u32]),
            None,
            TruncationSpec::Auto,
            ValidPrime::new(3),
        )
        .unwrap_err();
        expect!["Invalid form for profile: expected a pair (e, k) at the prime 3"]
            .assert_eq(&err.to_string());
    }

    #[test]
    fn renormalize() {
        let normalized = normalize_profile(
            ProfileInput::function(|n| 5 - n as i32),
            Some(8),
            TruncationSpec::Auto,
            TWO,
        )
        .unwrap();
        let (input, truncation) = normalized.to_input();
        assert_eq!(
            normalize_profile(input, None, truncation, TWO).unwrap(),
            normalized
        );
    }
}
