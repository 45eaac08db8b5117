//! Canonical names of the bases of the Steenrod algebra, and the resolver that maps free-form
//! user strings onto them.

use std::fmt;

use fp::prime::ValidPrime;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, SteenrodError};

/// Names that denote the Milnor basis.
pub static MILNOR_BASIS_NAMES: [&str; 1] = ["milnor"];

/// Names that denote the Serre-Cartan (admissible) basis.
pub static SERRE_CARTAN_BASIS_NAMES: [&str; 5] =
    ["serre_cartan", "serre-cartan", "sc", "adem", "admissible"];

/// The ordering used by the $P^s_t$ and commutator bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisOrder {
    Rlex,
    Llex,
    Deg,
    Revz,
}

impl BasisOrder {
    /// In order of matching priority.
    const ALL: [Self; 4] = [Self::Rlex, Self::Llex, Self::Deg, Self::Revz];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rlex => "rlex",
            Self::Llex => "llex",
            Self::Deg => "deg",
            Self::Revz => "revz",
        }
    }

    /// The first ordering keyword occurring in `name`, falling back to `revz`.
    fn find_in(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| name.contains(order.as_str()))
            .unwrap_or(Self::Revz)
    }
}

/// A basis of the Steenrod algebra.
///
/// Each variant has exactly one canonical identifier, given by [`SteenrodBasis::as_str`]. The Wood,
/// Arnon and Wall bases only exist at the prime 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteenrodBasis {
    Milnor,
    SerreCartan,
    Pst(BasisOrder),
    Comm { order: BasisOrder, long: bool },
    WoodY,
    WoodZ,
    ArnonA { long: bool },
    ArnonC,
    Wall { long: bool },
}

impl SteenrodBasis {
    const ALL: [Self; 21] = {
        use BasisOrder::*;
        [
            Self::Milnor,
            Self::SerreCartan,
            Self::Pst(Rlex),
            Self::Pst(Llex),
            Self::Pst(Deg),
            Self::Pst(Revz),
            Self::Comm { order: Rlex, long: false },
            Self::Comm { order: Llex, long: false },
            Self::Comm { order: Deg, long: false },
            Self::Comm { order: Revz, long: false },
            Self::Comm { order: Rlex, long: true },
            Self::Comm { order: Llex, long: true },
            Self::Comm { order: Deg, long: true },
            Self::Comm { order: Revz, long: true },
            Self::WoodY,
            Self::WoodZ,
            Self::ArnonA { long: false },
            Self::ArnonA { long: true },
            Self::ArnonC,
            Self::Wall { long: false },
            Self::Wall { long: true },
        ]
    };

    pub fn as_str(self) -> &'static str {
        use BasisOrder::*;
        match self {
            Self::Milnor => "milnor",
            Self::SerreCartan => "serre-cartan",
            Self::Pst(Rlex) => "pst_rlex",
            Self::Pst(Llex) => "pst_llex",
            Self::Pst(Deg) => "pst_deg",
            Self::Pst(Revz) => "pst_revz",
            Self::Comm { order: Rlex, long: false } => "comm_rlex",
            Self::Comm { order: Llex, long: false } => "comm_llex",
            Self::Comm { order: Deg, long: false } => "comm_deg",
            Self::Comm { order: Revz, long: false } => "comm_revz",
            Self::Comm { order: Rlex, long: true } => "comm_rlex_long",
            Self::Comm { order: Llex, long: true } => "comm_llex_long",
            Self::Comm { order: Deg, long: true } => "comm_deg_long",
            Self::Comm { order: Revz, long: true } => "comm_revz_long",
            Self::WoodY => "woody",
            Self::WoodZ => "woodz",
            Self::ArnonA { long: false } => "arnona",
            Self::ArnonA { long: true } => "arnona_long",
            Self::ArnonC => "arnonc",
            Self::Wall { long: false } => "wall",
            Self::Wall { long: true } => "wall_long",
        }
    }

    /// Inverse of [`SteenrodBasis::as_str`]. This does not accept synonyms; use
    /// [`resolve_basis_name`] for user input.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == name)
    }

    /// Whether the basis is only defined at the prime 2.
    pub fn is_mod2_only(self) -> bool {
        matches!(
            self,
            Self::WoodY | Self::WoodZ | Self::ArnonA { .. } | Self::ArnonC | Self::Wall { .. }
        )
    }

    pub fn is_available_at(self, p: ValidPrime) -> bool {
        p == 2 || !self.is_mod2_only()
    }

    /// All bases of the Steenrod algebra at the prime `p`.
    pub fn all(p: ValidPrime) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |b| b.is_available_at(p))
    }
}

impl fmt::Display for SteenrodBasis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SteenrodBasis {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SteenrodBasis {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::from_canonical(&name)
            .ok_or_else(|| D::Error::custom(format!("{name} is not a canonical basis name")))
    }
}

/// Resolve a user-supplied basis name at the prime `p`.
///
/// Matching is case-insensitive. Exact synonyms of the Milnor and Serre-Cartan bases are tried
/// first, then the substrings `pst` and `comm` (refined by an ordering keyword and, for `comm`,
/// by `long`). At the prime 2 the substrings `wood`, `arnon` and `wall` are tried last.
///
/// ```
/// # use steenrod::basis::{resolve_basis_name, SteenrodBasis, BasisOrder};
/// # use fp::prime::TWO;
/// assert_eq!(resolve_basis_name("Adem", TWO).unwrap(), SteenrodBasis::SerreCartan);
/// assert_eq!(resolve_basis_name("pst", TWO).unwrap().as_str(), "pst_revz");
/// assert_eq!(resolve_basis_name("comm_deg_long", TWO).unwrap().as_str(), "comm_deg_long");
/// ```
pub fn resolve_basis_name(name: &str, p: ValidPrime) -> Result<SteenrodBasis> {
    let name = name.to_lowercase();
    let resolved = if MILNOR_BASIS_NAMES.contains(&name.as_str()) {
        Some(SteenrodBasis::Milnor)
    } else if SERRE_CARTAN_BASIS_NAMES.contains(&name.as_str()) {
        Some(SteenrodBasis::SerreCartan)
    } else if name.contains("pst") {
        Some(SteenrodBasis::Pst(BasisOrder::find_in(&name)))
    } else if name.contains("comm") {
        Some(SteenrodBasis::Comm {
            order: BasisOrder::find_in(&name),
            long: name.contains("long"),
        })
    } else if p == 2 && name.contains("wood") {
        if name.contains('y') {
            Some(SteenrodBasis::WoodY)
        } else if name.contains('z') {
            Some(SteenrodBasis::WoodZ)
        } else {
            None
        }
    } else if p == 2 && name.contains("arnon") {
        if name.contains('c') {
            Some(SteenrodBasis::ArnonC)
        } else {
            Some(SteenrodBasis::ArnonA {
                long: name.contains("long"),
            })
        }
    } else if p == 2 && name.contains("wall") {
        Some(SteenrodBasis::Wall {
            long: name.contains("long"),
        })
    } else {
        None
    };

    match resolved {
        Some(basis) => {
            tracing::trace!(%name, %p, %basis, "resolved basis name");
            Ok(basis)
        }
        None => {
            tracing::debug!(%name, %p, "unrecognized basis name");
            Err(SteenrodError::InvalidBasis { name, p })
        }
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("milnor", "milnor")]
    #[case("serre_cartan", "serre-cartan")]
    #[case("serre-cartan", "serre-cartan")]
    #[case("sc", "serre-cartan")]
    #[case("adem", "serre-cartan")]
    #[case("admissible", "serre-cartan")]
    #[case("pst", "pst_revz")]
    #[case("pst_rlex", "pst_rlex")]
    #[case("pst_llex", "pst_llex")]
    #[case("pst_deg", "pst_deg")]
    #[case("pst_revz", "pst_revz")]
    #[case("comm", "comm_revz")]
    #[case("comm_rlex", "comm_rlex")]
    #[case("comm_llex", "comm_llex")]
    #[case("comm_deg", "comm_deg")]
    #[case("comm_long", "comm_revz_long")]
    #[case("comm_deg_long", "comm_deg_long")]
    #[case("comm_llex_long", "comm_llex_long")]
    #[cfg(feature = "odd-primes")]
    fn resolve_at_every_prime(
        #[case] name: &str,
        #[case] canonical: &str,
        #[values(2, 3, 5, 7)] p: u32,
    ) {
        let p = ValidPrime::new(p);
        assert_eq!(resolve_basis_name(name, p).unwrap().as_str(), canonical);
        assert_eq!(
            resolve_basis_name(&name.to_uppercase(), p).unwrap().as_str(),
            canonical
        );
    }

    #[rstest]
    #[case("woody", "woody")]
    #[case("wood_y", "woody")]
    #[case("woodz", "woodz")]
    #[case("Wood_Z", "woodz")]
    #[case("arnona", "arnona")]
    #[case("arnon_a", "arnona")]
    #[case("arnona_long", "arnona_long")]
    #[case("arnonc", "arnonc")]
    #[case("ArnonC", "arnonc")]
    #[case("wall", "wall")]
    #[case("wall_long", "wall_long")]
    #[case("WALL_LONG", "wall_long")]
    fn resolve_at_two(#[case] name: &str, #[case] canonical: &str) {
        let p = ValidPrime::new(2);
        assert_eq!(resolve_basis_name(name, p).unwrap().as_str(), canonical);
    }

    #[rstest]
    #[case("woody")]
    #[case("arnona")]
    #[case("wall_long")]
    #[cfg(feature = "odd-primes")]
    fn mod2_bases_rejected_at_odd_primes(#[case] name: &str, #[values(3, 5)] p: u32) {
        let p = ValidPrime::new(p);
        assert_eq!(
            resolve_basis_name(name, p).unwrap_err(),
            SteenrodError::InvalidBasis {
                name: name.to_string(),
                p
            }
        );
    }

    #[test]
    fn invalid_names() {
        let p = ValidPrime::new(2);
        let err = resolve_basis_name("Mil", p).unwrap_err();
        expect!["mil is not a recognized basis at the prime 2."].assert_eq(&err.to_string());

        // "wood" without y or z does not pick a Wood basis
        assert_eq!(
            resolve_basis_name("Wood", p).unwrap_err(),
            SteenrodError::InvalidBasis {
                name: "wood".to_string(),
                p
            }
        );

        // Milnor synonyms match exactly, not as substrings
        assert!(resolve_basis_name("milnor basis", p).is_err());
    }

    #[test]
    fn pst_takes_priority() {
        let p = ValidPrime::new(2);
        assert_eq!(
            resolve_basis_name("pst_comm", p).unwrap(),
            SteenrodBasis::Pst(BasisOrder::Revz)
        );
        assert_eq!(
            resolve_basis_name("wood_wall_y", p).unwrap(),
            SteenrodBasis::WoodY
        );
    }

    #[test]
    fn canonical_roundtrip() {
        let p = ValidPrime::new(2);
        for basis in SteenrodBasis::all(p) {
            assert_eq!(SteenrodBasis::from_canonical(basis.as_str()), Some(basis));
            assert_eq!(resolve_basis_name(basis.as_str(), p).unwrap(), basis);
        }
        assert_eq!(SteenrodBasis::all(p).count(), 21);
    }

    #[cfg(feature = "odd-primes")]
    #[test]
    fn odd_prime_bases() {
        let p = ValidPrime::new(3);
        for basis in SteenrodBasis::all(p) {
            assert!(!basis.is_mod2_only());
            assert_eq!(resolve_basis_name(basis.as_str(), p).unwrap(), basis);
        }
        assert_eq!(SteenrodBasis::all(p).count(), 14);
    }

    #[test]
    fn serde() {
        let basis = SteenrodBasis::Comm {
            order: BasisOrder::Deg,
            long: true,
        };
        assert_eq!(serde_json::to_string(&basis).unwrap(), r#""comm_deg_long""#);
        assert_eq!(
            serde_json::from_str::<SteenrodBasis>(r#""wall_long""#).unwrap(),
            SteenrodBasis::Wall { long: true }
        );
        assert!(serde_json::from_str::<SteenrodBasis>(r#""adem""#).is_err());
    }
}
