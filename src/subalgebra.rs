//! Sub-Hopf algebras of the Steenrod algebra, as specified in JSON.
//!
//! A specification looks like
//! ```json
//! { "p": 2, "basis": "milnor", "profile": [3, 2, 1], "truncation_type": "zero" }
//! ```
//! At odd primes the profile is an object `{"e": [...], "k": [...]}`. A missing or `null`
//! profile, or the string `"infinity"`, denotes the whole Steenrod algebra.

use std::fmt;

use anyhow::{anyhow, Context};
use fp::prime::ValidPrime;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::basis::{resolve_basis_name, SteenrodBasis};
use crate::monomial::{render_monomial, Monomial};
use crate::profile::{
    normalize_profile, NormalizedProfile, ProfileInput, ProfileValue, Sequence, TruncationSpec,
};

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ProfileSpec {
    Mod2(Vec<ProfileValue>),
    Generic { e: Vec<ProfileValue>, k: Vec<u32> },
    Named(String),
}

#[derive(Deserialize, Debug, Clone)]
pub struct SubalgebraSpec {
    pub p: ValidPrime,
    #[serde(default)]
    pub basis: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileSpec>,
    #[serde(default)]
    pub truncation_type: TruncationSpec,
}

/// A sub-Hopf algebra of the Steenrod algebra together with the basis used to print its
/// elements.
///
/// Equal values describe the same algebra, so this can key a cache of algebra objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubHopfAlgebra {
    pub p: ValidPrime,
    pub basis: SteenrodBasis,
    pub profile: NormalizedProfile,
}

impl SubHopfAlgebra {
    /// The whole Steenrod algebra in the Milnor basis.
    pub fn full(p: ValidPrime) -> Self {
        Self {
            p,
            basis: SteenrodBasis::Milnor,
            profile: NormalizedProfile::full(p),
        }
    }

    pub fn is_full(&self) -> bool {
        self.profile.is_full()
    }

    pub fn from_spec(spec: SubalgebraSpec) -> anyhow::Result<Self> {
        let p = spec.p;
        let basis = resolve_basis_name(spec.basis.as_deref().unwrap_or("milnor"), p)?;

        let input = match spec.profile {
            None => ProfileInput::Full,
            Some(ProfileSpec::Named(name)) => {
                if name.parse::<TruncationSpec>().ok() != Some(TruncationSpec::Infinite) {
                    return Err(anyhow!("Invalid profile: {name}"));
                }
                ProfileInput::Full
            }
            Some(ProfileSpec::Mod2(e)) => ProfileInput::Mod2(Sequence::Explicit(e)),
            Some(ProfileSpec::Generic { e, k }) => ProfileInput::Generic {
                e: Sequence::Explicit(e),
                k: Sequence::Explicit(k),
            },
        };
        let profile = normalize_profile(input, None, spec.truncation_type, p)
            .with_context(|| format!("Failed to normalize profile at the prime {p}"))?;

        Ok(Self { p, basis, profile })
    }

    #[tracing::instrument(skip_all)]
    pub fn from_json(json: &Value) -> anyhow::Result<Self> {
        let spec: SubalgebraSpec = serde_json::from_value(json.clone())
            .context("Invalid sub-Hopf algebra specification")?;
        let algebra = Self::from_spec(spec)?;
        tracing::debug!(%algebra, "constructed sub-Hopf algebra");
        Ok(algebra)
    }

    /// The JSON description this algebra was built from, up to normalization. The profile is omitted
    /// when it is exactly [`NormalizedProfile::full`], so that [`SubHopfAlgebra::from_json`]
    /// recovers an equal value.
    pub fn to_json(&self) -> Value {
        let mut json = json!({
            "p": self.p,
            "basis": self.basis,
        });
        if self.profile != NormalizedProfile::full(self.p) {
            json["profile"] = json!(self.profile.profile);
            json["truncation_type"] = json!(self.profile.truncation_type);
        }
        json
    }

    /// Write a monomial of this algebra in its basis.
    ///
    /// # Panics
    ///
    /// Panics if `mono` does not have the shape used by the basis.
    pub fn mono_to_string(&self, mono: &Monomial, latex: bool) -> String {
        render_monomial(self.basis, mono, latex, self.p)
    }
}

impl fmt::Display for SubHopfAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_full() {
            write!(f, "mod {} Steenrod algebra, {} basis", self.p, self.basis)
        } else {
            write!(
                f,
                "sub-Hopf algebra of mod {} Steenrod algebra, {} basis, profile function {}",
                self.p, self.basis, self.profile
            )
        }
    }
}
