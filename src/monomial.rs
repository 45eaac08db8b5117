//! String representations of basis monomials of the Steenrod algebra.
//!
//! Every basis has its own renderer, and they all have the signature [`Renderer`]. The identity
//! monomial is always written `1`. In LaTeX mode the names `Sq`, `P` and `beta` are replaced by
//! `\text{Sq}`, `\mathcal{P}` and `\beta`, and exponents are wrapped in braces. Otherwise the
//! output is the same, token for token.
//!
//! The renderers do not check that a monomial is admissible, only that it has the right shape for
//! the basis. Passing a monomial of the wrong shape is a programming error and panics.

use fp::prime::ValidPrime;
use itertools::Itertools;
use num_bigint::BigUint;

use crate::basis::SteenrodBasis;

/// A basis monomial, in one of the encodings used by the various bases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Monomial {
    /// A flat list of exponents: $\mathrm{Sq}(r_1, r_2, \ldots)$ in the Milnor basis at 2, or an
    /// admissible sequence in the Serre-Cartan basis. At odd primes, the Serre-Cartan sequence
    /// alternates Bockstein exponents and powers, starting with a Bockstein.
    Sequence(Vec<u32>),
    /// A Milnor basis element $Q_{e_1} Q_{e_2} \cdots \mathcal{P}(r_1, r_2, \ldots)$ at an odd
    /// prime.
    Generic { q_part: Vec<u32>, p_part: Vec<u32> },
    /// A product of generators indexed by pairs, as in the Wood, Wall, Arnon A, $P^s_t$ and
    /// commutator bases at the prime 2.
    Pairs(Vec<(u32, u32)>),
    /// The odd primary $P^s_t$ and commutator bases: some $Q_e$ followed by powers of generators
    /// indexed by $(s, t)$, each with a multiplicity.
    GenericPairs {
        q_part: Vec<u32>,
        p_part: Vec<((u32, u32), u32)>,
    },
}

impl Monomial {
    /// Whether this is the identity. The sequence `(0)` also denotes the identity.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Sequence(s) => s.is_empty() || s[..] == [0],
            Self::Generic { q_part, p_part } => q_part.is_empty() && p_part.is_empty(),
            Self::Pairs(pairs) => pairs.is_empty(),
            Self::GenericPairs { q_part, p_part } => q_part.is_empty() && p_part.is_empty(),
        }
    }
}

pub type Renderer = fn(&Monomial, bool, ValidPrime) -> String;

impl SteenrodBasis {
    /// The function used to print monomials in this basis. The Arnon C basis is printed as
    /// admissible sequences.
    pub fn renderer(self) -> Renderer {
        match self {
            Self::Milnor => milnor_mono_to_string,
            Self::SerreCartan | Self::ArnonC => serre_cartan_mono_to_string,
            Self::WoodY | Self::WoodZ => wood_mono_to_string,
            Self::Wall { long: false } => wall_mono_to_string,
            Self::Wall { long: true } => wall_long_mono_to_string,
            Self::ArnonA { long: false } => arnon_a_mono_to_string,
            Self::ArnonA { long: true } => arnon_a_long_mono_to_string,
            Self::Pst(_) => pst_mono_to_string,
            Self::Comm { long: false, .. } => comm_mono_to_string,
            Self::Comm { long: true, .. } => comm_long_mono_to_string,
        }
    }
}

/// Write `mono` as an element of the Steenrod algebra at `p` in the given basis.
///
/// # Panics
///
/// Panics if `mono` does not have the shape used by `basis`.
///
/// ```
/// # use steenrod::{render_monomial, Monomial, SteenrodBasis};
/// # use fp::prime::TWO;
/// let mono = Monomial::Sequence(vec![1, 2]);
/// assert_eq!(render_monomial(SteenrodBasis::Milnor, &mono, false, TWO), "Sq(1,2)");
/// assert_eq!(render_monomial(SteenrodBasis::Milnor, &mono, true, TWO), r"\text{Sq}(1,2)");
/// ```
pub fn render_monomial(basis: SteenrodBasis, mono: &Monomial, latex: bool, p: ValidPrime) -> String {
    basis.renderer()(mono, latex, p)
}

struct Symbols {
    sq: &'static str,
    /// The name of $P^i$ at an odd prime
    p: &'static str,
    beta: &'static str,
}

impl Symbols {
    fn new(latex: bool) -> Self {
        if latex {
            Self {
                sq: r"\text{Sq}",
                p: r"\mathcal{P}",
                beta: r"\beta",
            }
        } else {
            Self {
                sq: "Sq",
                p: "P",
                beta: "beta",
            }
        }
    }
}

/// `^{n}` in LaTeX, `^n` otherwise. Empty if `n` is 1.
fn multiplicity(n: u32, latex: bool) -> String {
    match (n, latex) {
        (0 | 1, _) => String::new(),
        (n, true) => format!("^{{{n}}}"),
        (n, false) => format!("^{n}"),
    }
}

fn q_tokens(q_part: &[u32]) -> impl Iterator<Item = String> + '_ {
    q_part.iter().map(|e| format!("Q_{{{e}}}"))
}

/// $2^i$. Exponents are unbounded, so degrees are computed exactly.
fn power_of_two(i: u32) -> BigUint {
    BigUint::from(1u32) << i
}

/// $\mathrm{Sq}^{2^i}$
fn sq_power_of_two(sq: &str, i: u32) -> String {
    format!("{sq}^{{{}}}", power_of_two(i))
}

fn wrong_shape(basis: &str, mono: &Monomial) -> ! {
    panic!("Monomial {mono:?} cannot be written in the {basis} basis")
}

/// The Milnor basis: `Sq(1,2)` at the prime 2 and `Q_{0} Q_{1} P(1,2)` at odd primes.
pub fn milnor_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    if mono.is_empty() {
        return "1".to_string();
    }
    let symbols = Symbols::new(latex);
    match mono {
        Monomial::Sequence(r) => format!("{}({})", symbols.sq, r.iter().join(",")),
        Monomial::Generic { q_part, p_part } => {
            let p_token = (!p_part.is_empty())
                .then(|| format!("{}({})", symbols.p, p_part.iter().join(",")));
            q_tokens(q_part).chain(p_token).join(" ")
        }
        _ => wrong_shape("milnor", mono),
    }
}

/// The Serre-Cartan basis: `Sq^{4} Sq^{2}` at the prime 2 and `beta P^{3} P^{1} beta` at odd
/// primes.
pub fn serre_cartan_mono_to_string(mono: &Monomial, latex: bool, p: ValidPrime) -> String {
    let Monomial::Sequence(seq) = mono else {
        wrong_shape("serre-cartan", mono)
    };
    if mono.is_empty() {
        return "1".to_string();
    }
    let symbols = Symbols::new(latex);
    if p == 2 {
        seq.iter().map(|n| format!("{}^{{{n}}}", symbols.sq)).join(" ")
    } else {
        seq.iter()
            .enumerate()
            .filter_map(|(index, &n)| match (index % 2, n) {
                (0, 1) => Some(symbols.beta.to_string()),
                (0, _) => None,
                _ => Some(format!("{}^{{{n}}}", symbols.p)),
            })
            .join(" ")
    }
}

fn pairs<'a>(basis: &str, mono: &'a Monomial) -> &'a [(u32, u32)] {
    match mono {
        Monomial::Pairs(pairs) => pairs,
        _ => wrong_shape(basis, mono),
    }
}

/// The Wood Y and Z bases, whose generators are $\mathrm{Sq}^{2^s (2^{t+1} - 1)}$.
pub fn wood_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    let pairs = pairs("wood", mono);
    if pairs.is_empty() {
        return "1".to_string();
    }
    let sq = Symbols::new(latex).sq;
    pairs
        .iter()
        .map(|&(s, t)| format!("{sq}^{{{}}}", power_of_two(s) * (power_of_two(t + 1) - 1u32)))
        .join(" ")
}

/// The Wall basis, whose generators are written $Q^m_k$.
pub fn wall_mono_to_string(mono: &Monomial, _latex: bool, _p: ValidPrime) -> String {
    let pairs = pairs("wall", mono);
    if pairs.is_empty() {
        return "1".to_string();
    }
    pairs
        .iter()
        .map(|(m, k)| format!("Q^{{{m}}}_{{{k}}}"))
        .join(" ")
}

/// The Wall basis with each $Q^m_k$ expanded to $\mathrm{Sq}^{2^k} \cdots \mathrm{Sq}^{2^m}$.
pub fn wall_long_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    let pairs = pairs("wall_long", mono);
    if pairs.is_empty() {
        return "1".to_string();
    }
    let sq = Symbols::new(latex).sq;
    pairs
        .iter()
        .flat_map(|&(m, k)| (k..=m).map(move |i| sq_power_of_two(sq, i)))
        .join(" ")
}

/// The Arnon A basis, whose generators are written $X^m_k$.
pub fn arnon_a_mono_to_string(mono: &Monomial, _latex: bool, _p: ValidPrime) -> String {
    let pairs = pairs("arnona", mono);
    if pairs.is_empty() {
        return "1".to_string();
    }
    pairs
        .iter()
        .map(|(m, k)| format!("X^{{{m}}}_{{{k}}}"))
        .join(" ")
}

/// The Arnon A basis with each $X^m_k$ expanded to $\mathrm{Sq}^{2^m} \cdots \mathrm{Sq}^{2^k}$.
pub fn arnon_a_long_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    let pairs = pairs("arnona_long", mono);
    if pairs.is_empty() {
        return "1".to_string();
    }
    let sq = Symbols::new(latex).sq;
    pairs
        .iter()
        .flat_map(|&(m, k)| (k..=m).rev().map(move |i| sq_power_of_two(sq, i)))
        .join(" ")
}

/// The $P^s_t$ bases. At odd primes a generator with multiplicity $n > 1$ is written
/// `(P^{s}_{t})^n`.
pub fn pst_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    if mono.is_empty() {
        return "1".to_string();
    }
    match mono {
        Monomial::Pairs(pairs) => pairs
            .iter()
            .map(|(s, t)| format!("P^{{{s}}}_{{{t}}}"))
            .join(" "),
        Monomial::GenericPairs { q_part, p_part } => {
            let p_tokens = p_part.iter().map(|&((s, t), n)| match n {
                1 => format!("P^{{{s}}}_{{{t}}}"),
                n => format!("(P^{{{s}}}_{{{t}}}){}", multiplicity(n, latex)),
            });
            q_tokens(q_part).chain(p_tokens).join(" ")
        }
        _ => wrong_shape("pst", mono),
    }
}

/// The commutator bases, whose generators are written $c_{s,t}$.
pub fn comm_mono_to_string(mono: &Monomial, latex: bool, _p: ValidPrime) -> String {
    if mono.is_empty() {
        return "1".to_string();
    }
    match mono {
        Monomial::Pairs(pairs) => pairs.iter().map(|(s, t)| format!("c_{{{s},{t}}}")).join(" "),
        Monomial::GenericPairs { q_part, p_part } => {
            let p_tokens = p_part
                .iter()
                .map(|&((s, t), n)| format!("c_{{{s},{t}}}{}", multiplicity(n, latex)));
            q_tokens(q_part).chain(p_tokens).join(" ")
        }
        _ => wrong_shape("comm", mono),
    }
}

/// The commutator bases with $c_{s,t}$ written as $s_{p^s p^{s+1} \cdots p^{s+t-1}}$.
///
/// At the prime 2 the subscripts are separated by commas only when $s + t > 4$, since otherwise
/// they are all single digits.
pub fn comm_long_mono_to_string(mono: &Monomial, latex: bool, p: ValidPrime) -> String {
    if mono.is_empty() {
        return "1".to_string();
    }
    match mono {
        Monomial::Pairs(pairs) => pairs
            .iter()
            .map(|&(s, t)| {
                let comma = if s + t > 4 { "," } else { "" };
                format!("s_{{{}}}", (0..t).map(|i| power_of_two(s + i)).join(comma))
            })
            .join(" "),
        Monomial::GenericPairs { q_part, p_part } => {
            let prime = BigUint::from(p.as_u32());
            let p_tokens = p_part.iter().map(|&((s, t), n)| {
                format!(
                    "s_{{{}}}{}",
                    (0..t).map(|i| prime.pow(s + i)).join(","),
                    multiplicity(n, latex)
                )
            });
            q_tokens(q_part).chain(p_tokens).join(" ")
        }
        _ => wrong_shape("comm_long", mono),
    }
}
