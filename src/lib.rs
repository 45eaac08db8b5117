//! The naming and normalization layer of the Steenrod algebra.
//!
//! This crate does not multiply anything. It answers three questions that come up whenever a
//! Steenrod algebra object is constructed or printed:
//!
//!  - which basis does a user-supplied name refer to ([`basis`]);
//!  - is a profile function valid, and what is its canonical form ([`profile`]);
//!  - how is a basis monomial written down, in plain text or LaTeX ([`monomial`]).
//!
//! [`subalgebra`] ties these together into a JSON-configurable description of a sub-Hopf
//! algebra.

pub mod basis;
pub mod combinatorics;
pub mod monomial;
pub mod profile;
pub mod subalgebra;

mod error;
pub use error::{Result, SteenrodError};

pub use basis::{resolve_basis_name, BasisOrder, SteenrodBasis};
pub use monomial::{render_monomial, Monomial};
pub use profile::{
    is_valid_profile, normalize_profile, NormalizedProfile, Profile, ProfileInput, ProfileValue,
    Sequence, TruncationSpec, TruncationType,
};
pub use subalgebra::{SubHopfAlgebra, SubalgebraSpec};
