//! Option exercise style definitions.
//!
//! This module provides the exercise style enumeration for vanilla
//! options: European and American.

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: Exercise only at expiry
/// - `American`: Exercise at any time before expiry
///
/// # Examples
/// ```
/// use lattice_core::types::ExerciseStyle;
///
/// let european = ExerciseStyle::European;
/// let american = ExerciseStyle::American;
/// assert!(!european.allows_early_exercise());
/// assert!(american.allows_early_exercise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl ExerciseStyle {
    /// Creates a new European exercise style.
    #[inline]
    pub fn european() -> Self {
        ExerciseStyle::European
    }

    /// Creates a new American exercise style.
    #[inline]
    pub fn american() -> Self {
        ExerciseStyle::American
    }

    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether early exercise is allowed.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}
