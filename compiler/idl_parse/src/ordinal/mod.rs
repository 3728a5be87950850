//! Ordinal range policy.
//!
//! Ordinals identify fields and methods on the wire, so they cannot be
//! renumbered once published. Running out of them is a schema-evolution
//! dead end; declarations in the last [`EXHAUSTION_WINDOW`] values must be
//! acknowledged with a trailing `!` (`last @65530! :Text;`).

/// Size of the window below the maximum that requires acknowledgment.
pub const EXHAUSTION_WINDOW: u64 = 32;

/// Configured ordinal maxima.
///
/// Unions draw from the field ordinal space and use `max_field`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrdinalLimits {
    pub max_field: u64,
    pub max_method: u64,
}

impl OrdinalLimits {
    /// Default field maximum.
    pub const DEFAULT_MAX_FIELD: u64 = 65_534;
    /// Default method maximum.
    pub const DEFAULT_MAX_METHOD: u64 = 65_535;

    #[must_use]
    pub fn with_max_field(mut self, max: u64) -> Self {
        self.max_field = max;
        self
    }

    #[must_use]
    pub fn with_max_method(mut self, max: u64) -> Self {
        self.max_method = max;
        self
    }
}

impl Default for OrdinalLimits {
    fn default() -> Self {
        OrdinalLimits {
            max_field: Self::DEFAULT_MAX_FIELD,
            max_method: Self::DEFAULT_MAX_METHOD,
        }
    }
}

/// Outcome of checking one ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrdinalVerdict {
    Accepted,
    /// Inside the exhaustion window without `!`.
    NeedsAcknowledgment,
    ExceedsMaximum,
}

/// Classify `ordinal` against `max`.
///
/// The window is `max - 32 < ordinal <= max`, computed without underflow so
/// that small maxima put every ordinal in the window.
pub fn check_ordinal(ordinal: u64, max: u64, acknowledged: bool) -> OrdinalVerdict {
    if ordinal > max {
        return OrdinalVerdict::ExceedsMaximum;
    }
    let window_floor = i128::from(max) - i128::from(EXHAUSTION_WINDOW);
    if i128::from(ordinal) > window_floor && !acknowledged {
        OrdinalVerdict::NeedsAcknowledgment
    } else {
        OrdinalVerdict::Accepted
    }
}

#[cfg(test)]
mod tests;
