//! Error types for the core game model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Planet tiers are drawn from `1..system_tier`, so a system needs tier 2 or more.
    #[error("invalid system tier {0}: star systems must be tier 2 or higher")]
    InvalidSystemTier(u32),

    /// A planet type name could not be parsed.
    #[error("unknown planet type: \"{0}\"")]
    UnknownPlanetType(String),

    /// A stat name could not be parsed.
    #[error("unknown stat: \"{0}\"")]
    UnknownStat(String),
}
