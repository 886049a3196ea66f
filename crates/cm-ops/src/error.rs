//! Error types for cm-ops

use cm_provider::ProviderError;
use thiserror::Error;

/// Operation errors
///
/// Provider failures pass through transparently; the remaining variants
/// are the only failures this crate raises on its own.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Underlying provider failure, propagated unchanged
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Machine identity missing (O001)
    #[error("[O001] Either the SMBIOS GUID or the MAC address must be provided for {netbios_name}")]
    MissingMachineIdentity { netbios_name: String },

    /// Resource lookup failed (O002)
    #[error("[O002] Unable to locate resource ID for NetBIOS name: {netbios_name}")]
    ResourceNotFound { netbios_name: String },

    /// PXE advertisement clear rejected by the provider (O003)
    #[error("[O003] Failed to clear PXE advertisement: {message}")]
    PxeClearFailed { message: String },
}

/// Result type alias for OpsError
pub type OpsResult<T> = Result<T, OpsError>;
