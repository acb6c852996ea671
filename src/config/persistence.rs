//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (last symbol)
    pub state_path: &'static str,
}

/// Configuration for exported chart artifacts
pub struct ExportConfig {
    pub file_extension: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub export: ExportConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    export: ExportConfig {
        file_extension: "json",
    },
};
