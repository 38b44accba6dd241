use confdesk_bridge::config_type::ConfigType;

/// The configuration document currently loaded into the editor.
#[derive(Debug, Clone, Default)]
pub struct DocumentEntity {
    /// Which document the content belongs to.
    pub config_type: ConfigType,
    /// Last content received from the management server.
    pub content: String,
}
