use gpui::Entity;

pub mod document_entity;
pub mod notifications_entity;
pub mod settings_entity;

/// Bundle of observable state entities shared between views.
#[derive(Debug, Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub notifications: Entity<notifications_entity::NotificationsEntity>,
    pub document: Entity<document_entity::DocumentEntity>,
}
