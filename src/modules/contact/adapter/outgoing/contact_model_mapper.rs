use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_info;
use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::shared::content::Icon;

pub(super) fn model_to_contact(model: contact_info::Model) -> Result<ContactInfo, String> {
    Ok(ContactInfo {
        id: model.id,
        contact_type: model.contact_type.parse().map_err(|e| format!("{e}"))?,
        label: model.label,
        value: model.value,
        url: model.url,
        icon: model.icon.as_deref().map(Icon::from_stored),
        description: model.description,
        display_order: model.display_order,
        is_active: model.is_active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
