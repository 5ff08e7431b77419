use crate::modules::timeline::adapter::outgoing::sea_orm_entity::timeline;
use crate::modules::timeline::application::domain::entities::TimelineEntry;

pub(super) fn model_to_entry(model: timeline::Model) -> Result<TimelineEntry, String> {
    Ok(TimelineEntry {
        id: model.id,
        year: model.year,
        title: model.title,
        entry_type: model.entry_type.parse().map_err(|e| format!("{e}"))?,
        description: model.description,
        location: model.location,
        technologies: optional_list("technologies", model.technologies)?,
        achievements: optional_list("achievements", model.achievements)?,
        status: model.status,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn optional_list(column: &str, json: Option<serde_json::Value>) -> Result<Option<Vec<String>>, String> {
    json.map(|value| serde_json::from_value(value).map_err(|e| format!("{column}: {e}")))
        .transpose()
}
