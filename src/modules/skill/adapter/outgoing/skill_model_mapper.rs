use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::domain::entities::Skill;

pub(super) fn model_to_skill(model: skills::Model) -> Result<Skill, String> {
    Ok(Skill {
        id: model.id,
        name: model.name,
        level: model.level.parse().map_err(|e| format!("{e}"))?,
        technologies: serde_json::from_value(model.technologies)
            .map_err(|e| format!("technologies: {e}"))?,
        color: model.color,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
