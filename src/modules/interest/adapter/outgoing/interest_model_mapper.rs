// src/modules/interest/adapter/outgoing/interest_model_mapper.rs

use crate::modules::interest::adapter::outgoing::sea_orm_entity::interests;
use crate::modules::interest::application::domain::entities::Interest;
use crate::shared::content::Icon;

pub(super) fn model_to_interest(model: interests::Model) -> Result<Interest, String> {
    Ok(Interest {
        id: model.id,
        slug: model.slug,
        title: model.title,
        excerpt: model.excerpt,
        content: model.content,
        category: model.category.parse().map_err(|e| format!("{e}"))?,
        interest_type: model.interest_type.parse().map_err(|e| format!("{e}"))?,
        icon: Icon::from_stored(&model.icon),
        color: model.color,
        tags: serde_json::from_value(model.tags).map_err(|e| format!("tags: {e}"))?,
        featured: model.featured,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
