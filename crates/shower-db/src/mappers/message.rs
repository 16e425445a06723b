//! Message entity <-> model mapper

use shower_core::entities::Message;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            author_name: model.author_name,
            content: model.content,
            likes: model.likes,
            created_at: model.created_at,
        }
    }
}
