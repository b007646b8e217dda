//! Member entity <-> model mapper

use roster_core::entities::Member;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            full_name: model.full_name,
            nim: model.nim,
            age: model.age,
            job: model.job,
            location: model.location,
            instagram_account: model.instagram_account,
            link_to_instagram: model.link_to_instagram,
            quote: model.quote,
            image_path: model.image_path,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
