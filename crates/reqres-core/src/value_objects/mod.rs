//! Value objects - immutable types that represent domain concepts

mod avatar;
mod pagination;
mod person_name;

pub use avatar::{avatar_url, random_avatar, AVATAR_POOL_SIZE};
pub use pagination::PageRequest;
pub use person_name::PersonName;
