//! Avatar URLs from the fixed pool of sample faces

use rand::Rng;

/// Number of avatars in the pool
pub const AVATAR_POOL_SIZE: u8 = 10;

/// URL of the avatar with the given pool index (1-based)
pub fn avatar_url(index: u8) -> String {
    format!("https://reqres.in/img/faces/{index}-image.jpg")
}

/// Pick a pseudo-random avatar from the pool
pub fn random_avatar() -> String {
    let index = rand::thread_rng().gen_range(1..=AVATAR_POOL_SIZE);
    avatar_url(index)
}
