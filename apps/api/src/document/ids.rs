use uuid::Uuid;

use crate::document::model::EntryId;

const ID_PREFIX: &str = "id-";
/// Hex characters kept from the v4 UUID (48 random bits).
const ID_HEX_LEN: usize = 12;

/// Returns a fresh entry identity. No registry, no counter: collisions are left
/// to the randomness of the UUID.
pub fn new_id() -> EntryId {
    let hex = Uuid::new_v4().simple().to_string();
    EntryId::new(format!("{ID_PREFIX}{}", &hex[..ID_HEX_LEN]))
}
