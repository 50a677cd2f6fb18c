//! Default rows written into empty tables

/// A default role row
#[derive(Debug, Clone, Copy)]
pub struct SeedRole {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
}

/// A sample user row
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub avatar_index: u8,
    pub role_id: i64,
}

pub const SEED_ROLES: [SeedRole; 3] = [
    SeedRole {
        id: 1,
        name: "User",
        description: "Standard user with basic access",
    },
    SeedRole {
        id: 2,
        name: "Admin",
        description: "Administrator with full system access",
    },
    SeedRole {
        id: 3,
        name: "Moderator",
        description: "Moderator with content management access",
    },
];

pub const SEED_USERS: [SeedUser; 2] = [
    SeedUser {
        email: "george.bluth@reqres.in",
        first_name: "George",
        last_name: "Bluth",
        avatar_index: 1,
        role_id: 2,
    },
    SeedUser {
        email: "janet.weaver@reqres.in",
        first_name: "Janet",
        last_name: "Weaver",
        avatar_index: 2,
        role_id: 1,
    },
];
