//! Seed data loaded at startup

use crate::models::{Item, User};

/// Users present when the service starts
pub fn seed_users() -> Vec<User> {
    vec![User {
        id: 10,
        username: "theUser".to_string(),
        first_name: "John".to_string(),
        last_name: "James".to_string(),
        email: "john@email.com".to_string(),
        password: "12345".to_string(),
        phone: "12345".to_string(),
        user_status: 1,
    }]
}

/// Items present when the service starts
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Item 1".to_string(),
            description: Some("This is item 1".to_string()),
        },
        Item {
            id: 2,
            name: "Item 2".to_string(),
            description: Some("This is item 2".to_string()),
        },
    ]
}
