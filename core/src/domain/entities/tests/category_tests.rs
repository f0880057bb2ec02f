//! Unit tests for the category entity

use crate::domain::entities::category::{BoardDescriptor, Category};

#[test]
fn test_board_descriptor() {
    let category = Category {
        id: 12,
        slug: "konkuk".to_string(),
        name: "Konkuk University".to_string(),
        parent_id: Some(1),
        requires_auth: true,
    };

    assert_eq!(
        category.board_descriptor(),
        BoardDescriptor {
            id: 12,
            parent_id: Some(1),
            requires_auth: true,
        }
    );
}
