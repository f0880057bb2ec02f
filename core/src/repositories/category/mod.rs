//! Category and school email domain repository module.

mod r#trait;
pub use r#trait::CategoryRepository;

mod mock;
pub use mock::MockCategoryRepository;
