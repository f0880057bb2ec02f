//! MySQL repository implementations

pub mod category_repository_impl;
pub mod verification_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use verification_repository_impl::MySqlVerificationRepository;
