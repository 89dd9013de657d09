mod gallery_repo;
mod generation_repo;
mod transaction_repo;

pub use gallery_repo::GalleryRepo;
pub use generation_repo::GenerationRepo;
pub use transaction_repo::TransactionRepo;
