//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod house_design_repo;
pub mod inquiry_repo;
pub mod owner_info_repo;
pub mod plot_repo;
pub mod setting_repo;
pub mod stats_repo;
pub mod user_repo;

pub use house_design_repo::HouseDesignRepo;
pub use inquiry_repo::InquiryRepo;
pub use owner_info_repo::OwnerInfoRepo;
pub use plot_repo::PlotRepo;
pub use setting_repo::SettingRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
