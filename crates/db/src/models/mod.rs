//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod house_design;
pub mod inquiry;
pub mod owner_info;
pub mod plot;
pub mod setting;
pub mod stats;
pub mod user;
