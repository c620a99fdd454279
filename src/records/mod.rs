//! Typed record parsers (spec §4.6–§4.8). Each submodule parses one
//! fixed-layout struct from a [`crate::reader::ByteReader`] positioned at
//! the record's start; none of them follow handles themselves — that's
//! [`crate::catalog`] and [`crate::model`]'s job.

pub mod actor;
pub mod entrance;
pub mod film;
pub mod frames;
pub mod game_variables;
pub mod image;
pub mod multi_init;
pub mod object;
pub mod poly;
pub mod process_table;
pub mod scene;

pub use actor::Actor;
pub use entrance::Entrance;
pub use film::{Film, ReelHeader};
pub use frames::Frames;
pub use game_variables::GameVariables;
pub use image::Image;
pub use multi_init::MultiInit;
pub use object::Object;
pub use poly::Poly;
pub use process_table::ProcessEntry;
pub use scene::Scene;
