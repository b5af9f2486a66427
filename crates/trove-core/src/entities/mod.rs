//! Entity structs for parsed awesome-list data.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema generation. Multi-word fields serialize in camelCase
//! to match the wire format downstream consumers expect.

mod list;
mod resource;

pub use list::AwesomeList;
pub use resource::Resource;
