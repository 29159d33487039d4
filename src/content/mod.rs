pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ContentProvider, FetchError};
pub use providers::{BlogsProvider, MembersProvider, VideosProvider};
pub use types::Item;
