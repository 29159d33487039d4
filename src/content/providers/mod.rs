mod blogs;
mod html;
mod members;
mod videos;

pub use blogs::BlogsProvider;
pub use members::MembersProvider;
pub use videos::VideosProvider;
