mod avatar_resolver;
mod url_avatar_resolver;

pub use avatar_resolver::*;
pub use url_avatar_resolver::*;
