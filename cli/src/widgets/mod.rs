pub mod artwork;
pub mod equalizer;
pub mod timeline;
pub mod transport;
pub mod util;
