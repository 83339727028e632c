pub mod text_dir;
pub mod url_list;

pub use text_dir::TextDirSource;
pub use url_list::UrlListSource;
