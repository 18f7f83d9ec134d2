mod candidate;
mod data_url_reader;

pub use candidate::candidate_from_path;
pub use data_url_reader::FsDataUrlReader;
