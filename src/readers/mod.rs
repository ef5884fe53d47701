pub mod dataset_reader;
pub mod remote_source;

pub use dataset_reader::DatasetReader;
pub use remote_source::{decode_body, RemoteSource};
