use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("unknown barcode format: {name}")]
    UnknownFormat { name: String },
    #[error("unknown checksum type: {name}")]
    UnknownChecksum { name: String },
    #[error("unknown quality level: {name}")]
    UnknownQuality { name: String },
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
