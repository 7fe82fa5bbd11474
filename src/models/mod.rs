/// The envelope wrapping every successful search response.
pub mod envelope;

/// A single hadith record.
pub mod hadith;

pub use envelope::ApiResponse;
pub use hadith::Hadith;
