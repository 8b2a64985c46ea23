pub mod responses;

pub use responses::ParseOutcome;
