pub mod recovery;
pub mod scenarios;
pub mod stress;
