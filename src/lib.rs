pub mod config;
pub mod corpus;
pub mod pagerank;
pub mod report;
