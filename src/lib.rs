// Mimeo: plagiarism detection via an ensemble of text similarity metrics.
//
// This is the library root. The scoring core lives in `similarity`; the
// other modules are thin adapters around it (configuration, terminal
// output, performance counters, HTTP API).

pub mod config;
pub mod errors;
pub mod output;
pub mod similarity;
pub mod stats;
pub mod web;
