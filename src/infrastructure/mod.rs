pub mod corpus;
pub mod http;
pub mod logging;
pub mod morphology;
