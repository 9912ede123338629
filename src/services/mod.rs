// External APIs

pub mod github;
