pub mod use_github_profile;

pub use use_github_profile::use_github_profile;
