// UI Components
// Page chrome and the GitHub profile card

pub mod footer;
pub mod github_card;
pub mod header;

pub use footer::Footer;
pub use github_card::GithubCard;
pub use header::Header;
