// Utility types shared by hooks and components

pub mod load_state;

pub use load_state::LoadState;
