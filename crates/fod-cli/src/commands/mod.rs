pub mod inspect;
pub mod play;
