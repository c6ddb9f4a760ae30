mod showcase;

pub use showcase::{NO_DIRECTOR_PROVIDED, NO_FACTORY_PROVIDED, Showcase};
