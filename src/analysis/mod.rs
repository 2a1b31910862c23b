pub mod aggregate;
pub mod normalize;
pub mod presentation;
pub mod record;
