pub mod normalize;
pub mod resume;
