pub(crate) mod contrast;
pub(crate) mod fit;
pub(crate) mod geometry;
