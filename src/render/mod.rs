pub(crate) mod blur;
pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod shapes;
pub(crate) mod text;
