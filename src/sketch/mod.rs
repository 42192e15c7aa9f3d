pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod grid;
pub(crate) mod line;
pub(crate) mod modulate;
pub(crate) mod noise;
