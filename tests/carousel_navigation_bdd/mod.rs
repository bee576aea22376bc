//! Support modules for carousel navigation BDD tests.

pub(crate) mod state;

pub(crate) use state::CarouselTestState;
