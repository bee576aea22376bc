//! Scenario state for carousel navigation BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use scroller::tui::CarouselApp;

/// State shared across steps in a carousel navigation scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct CarouselTestState {
    /// The TUI application model under test.
    pub(crate) app: Slot<CarouselApp>,
    /// The rendered view output.
    pub(crate) rendered_view: Slot<String>,
}
